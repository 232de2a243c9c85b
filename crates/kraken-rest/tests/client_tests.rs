//! End-to-end tests against a mock Kraken server

mod common;

use common::{setup_mock_server, test_client, test_config, TEST_KEY};
use kraken_rest::{KrakenClient, Method, OrderRequest, OrderSide, Params, RestError};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn ok(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "error": [], "result": result }))
}

#[tokio::test]
async fn test_public_call_has_no_credentials() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/public/Time"))
        .respond_with(ok(json!({ "unixtime": 1688669448, "rfc1123": "Thu, 06 Jul 23 18:50:48 +0000" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let time = client.server_time().await.unwrap();
    assert_eq!(time.unixtime, 1688669448);

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    assert!(request.headers.get("API-Key").is_none());
    assert!(request.headers.get("API-Sign").is_none());
    assert!(request.headers.get("User-Agent").is_some());
}

#[tokio::test]
async fn test_private_call_matches_documented_signature() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/AddOrder"))
        .and(header("API-Key", TEST_KEY))
        .and(header(
            "API-Sign",
            "4/dpxb3iT4tp/ZCVEwSnEsLxx0bqyhLpdfOpc6fn7OR8+UClSV5n9E6aSS8MPtnRfp32bAb0nmbRn6H8ndwLUQ==",
        ))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37500&type=buy&volume=1.25",
        ))
        .respond_with(ok(json!({
            "descr": { "order": "buy 1.25 XBTUSD @ limit 37500" },
            "txid": ["OUF4EM-FRGI2-MQMWZD"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = KrakenClient::new(test_config(&server, 1616492376594)).unwrap();
    let params = Params::new()
        .with("ordertype", "limit")
        .with("pair", "XBTUSD")
        .with("price", 37500)
        .with("type", "buy")
        .with("volume", "1.25");

    let result = client.api(Method::AddOrder, params).await.unwrap();
    assert_eq!(result["txid"][0], "OUF4EM-FRGI2-MQMWZD");
}

#[tokio::test]
async fn test_otp_is_sent_in_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/Balance"))
        .and(body_string("nonce=5&otp=246810"))
        .respond_with(ok(json!({ "ZUSD": "171288.6158" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = KrakenClient::new(test_config(&server, 5).with_otp("246810")).unwrap();
    let balance = client.get_balance().await.unwrap();
    assert_eq!(balance.get("ZUSD"), Decimal::from_str("171288.6158").ok());
}

#[tokio::test]
async fn test_nonce_increases_across_calls() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/OpenOrders"))
        .respond_with(ok(json!({ "open": {} })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    for _ in 0..3 {
        client.api_by_name("OpenOrders", Params::new()).await.unwrap();
    }

    let bodies: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| String::from_utf8_lossy(&r.body).into_owned())
        .collect();
    assert_eq!(bodies, vec!["nonce=1", "nonce=2", "nonce=3"]);
}

#[tokio::test]
async fn test_exchange_error_code() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "error": ["Warning", "EGeneral:Invalid arguments"] })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .api(Method::Ticker, Params::new().with("pair", "NOPE"))
        .await
        .unwrap_err();

    assert_eq!(err.exchange_code(), Some("General:Invalid arguments"));
    assert_eq!(err.to_string(), "Kraken API returned error: General:Invalid arguments");
}

#[tokio::test]
async fn test_unrecognized_error_entries() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "error": ["Unrecognized"] })))
        .mount(&server)
        .await;

    let err = test_client(&server).api(Method::Time, Params::new()).await.unwrap_err();
    match err {
        RestError::UnknownExchange { errors } => assert_eq!(errors, vec!["Unrecognized"]),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).api(Method::Time, Params::new()).await.unwrap_err();
    match err {
        RestError::Transport { body, .. } => assert_eq!(body, "<html>Bad Gateway</html>"),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_with_json_body_is_classified() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": ["EService:Unavailable"] })))
        .mount(&server)
        .await;

    let err = test_client(&server).api(Method::Time, Params::new()).await.unwrap_err();
    assert_eq!(err.exchange_code(), Some("Service:Unavailable"));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ok(json!({ "unixtime": 1 })).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = test_config(&server, 1).with_timeout(Duration::from_millis(50));
    let err = KrakenClient::new(config)
        .unwrap()
        .api(Method::Time, Params::new())
        .await
        .unwrap_err();

    assert!(matches!(err, RestError::Network(_)));
    assert!(err.is_timeout());
}

#[tokio::test]
async fn test_unknown_method_makes_no_request() {
    let server = setup_mock_server().await;
    Mock::given(method("POST")).respond_with(ok(json!({}))).expect(0).mount(&server).await;

    let err = test_client(&server)
        .api_by_name("NotAMethod", Params::new())
        .await
        .unwrap_err();
    assert!(matches!(err, RestError::UnknownMethod(_)));
    assert!(err.is_local());
}

#[tokio::test]
async fn test_typed_ticker() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/public/Ticker"))
        .and(body_string("pair=XBTUSD"))
        .respond_with(ok(json!({
            "XXBTZUSD": {
                "a": ["30300.10000", "1", "1.000"],
                "b": ["30300.00000", "1", "1.000"],
                "c": ["30303.20000", "0.00067643"],
                "v": ["4083.67001100", "4412.73601799"],
                "p": ["30706.77771", "30689.13205"],
                "t": [34619, 38907],
                "l": ["29868.30000", "29868.30000"],
                "h": ["31631.00000", "31631.00000"],
                "o": "30502.80000"
            }
        })))
        .mount(&server)
        .await;

    let tickers = test_client(&server).get_ticker("XBTUSD").await.unwrap();
    let ticker = &tickers["XXBTZUSD"];
    assert_eq!(ticker.ask_price(), Decimal::from_str("30300.1").ok());
    assert_eq!(ticker.bid_price(), Decimal::from_str("30300.0").ok());
}

#[tokio::test]
async fn test_typed_add_order() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/AddOrder"))
        .and(body_string("nonce=1&pair=XBTUSD&type=sell&ordertype=market&volume=0.5"))
        .respond_with(ok(json!({
            "descr": { "order": "sell 0.50000000 XBTUSD @ market" },
            "txid": ["OUF4EM-FRGI2-MQMWZD"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let order = OrderRequest::market("XBTUSD", OrderSide::Sell, Decimal::from_str("0.5").unwrap());
    let response = test_client(&server).add_order(&order).await.unwrap();
    assert_eq!(response.txid, Some(vec!["OUF4EM-FRGI2-MQMWZD".to_string()]));
}

#[tokio::test]
async fn test_typed_result_mismatch_is_decode_error() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/0/private/GetWebSocketsToken"))
        .respond_with(ok(json!({ "token": "abc" })))
        .mount(&server)
        .await;

    let err = test_client(&server).account().get_websockets_token().await.unwrap_err();
    assert!(matches!(err, RestError::Decode(_)));
}
