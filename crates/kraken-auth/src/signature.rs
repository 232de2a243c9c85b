//! Kraken request signatures
//!
//! Kraken signature algorithm:
//! 1. SHA256(nonce + POST_data)
//! 2. HMAC-SHA512(base64_decode(secret), uri_path + SHA256_result)
//! 3. Base64 encode result
//!
//! The SHA256 result is concatenated as raw bytes. Some early client
//! libraries concatenated its base64 text instead; that produces a different
//! signature and is only available as [`SignatureScheme::LegacyBase64Digest`].

use base64::alphabet;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use hmac::{Hmac, Mac};
use kraken_types::Params;
use sha2::{Digest, Sha256, Sha512};

use crate::error::{AuthError, AuthResult};

type HmacSha512 = Hmac<Sha512>;

/// Secret decoder that tolerates missing padding and non-zero trailing bits
///
/// Reference clients decode the secret leniently; a strict decoder would
/// reject secrets those clients accept.
const SECRET_DECODER: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// How the inner SHA256 digest is joined to the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// Raw digest bytes (what the exchange verifies today)
    #[default]
    Canonical,
    /// Base64 text of the digest, for older API revisions
    LegacyBase64Digest,
}

/// Decode a base64 API secret into HMAC key bytes
pub fn decode_secret(secret: &str) -> AuthResult<Vec<u8>> {
    SECRET_DECODER
        .decode(secret.trim())
        .map_err(|e| AuthError::InvalidCredentials(format!("Invalid base64 secret: {}", e)))
}

/// Form-encode parameters in insertion order
pub fn encode_params(params: &Params) -> AuthResult<String> {
    Ok(serde_urlencoded::to_string(params)?)
}

/// Sign an already-encoded POST body with a decoded key
///
/// # Arguments
/// * `key` - Decoded API secret
/// * `path` - Request path only, e.g. `/0/private/Balance`
/// * `nonce` - The nonce that is also carried in `post_data`
/// * `post_data` - URL-encoded POST body
pub fn sign_encoded(
    key: &[u8],
    path: &str,
    nonce: &str,
    post_data: &str,
    scheme: SignatureScheme,
) -> AuthResult<String> {
    let mut sha256 = Sha256::new();
    sha256.update(nonce.as_bytes());
    sha256.update(post_data.as_bytes());
    let digest = sha256.finalize();

    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
    mac.update(path.as_bytes());
    match scheme {
        SignatureScheme::Canonical => mac.update(&digest),
        SignatureScheme::LegacyBase64Digest => mac.update(BASE64.encode(digest).as_bytes()),
    }

    Ok(BASE64.encode(mac.finalize().into_bytes()))
}

/// Compute the signature for a request from its parts
///
/// Pure function: the same inputs always give the same signature. Fails only
/// if `secret` is not valid base64.
///
/// # Example
///
/// ```
/// use kraken_auth::get_message_signature;
/// use kraken_types::Params;
///
/// let params = Params::new().with("mock", "foo");
/// let sig = get_message_signature("/mock/path", &params, "mockSecret", "mockNonce").unwrap();
/// assert_eq!(
///     sig,
///     "VP8viIhM4IDc0gOPRN4oyDqyBr5/f/rSWMMt/NGjwlq9NcmcSnZESpQ1aT4lETVzmyfzUbR6cIi8+2V1wTWtlQ=="
/// );
/// ```
pub fn get_message_signature(
    path: &str,
    params: &Params,
    secret: &str,
    nonce: &str,
) -> AuthResult<String> {
    get_message_signature_with(path, params, secret, nonce, SignatureScheme::Canonical)
}

/// [`get_message_signature`] with an explicit scheme
pub fn get_message_signature_with(
    path: &str,
    params: &Params,
    secret: &str,
    nonce: &str,
    scheme: SignatureScheme,
) -> AuthResult<String> {
    let message = encode_params(params)?;
    let key = decode_secret(secret)?;
    sign_encoded(&key, path, nonce, &message, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_CANONICAL: &str =
        "VP8viIhM4IDc0gOPRN4oyDqyBr5/f/rSWMMt/NGjwlq9NcmcSnZESpQ1aT4lETVzmyfzUbR6cIi8+2V1wTWtlQ==";
    const MOCK_LEGACY: &str =
        "iNaaUtEH8JPRb4YvNaK4RhUo4cpIafeSAtrxlfLq9ClA+pqR8ZoB8xG50qCo7qLDmKniVhu0a9tL3Cswz9j1gw==";

    fn mock_params() -> Params {
        Params::new().with("mock", "foo")
    }

    #[test]
    fn test_mock_vector_canonical() {
        let sig = get_message_signature("/mock/path", &mock_params(), "mockSecret", "mockNonce").unwrap();
        assert_eq!(sig, MOCK_CANONICAL);
    }

    #[test]
    fn test_mock_vector_legacy() {
        let sig = get_message_signature_with(
            "/mock/path",
            &mock_params(),
            "mockSecret",
            "mockNonce",
            SignatureScheme::LegacyBase64Digest,
        )
        .unwrap();
        assert_eq!(sig, MOCK_LEGACY);
        assert_ne!(sig, MOCK_CANONICAL);
    }

    #[test]
    fn test_documented_add_order_vector() {
        // Example from Kraken's REST authentication guide
        let key = decode_secret(
            "kQH5HW/8p1uGOVjbgWA7FunAmGO8lsSUXNsu3eow76sz84Q18fWxnyRzBHCd3pd5nE9qa99HAZtuZuj6F1huXg==",
        )
        .unwrap();

        let sig = sign_encoded(
            &key,
            "/0/private/AddOrder",
            "1616492376594",
            "nonce=1616492376594&ordertype=limit&pair=XBTUSD&price=37500&type=buy&volume=1.25",
            SignatureScheme::Canonical,
        )
        .unwrap();

        assert_eq!(
            sig,
            "4/dpxb3iT4tp/ZCVEwSnEsLxx0bqyhLpdfOpc6fn7OR8+UClSV5n9E6aSS8MPtnRfp32bAb0nmbRn6H8ndwLUQ=="
        );
    }

    #[test]
    fn test_signature_is_deterministic() {
        let params = Params::new().with("nonce", 1u64).with("pair", "XBTUSD");
        let a = get_message_signature("/0/private/Balance", &params, "c2VjcmV0", "1").unwrap();
        let b = get_message_signature("/0/private/Balance", &params, "c2VjcmV0", "1").unwrap();
        assert_eq!(a, b);
        assert!(BASE64.decode(&a).is_ok_and(|bytes| bytes.len() == 64));
    }

    #[test]
    fn test_signature_depends_on_every_input() {
        let params = Params::new().with("nonce", 1u64);
        let base = get_message_signature("/0/private/Balance", &params, "c2VjcmV0", "1").unwrap();

        let other_path = get_message_signature("/0/private/Ledgers", &params, "c2VjcmV0", "1").unwrap();
        let other_nonce = get_message_signature("/0/private/Balance", &params, "c2VjcmV0", "2").unwrap();
        let other_secret = get_message_signature("/0/private/Balance", &params, "c2VjcmV1", "1").unwrap();
        let other_params =
            get_message_signature("/0/private/Balance", &params.clone().with("a", "b"), "c2VjcmV0", "1").unwrap();

        for sig in [other_path, other_nonce, other_secret, other_params] {
            assert_ne!(sig, base);
        }
    }

    #[test]
    fn test_invalid_secret() {
        let err = get_message_signature("/0/private/Balance", &Params::new(), "not-base64!!", "1").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }

    #[test]
    fn test_lenient_secret_decoding() {
        assert_eq!(decode_secret("mockSecret").unwrap().len(), 7);
        assert_eq!(decode_secret("c2VjcmV0").unwrap(), b"secret");
        assert_eq!(decode_secret("c2VjcmV0dA").unwrap(), b"secrett");
        assert_eq!(decode_secret("c2VjcmV0dA==").unwrap(), b"secrett");
    }
}
