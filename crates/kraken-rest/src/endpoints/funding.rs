//! Funding endpoints for deposits and withdrawals
//!
//! These endpoints require authentication.

use kraken_types::{Method, Params};
use tracing::{debug, instrument};

use crate::client::KrakenClient;
use crate::error::RestResult;
use crate::types::{DepositAddress, DepositMethod, TransferStatus, WithdrawInfo};

/// Funding endpoints for deposits and withdrawals
pub struct FundingEndpoints<'a> {
    client: &'a KrakenClient,
}

impl<'a> FundingEndpoints<'a> {
    pub fn new(client: &'a KrakenClient) -> Self {
        Self { client }
    }

    /// Get deposit methods for an asset
    #[instrument(skip(self))]
    pub async fn get_deposit_methods(&self, asset: &str) -> RestResult<Vec<DepositMethod>> {
        debug!("Getting deposit methods for {}", asset);
        let params = Params::new().with("asset", asset);
        self.client.request(Method::DepositMethods, params).await
    }

    /// Get deposit addresses
    ///
    /// # Arguments
    /// * `asset` - Asset to get addresses for
    /// * `method` - Deposit method name
    /// * `new` - Generate a new address
    #[instrument(skip(self))]
    pub async fn get_deposit_addresses(&self, asset: &str, method: &str, new: bool) -> RestResult<Vec<DepositAddress>> {
        let params = Params::new()
            .with("asset", asset)
            .with("method", method)
            .with_opt("new", new.then_some(true));
        self.client.request(Method::DepositAddresses, params).await
    }

    /// Get recent deposit status
    #[instrument(skip(self))]
    pub async fn get_deposit_status(&self, asset: Option<&str>) -> RestResult<Vec<TransferStatus>> {
        let params = Params::new().with_opt("asset", asset);
        self.client.request(Method::DepositStatus, params).await
    }

    /// Get withdrawal fee and limit
    ///
    /// # Arguments
    /// * `asset` - Asset being withdrawn
    /// * `key` - Withdrawal key name, as set up in the account
    /// * `amount` - Amount to withdraw
    #[instrument(skip(self))]
    pub async fn get_withdraw_info(&self, asset: &str, key: &str, amount: &str) -> RestResult<WithdrawInfo> {
        let params = Params::new()
            .with("asset", asset)
            .with("key", key)
            .with("amount", amount);
        self.client.request(Method::WithdrawInfo, params).await
    }

    /// Get recent withdrawal status
    #[instrument(skip(self))]
    pub async fn get_withdraw_status(&self, asset: Option<&str>) -> RestResult<Vec<TransferStatus>> {
        let params = Params::new().with_opt("asset", asset);
        self.client.request(Method::WithdrawStatus, params).await
    }
}
