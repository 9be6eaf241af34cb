/*
[INPUT]:  Currency code
[OUTPUT]: Deposit target with a receiving address
[POS]:    HTTP layer - deposit target endpoint
[UPDATE]: When changing deposit target request or response mapping
*/

use reqwest::Method;
use tracing::info;

use crate::http::{CopperClient, Result};
use crate::types::{CreateDepositTargetRequest, CreateDepositTargetResponse, DepositTarget};

pub const PATH_DEPOSIT_TARGET: &str = "/platform/deposit-targets";

impl CopperClient {
    /// Create a deposit target for a supported currency
    ///
    /// POST /platform/deposit-targets
    pub async fn create_deposit_target(&self, currency: &str) -> Result<DepositTarget> {
        self.config().ensure_supported(currency)?;

        let req = CreateDepositTargetRequest {
            external_id: self.next_external_id(),
            portfolio_id: self.config().portfolio_id.clone(),
            currency: currency.to_string(),
            main_currency: self.config().main_currency.clone(),
            name: None,
        };

        let resp: CreateDepositTargetResponse = self
            .signed_request(Method::POST, PATH_DEPOSIT_TARGET, &[], Some(&req))
            .await?;
        let target = DepositTarget::try_from(resp)?;

        info!(
            deposit_target_id = %target.deposit_target_id,
            currency = %target.currency,
            "deposit target created"
        );
        Ok(target)
    }
}
