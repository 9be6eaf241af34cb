/*
[INPUT]:  Currency code
[OUTPUT]: Currency description with price in the configured rate currency
[POS]:    HTTP layer - currency lookup endpoint
[UPDATE]: When changing currency query parameters or response mapping
*/

use reqwest::Method;

use crate::http::{CopperClient, CopperError, NO_BODY, Result};
use crate::types::{CurrenciesResponse, Currency};

pub const PATH_CURRENCY: &str = "/platform/currencies";

impl CopperClient {
    /// Look up one supported currency
    ///
    /// GET /platform/currencies?currency={currency}&rateFor={rate_currency}
    pub async fn get_currency(&self, currency: &str) -> Result<Currency> {
        self.config().ensure_supported(currency)?;

        let query = [
            ("currency", currency.to_string()),
            ("rateFor", self.config().rate_currency.clone()),
        ];
        let resp: CurrenciesResponse = self
            .signed_request(Method::GET, PATH_CURRENCY, &query, NO_BODY)
            .await?;

        resp.currencies
            .into_iter()
            .next()
            .ok_or_else(|| CopperError::NotFound(format!("currency {currency}")))
    }
}
