/*
[INPUT]:  Deserialized settings (file, environment) or defaults
[OUTPUT]: Immutable client configuration with currency allow-set
[POS]:    Configuration layer - injected into CopperClient at construction
[UPDATE]: When adding new configuration options or changing defaults
*/

use std::collections::BTreeSet;
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::{CopperError, Result};

pub const CURRENCY_SOL: &str = "SOL";
pub const CURRENCY_USD: &str = "USD";

/// Copper testnet API
pub const DEFAULT_BASE_URL: &str = "https://api.testnet.copper.co";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Client configuration
///
/// Missing fields fall back to [`CopperConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CopperConfig {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// Never serialized; redacted in `Debug`
    #[serde(skip_serializing)]
    pub secret_key: SecretString,
    pub api_key: String,
    pub base_url: String,
    pub portfolio_id: String,
    /// Main currency sent with deposit targets and orders
    pub main_currency: String,
    /// Quote currency for currency price lookups
    pub rate_currency: String,
    /// Currencies this client will operate on
    pub supported_currencies: BTreeSet<String>,
}

impl Default for CopperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            secret_key: SecretString::default(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            portfolio_id: String::new(),
            main_currency: CURRENCY_SOL.to_string(),
            rate_currency: CURRENCY_USD.to_string(),
            supported_currencies: BTreeSet::from([CURRENCY_SOL.to_string()]),
        }
    }
}

impl CopperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn is_supported_currency(&self, currency: &str) -> bool {
        self.supported_currencies.contains(currency)
    }

    /// Reject currencies outside the allow-set
    pub fn ensure_supported(&self, currency: &str) -> Result<()> {
        if self.is_supported_currency(currency) {
            Ok(())
        } else {
            Err(CopperError::UnsupportedCurrency(currency.to_string()))
        }
    }

    pub fn parsed_base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Check the settings a client cannot work without
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(CopperError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        let url = self.parsed_base_url()?;
        if url.cannot_be_a_base() {
            return Err(CopperError::Config(format!(
                "base_url is not a base URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}
