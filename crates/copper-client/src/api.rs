/*
[INPUT]:  Endpoint arguments from application code
[OUTPUT]: Domain objects or typed errors
[POS]:    Public API surface - trait over the Copper operations
[UPDATE]: When adding or changing endpoint operations
*/

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::http::{CopperClient, Result};
use crate::types::{Currency, DepositTarget, Order, OrderListItem};

/// Copper operations used by application code
///
/// Implemented by [`CopperClient`]; substitute a fake in tests of calling code.
#[async_trait]
pub trait CopperApi: Send + Sync {
    async fn create_deposit_target(&self, currency: &str) -> Result<DepositTarget>;

    async fn get_currency(&self, currency: &str) -> Result<Currency>;

    async fn create_withdraw_order(
        &self,
        external_order_id: &str,
        to_address: &str,
        currency: &str,
        amount: Decimal,
    ) -> Result<Order>;

    async fn cancel_order(&self, order_id: &str) -> Result<()>;

    async fn get_orders_list(&self, limit: u32, offset: u32) -> Result<Vec<OrderListItem>>;
}

#[async_trait]
impl CopperApi for CopperClient {
    async fn create_deposit_target(&self, currency: &str) -> Result<DepositTarget> {
        CopperClient::create_deposit_target(self, currency).await
    }

    async fn get_currency(&self, currency: &str) -> Result<Currency> {
        CopperClient::get_currency(self, currency).await
    }

    async fn create_withdraw_order(
        &self,
        external_order_id: &str,
        to_address: &str,
        currency: &str,
        amount: Decimal,
    ) -> Result<Order> {
        CopperClient::create_withdraw_order(self, external_order_id, to_address, currency, amount)
            .await
    }

    async fn cancel_order(&self, order_id: &str) -> Result<()> {
        CopperClient::cancel_order(self, order_id).await
    }

    async fn get_orders_list(&self, limit: u32, offset: u32) -> Result<Vec<OrderListItem>> {
        CopperClient::get_orders_list(self, limit, offset).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CopperConfig;
    use crate::http::MockTransport;
    use reqwest::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_client_usable_as_trait_object() {
        let transport = Arc::new(MockTransport::new(StatusCode::OK, r#"{"orders":[]}"#));
        let client = CopperClient::with_transport(CopperConfig::default(), transport.clone())
            .expect("client init");
        let api: Arc<dyn CopperApi> = Arc::new(client);

        let orders = api.get_orders_list(5, 20).await.expect("orders");
        assert!(orders.is_empty());
        assert_eq!(transport.requests()[0].url.query(), Some("limit=5&offset=20"));
    }
}
