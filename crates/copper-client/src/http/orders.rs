/*
[INPUT]:  Withdrawal parameters, order ids, pagination
[OUTPUT]: Created orders, cancellation outcome, order summaries
[POS]:    HTTP layer - order endpoints
[UPDATE]: When adding order endpoints or changing order mapping
*/

use reqwest::Method;
use rust_decimal::Decimal;
use tracing::info;

use crate::http::{CopperClient, CopperError, NO_BODY, Result};
use crate::types::{
    CreateOrderRequest, CreateOrderResponse, Order, OrderListItem, OrderType, OrdersListResponse,
};

pub const PATH_ORDER: &str = "/platform/orders";

/// Path of a single order
///
/// The id is percent-encoded into exactly one segment under [`PATH_ORDER`].
/// Ids that URL normalization would collapse (`""`, `.`, `..`) are rejected.
pub fn order_path(order_id: &str) -> Result<String> {
    if matches!(order_id, "" | "." | "..") {
        return Err(CopperError::InvalidPathSegment(order_id.to_string()));
    }
    Ok(format!("{PATH_ORDER}/{}", urlencoding::encode(order_id)))
}

impl CopperClient {
    /// Create a withdrawal order from the configured portfolio
    ///
    /// POST /platform/orders
    pub async fn create_withdraw_order(
        &self,
        external_order_id: &str,
        to_address: &str,
        currency: &str,
        amount: Decimal,
    ) -> Result<Order> {
        self.config().ensure_supported(currency)?;

        let req = CreateOrderRequest {
            external_order_id: external_order_id.to_string(),
            order_type: OrderType::Withdraw,
            base_currency: currency.to_string(),
            main_currency: self.config().main_currency.clone(),
            amount,
            portfolio_id: self.config().portfolio_id.clone(),
            to_address: to_address.to_string(),
            description: external_order_id.to_string(),
        };

        let resp: CreateOrderResponse = self
            .signed_request(Method::POST, PATH_ORDER, &[], Some(&req))
            .await?;
        let order = Order::try_from(resp)?;

        info!(
            order_id = %order.order_id,
            external_order_id = %order.external_order_id,
            amount = %order.amount,
            "withdraw order created"
        );
        Ok(order)
    }

    /// Cancel an order
    ///
    /// PATCH /platform/orders/{order_id}
    pub async fn cancel_order(&self, order_id: &str) -> Result<()> {
        let path = order_path(order_id)?;
        self.signed_request_empty(Method::PATCH, &path, &[], NO_BODY)
            .await?;
        info!(order_id, "order cancelled");
        Ok(())
    }

    /// List orders in server order
    ///
    /// GET /platform/orders?limit={limit}&offset={offset}
    pub async fn get_orders_list(&self, limit: u32, offset: u32) -> Result<Vec<OrderListItem>> {
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let resp: OrdersListResponse = self
            .signed_request(Method::GET, PATH_ORDER, &query, NO_BODY)
            .await?;
        Ok(resp.orders)
    }
}
