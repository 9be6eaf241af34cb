/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::OrderType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositTargetRequest {
    pub external_id: String,
    pub portfolio_id: String,
    pub currency: String,
    pub main_currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub external_order_id: String,
    pub order_type: OrderType,
    pub base_currency: String,
    pub main_currency: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub portfolio_id: String,
    pub to_address: String,
    pub description: String,
}
