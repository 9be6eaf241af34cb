/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Currency, OrderListItem};

/// Body of every non-success response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatedToken {
    pub currency: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepositTargetResponse {
    pub deposit_target_id: String,
    pub external_id: String,
    #[serde(default)]
    pub portfolio_id: String,
    #[serde(default)]
    pub portfolio_type: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub target_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub main_currency: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub updated_by: String,
    #[serde(default)]
    pub accept_all_tokens: bool,
    #[serde(default)]
    pub require_tokens_activation: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_tokens: Option<Vec<ActivatedToken>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderExtra {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub to_address: String,
    pub fees_percent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub external_order_id: String,
    pub status: String,
    pub order_type: String,
    #[serde(default)]
    pub portfolio_id: String,
    #[serde(default)]
    pub portfolio_type: String,
    #[serde(default)]
    pub account_id: String,
    pub amount: String,
    pub base_currency: String,
    #[serde(default)]
    pub main_currency: String,
    pub extra: CreateOrderExtra,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    pub currencies: Vec<Currency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersListResponse {
    pub orders: Vec<OrderListItem>,
}
