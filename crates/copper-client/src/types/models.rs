/*
[INPUT]:  Decoded API responses
[OUTPUT]: Domain records returned to callers (deposit targets, orders, currencies)
[POS]:    Data layer - domain objects and response conversion
[UPDATE]: When API schema changes or domain fields are added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::responses::{CreateDepositTargetResponse, CreateOrderResponse};
use crate::http::DecodeError;

/// Address generated by Copper to receive funds for one currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositTarget {
    pub deposit_target_id: String,
    pub external_id: String,
    pub address: String,
    pub status: String,
    pub currency: String,
}

impl TryFrom<CreateDepositTargetResponse> for DepositTarget {
    type Error = DecodeError;

    fn try_from(resp: CreateDepositTargetResponse) -> Result<Self, Self::Error> {
        let address = resp.address.ok_or(DecodeError::MissingField("address"))?;
        let currency = resp.currency.unwrap_or(resp.main_currency);

        Ok(Self {
            deposit_target_id: resp.deposit_target_id,
            external_id: resp.external_id,
            address,
            status: resp.status,
            currency,
        })
    }
}

/// Withdrawal order as accepted by Copper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub external_order_id: String,
    pub status: String,
    pub order_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub to_address: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub fees_percent: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<CreateOrderResponse> for Order {
    type Error = DecodeError;

    fn try_from(resp: CreateOrderResponse) -> Result<Self, Self::Error> {
        let amount = parse_decimal("amount", &resp.amount)?;
        let fees_percent = parse_decimal("extra.feesPercent", &resp.extra.fees_percent)?;

        Ok(Self {
            order_id: resp.order_id,
            external_order_id: resp.external_order_id,
            status: resp.status,
            order_type: resp.order_type,
            amount,
            currency: resp.base_currency,
            to_address: resp.extra.to_address,
            fees_percent,
            created_at: resp.created_at,
            updated_at: resp.updated_at,
        })
    }
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, DecodeError> {
    value
        .parse::<Decimal>()
        .map_err(|source| DecodeError::InvalidDecimal {
            field,
            value: value.to_string(),
            source,
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeLevel {
    pub fee_level: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPrice {
    pub base_currency: String,
    pub quote_currency: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CurrencyEmbedded {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<CurrencyPrice>,
}

/// Currency description, with a price quoted in the configured rate currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub currency: String,
    pub main_currency: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fiat: bool,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub confirmations: String,
    #[serde(default)]
    pub decimal: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fees_levels: Vec<FeeLevel>,
    #[serde(default)]
    pub explorer_url: String,
    #[serde(rename = "_embedded", default)]
    pub embedded: CurrencyEmbedded,
}

impl Currency {
    /// Quoted price, if the API embedded one
    pub fn price(&self) -> Option<&CurrencyPrice> {
        self.embedded.price.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_addresses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_fees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_fees_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_deposit_target_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees_percent: Option<String>,
}

/// Order summary as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderListItem {
    pub order_id: String,
    #[serde(default)]
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
    #[serde(default)]
    pub extra: OrderListExtra,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}
