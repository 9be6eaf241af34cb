/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Withdraw,
    Deposit,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Withdraw => "withdraw",
            OrderType::Deposit => "deposit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderType::Withdraw).unwrap(),
            format!("\"{}\"", OrderType::Withdraw.as_str())
        );
        let parsed: OrderType = serde_json::from_str("\"deposit\"").unwrap();
        assert_eq!(parsed, OrderType::Deposit);
    }
}
