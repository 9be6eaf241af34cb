/*
[INPUT]:  Parsed subcommand and a Copper API implementation
[OUTPUT]: JSON rendering of the returned domain object
[POS]:    Command layer - maps CLI subcommands onto client operations
[UPDATE]: When adding subcommands or client operations
*/

use clap::Subcommand;
use copper_client::{CopperApi, CopperConfig, CopperError};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a deposit target (defaults to the main currency)
    DepositTarget {
        #[arg(long)]
        currency: Option<String>,
    },
    /// Show currency details with a price in the rate currency
    Currency {
        #[arg(long)]
        currency: Option<String>,
    },
    /// Create a withdrawal order
    Withdraw {
        #[arg(long = "external-order-id")]
        external_order_id: String,
        #[arg(long = "to-address")]
        to_address: String,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        amount: Decimal,
    },
    /// Cancel an order
    Cancel {
        #[arg(long = "order-id")]
        order_id: String,
    },
    /// List orders
    Orders {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::DepositTarget { currency: None }
    }
}

/// Run one command and render its result as JSON
pub async fn run_command(
    api: &dyn CopperApi,
    config: &CopperConfig,
    command: Command,
) -> copper_client::Result<Value> {
    info!(?command, "running command");
    let main_currency = || config.main_currency.clone();

    let value = match command {
        Command::DepositTarget { currency } => {
            let currency = currency.unwrap_or_else(main_currency);
            to_json(&api.create_deposit_target(&currency).await?)?
        }
        Command::Currency { currency } => {
            let currency = currency.unwrap_or_else(main_currency);
            to_json(&api.get_currency(&currency).await?)?
        }
        Command::Withdraw {
            external_order_id,
            to_address,
            currency,
            amount,
        } => {
            let currency = currency.unwrap_or_else(main_currency);
            let order = api
                .create_withdraw_order(&external_order_id, &to_address, &currency, amount)
                .await?;
            to_json(&order)?
        }
        Command::Cancel { order_id } => {
            api.cancel_order(&order_id).await?;
            json!({ "order_id": order_id, "cancelled": true })
        }
        Command::Orders { limit, offset } => to_json(&api.get_orders_list(limit, offset).await?)?,
    };
    Ok(value)
}

fn to_json<T: serde::Serialize>(value: &T) -> copper_client::Result<Value> {
    serde_json::to_value(value).map_err(CopperError::Serialization)
}
