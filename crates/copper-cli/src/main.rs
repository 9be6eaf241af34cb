/*
[INPUT]:  CLI arguments, YAML configuration file, COPPER_* environment variables
[OUTPUT]: JSON result of one Copper API call on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use copper_cli::{Command, load_config, run_command};
use copper_client::CopperClient;

#[derive(Parser, Debug)]
#[command(name = "copper", version, about = "Copper custody API client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: String,
    /// Validate configuration and exit without calling the API
    #[arg(long = "dry-run")]
    dry_run: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    init_tracing(&args.log_level)?;

    let config = load_config(args.config_path.as_deref())?;
    info!(
        base_url = %config.base_url,
        portfolio_id = %config.portfolio_id,
        "configuration loaded"
    );

    if args.dry_run {
        info!("dry-run requested; configuration validated");
        return Ok(());
    }

    let client = CopperClient::new(config.clone()).context("create copper client")?;
    let command = args.command.unwrap_or_default();
    let value = run_command(&client, &config, command).await?;

    let rendered = serde_json::to_string_pretty(&value).context("render result")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}
