/*
[INPUT]:  Optional YAML configuration file and COPPER_* environment variables
[OUTPUT]: Validated client configuration
[POS]:    Configuration layer - binary startup
[UPDATE]: When adding configuration sources or options
*/

use std::path::Path;

use anyhow::{Context, Result};
use copper_client::CopperConfig;

/// Environment variable prefix, e.g. `COPPER_API_KEY`
pub const ENV_PREFIX: &str = "COPPER";

/// Load configuration from file (if given) overlaid with environment variables
pub fn load_config(path: Option<&Path>) -> Result<CopperConfig> {
    let mut builder = ::config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(::config::File::from(path).required(true));
    }

    let settings = builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("supported_currencies"),
        )
        .build()
        .context("read configuration sources")?;

    let config: CopperConfig = settings
        .try_deserialize()
        .context("parse configuration")?;
    config.validate().context("validate configuration")?;
    Ok(config)
}
