mod logging;
mod store;
mod upstream;

pub use logging::init_logging;
pub use store::{open_stores, Stores};
pub use upstream::resolve_upstream;

use sinkhole_dns_domain::{CliOverrides, Config};

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
