pub mod blocking;
pub mod dns;
pub mod errors;
pub mod logging;
pub mod redirect;
pub mod root;
pub mod server;
pub mod store;

pub use blocking::BlockingConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use redirect::RedirectConfig;
pub use root::{CliOverrides, Config};
pub use server::{ResolutionMode, ServerConfig};
pub use store::{StoreBackend, StoreConfig};
