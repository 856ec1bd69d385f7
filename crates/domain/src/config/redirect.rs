use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RedirectConfig {
    #[serde(default)]
    pub use_redirect: bool,

    /// IPv4 literal; empty means "this host's outbound address".
    #[serde(default)]
    pub redirect_site: String,
}
