use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlockingConfig {
    /// Also test the last two labels of a hostname against the blacklist.
    #[serde(default)]
    pub wildcard_subdomain: bool,
}
