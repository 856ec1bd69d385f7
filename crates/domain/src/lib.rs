//! Sinkhole DNS Domain Layer
pub mod activity;
pub mod client_identity;
pub mod config;
pub mod errors;
pub mod hostname;
pub mod redirect;
pub mod transport;

pub use activity::ActivityEntry;
pub use client_identity::ClientIdentity;
pub use config::{CliOverrides, Config, ConfigError, ResolutionMode, StoreBackend};
pub use errors::DomainError;
pub use hostname::{blacklist_candidates, normalize_hostname, two_label_parent, LOCALHOST_FQDN};
pub use redirect::RedirectTarget;
pub use transport::TransportKind;
