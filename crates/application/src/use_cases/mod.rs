pub mod blacklist;
pub mod clients;
pub mod dns;

pub use blacklist::{CheckBlacklistUseCase, ManageBlacklistUseCase};
pub use clients::{GetClientsUseCase, RecordClientActivityUseCase};
pub use dns::{HandleDnsQueryUseCase, QueryOutcome};
