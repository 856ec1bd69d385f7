mod get_clients;
mod record_activity;

pub use get_clients::GetClientsUseCase;
pub use record_activity::RecordClientActivityUseCase;
