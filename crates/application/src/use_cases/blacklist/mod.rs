mod check_blacklist;
mod manage_blacklist;

pub use check_blacklist::CheckBlacklistUseCase;
pub use manage_blacklist::ManageBlacklistUseCase;
