mod dns;
mod use_cases;

pub use dns::DnsServices;
pub use use_cases::AdminUseCases;
