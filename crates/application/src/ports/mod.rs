mod blacklist_repository;
mod client_activity_repository;
mod outbound_ip;
mod response_writer;
mod upstream_exchange;

pub use blacklist_repository::BlacklistRepository;
pub use client_activity_repository::ClientActivityRepository;
pub use outbound_ip::OutboundIpProvider;
pub use response_writer::ResponseWriter;
pub use upstream_exchange::UpstreamExchange;
