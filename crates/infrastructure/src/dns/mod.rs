pub mod forwarding;
pub mod server;
pub mod transport;

pub use forwarding::UpstreamForwarder;
pub use server::{DnsServerHandler, TcpResponseWriter, UdpResponseWriter};
