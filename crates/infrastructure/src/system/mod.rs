pub mod outbound_ip;

pub use outbound_ip::UdpProbeOutboundIp;
