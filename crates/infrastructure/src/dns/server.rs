use crate::dns::transport::tcp::{read_with_length_prefix, send_with_length_prefix};
use async_trait::async_trait;
use hickory_proto::op::Message;
use hickory_proto::serialize::binary::BinEncodable;
use sinkhole_dns_application::ports::ResponseWriter;
use sinkhole_dns_application::services::ResponseSynthesizer;
use sinkhole_dns_application::use_cases::{HandleDnsQueryUseCase, QueryOutcome};
use sinkhole_dns_domain::{DomainError, TransportKind};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpStream, UdpSocket};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

const MAX_UDP_QUERY_SIZE: usize = 4096;

/// Reply path for a query received on a UDP socket.
pub struct UdpResponseWriter {
    socket: Arc<UdpSocket>,
    peer: SocketAddr,
}

impl UdpResponseWriter {
    pub fn new(socket: Arc<UdpSocket>, peer: SocketAddr) -> Self {
        Self { socket, peer }
    }
}

#[async_trait]
impl ResponseWriter for UdpResponseWriter {
    fn transport(&self) -> TransportKind {
        TransportKind::Datagram
    }

    fn remote_addr(&self) -> SocketAddr {
        self.peer
    }

    async fn send(self, message: Message) -> Result<(), DomainError> {
        let bytes = encode(&message)?;
        self.socket
            .send_to(&bytes, self.peer)
            .await
            .map_err(|e| DomainError::ResponseWrite(e.to_string()))?;
        Ok(())
    }
}

/// Reply path for one framed query on a TCP connection.
///
/// Queries pipelined on the same connection share the write half.
pub struct TcpResponseWriter {
    stream: Arc<Mutex<OwnedWriteHalf>>,
    peer: SocketAddr,
}

impl TcpResponseWriter {
    pub fn new(stream: Arc<Mutex<OwnedWriteHalf>>, peer: SocketAddr) -> Self {
        Self { stream, peer }
    }
}

#[async_trait]
impl ResponseWriter for TcpResponseWriter {
    fn transport(&self) -> TransportKind {
        TransportKind::Stream
    }

    fn remote_addr(&self) -> SocketAddr {
        self.peer
    }

    async fn send(self, message: Message) -> Result<(), DomainError> {
        let bytes = encode(&message)?;
        let mut stream = self.stream.lock().await;
        send_with_length_prefix(&mut *stream, &bytes)
            .await
            .map_err(|e| DomainError::ResponseWrite(e.to_string()))
    }
}

fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    message
        .to_bytes()
        .map_err(|e| DomainError::MalformedMessage(format!("Failed to serialize response: {}", e)))
}

/// Bridges raw wire messages from the listeners to the query router.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns `None` when the input was dropped without a reply.
    pub async fn handle_bytes<W: ResponseWriter>(
        &self,
        bytes: &[u8],
        writer: W,
    ) -> Option<QueryOutcome> {
        match Message::from_vec(bytes) {
            Ok(request) => Some(self.use_case.execute(&request, writer).await),
            Err(e) => {
                let peer = writer.remote_addr();
                if bytes.len() < 2 {
                    debug!(client = %peer, len = bytes.len(), "Dropping runt message");
                    return None;
                }
                warn!(client = %peer, error = %e, "Failed to decode query");
                let id = u16::from_be_bytes([bytes[0], bytes[1]]);
                if let Err(e) = writer.send(ResponseSynthesizer::format_error(id)).await {
                    error!(error = %e, client = %peer, "Failed to send FORMERR");
                }
                Some(QueryOutcome::Malformed)
            }
        }
    }

    /// Receive loop for one UDP socket. Every datagram is handled in its own task.
    pub async fn serve_udp(self, socket: Arc<UdpSocket>) {
        let mut recv_buf = [0u8; MAX_UDP_QUERY_SIZE];

        loop {
            let (len, peer) = match socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) => {
                    // ICMP errors from earlier replies surface here on some platforms.
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            };

            let query: Arc<[u8]> = Arc::from(&recv_buf[..len]);
            let handler = self.clone();
            let writer = UdpResponseWriter::new(socket.clone(), peer);
            tokio::spawn(async move {
                handler.handle_bytes(&query, writer).await;
            });
        }
    }

    /// Reads framed queries until the client closes or stays idle past `idle_timeout`.
    pub async fn serve_tcp_connection(
        self,
        stream: TcpStream,
        peer: SocketAddr,
        idle_timeout: Duration,
    ) {
        let (mut read_half, write_half) = stream.into_split();
        let write_half = Arc::new(Mutex::new(write_half));

        loop {
            let query = match tokio::time::timeout(
                idle_timeout,
                read_with_length_prefix(&mut read_half),
            )
            .await
            {
                Ok(Ok(query)) => query,
                Ok(Err(e)) => {
                    debug!(client = %peer, error = %e, "TCP connection closed");
                    break;
                }
                Err(_) => {
                    debug!(client = %peer, "TCP connection idle timeout");
                    break;
                }
            };

            let handler = self.clone();
            let writer = TcpResponseWriter::new(write_half.clone(), peer);
            tokio::spawn(async move {
                handler.handle_bytes(&query, writer).await;
            });
        }
    }
}
