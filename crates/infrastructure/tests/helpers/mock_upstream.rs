#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const UPSTREAM_ANSWER: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);
pub const UPSTREAM_TTL: u32 = 60;

#[derive(Default)]
pub struct UpstreamStats {
    udp: AtomicUsize,
    tcp: AtomicUsize,
}

impl UpstreamStats {
    pub fn udp_queries(&self) -> usize {
        self.udp.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.udp_queries() + self.tcp_queries()
    }
}

/// Loopback resolver listening on the same port over UDP and TCP.
///
/// A queries get `UPSTREAM_ANSWER`; every other type gets an empty NOERROR.
/// A silent upstream reads queries but never answers.
pub struct MockUpstream {
    addr: SocketAddr,
    stats: Arc<UpstreamStats>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start() -> Self {
        Self::spawn(false).await
    }

    pub async fn start_silent() -> Self {
        Self::spawn(true).await
    }

    async fn spawn(silent: bool) -> Self {
        let (udp, tcp) = bind_pair().await;
        let addr = udp.local_addr().unwrap();
        let stats = Arc::new(UpstreamStats::default());
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let udp_stats = stats.clone();
        let tcp_stats = stats.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = udp.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        udp_stats.udp.fetch_add(1, Ordering::SeqCst);
                        if silent {
                            continue;
                        }
                        if let Some(reply) = answer(&buf[..len]) {
                            let _ = udp.send_to(&reply, peer).await;
                        }
                    }
                }
            }
        });

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = tcp.accept().await else { break };
                let stats = tcp_stats.clone();
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut query).await.is_err() {
                        return;
                    }
                    stats.tcp.fetch_add(1, Ordering::SeqCst);
                    if silent {
                        // Hold the connection open without replying.
                        let _ = stream.read(&mut len_buf).await;
                        return;
                    }
                    if let Some(reply) = answer(&query) {
                        let _ = stream.write_all(&(reply.len() as u16).to_be_bytes()).await;
                        let _ = stream.write_all(&reply).await;
                        let _ = stream.flush().await;
                    }
                });
            }
        });

        Self {
            addr,
            stats,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn stats(&self) -> Arc<UpstreamStats> {
        self.stats.clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn bind_pair() -> (UdpSocket, TcpListener) {
    for _ in 0..32 {
        let udp = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = udp.local_addr().unwrap();
        if let Ok(tcp) = TcpListener::bind(addr).await {
            return (udp, tcp);
        }
    }
    panic!("could not bind UDP and TCP on a shared loopback port");
}

fn answer(query: &[u8]) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);

    for q in request.queries() {
        response.add_query(q.clone());
        if q.query_type() == RecordType::A {
            response.add_answer(Record::from_rdata(
                q.name().clone(),
                UPSTREAM_TTL,
                RData::A(A(UPSTREAM_ANSWER)),
            ));
        }
    }

    response.to_bytes().ok()
}

pub fn query_message(id: u16, name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message
}

pub fn first_a(message: &Message) -> Option<Ipv4Addr> {
    message.answers().iter().find_map(|r| match r.data() {
        Some(RData::A(a)) => Some(a.0),
        _ => None,
    })
}
