#![allow(dead_code)]

use async_trait::async_trait;
use hickory_proto::op::{Message, MessageType, OpCode, Query, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use sinkhole_dns_application::ports::{
    BlacklistRepository, ClientActivityRepository, OutboundIpProvider, ResponseWriter,
    UpstreamExchange,
};
use sinkhole_dns_domain::{ActivityEntry, ClientIdentity, DomainError, TransportKind};
use std::collections::{BTreeSet, HashMap};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub const CLIENT_ADDR: &str = "192.168.1.100:53124";
pub const UPSTREAM_ANSWER: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

pub fn query_message(name: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(0x1234)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    message
}

// ── BlacklistRepository ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockBlacklistRepository {
    domains: Mutex<BTreeSet<String>>,
    lookups: Mutex<Vec<String>>,
    fail_reads: AtomicBool,
}

impl MockBlacklistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        let repo = Self::new();
        repo.domains
            .lock()
            .unwrap()
            .extend(domains.iter().map(|d| d.to_string()));
        repo
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlacklistRepository for MockBlacklistRepository {
    async fn is_listed(&self, domain: &str) -> Result<bool, DomainError> {
        self.lookups.lock().unwrap().push(domain.to_string());
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::StoreRead("mock store unavailable".to_string()));
        }
        Ok(self.domains.lock().unwrap().contains(domain))
    }

    async fn add_domain(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.domains.lock().unwrap().insert(domain.to_string()))
    }

    async fn remove_domain(&self, domain: &str) -> Result<bool, DomainError> {
        Ok(self.domains.lock().unwrap().remove(domain))
    }

    async fn list_domains(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.domains.lock().unwrap().iter().cloned().collect())
    }
}

// ── ClientActivityRepository ────────────────────────────────────────────────

#[derive(Default)]
pub struct MockClientActivityRepository {
    roster: Mutex<BTreeSet<String>>,
    history: Mutex<HashMap<String, Vec<ActivityEntry>>>,
    fail_roster: AtomicBool,
    fail_history: AtomicBool,
}

impl MockClientActivityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_roster(&self, fail: bool) {
        self.fail_roster.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_history(&self, fail: bool) {
        self.fail_history.store(fail, Ordering::SeqCst);
    }

    pub fn roster(&self) -> Vec<String> {
        self.roster.lock().unwrap().iter().cloned().collect()
    }

    pub fn history_of(&self, client: &str) -> Vec<ActivityEntry> {
        self.history
            .lock()
            .unwrap()
            .get(client)
            .cloned()
            .unwrap_or_default()
    }

    pub fn total_entries(&self) -> usize {
        self.history.lock().unwrap().values().map(Vec::len).sum()
    }
}

#[async_trait]
impl ClientActivityRepository for MockClientActivityRepository {
    async fn add_client(&self, client: &ClientIdentity) -> Result<(), DomainError> {
        if self.fail_roster.load(Ordering::SeqCst) {
            return Err(DomainError::StoreWrite("mock roster failure".to_string()));
        }
        self.roster.lock().unwrap().insert(client.to_string());
        Ok(())
    }

    async fn append_history(
        &self,
        client: &ClientIdentity,
        entry: &ActivityEntry,
    ) -> Result<(), DomainError> {
        if self.fail_history.load(Ordering::SeqCst) {
            return Err(DomainError::StoreWrite("mock history failure".to_string()));
        }
        self.history
            .lock()
            .unwrap()
            .entry(client.to_string())
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn list_clients(&self) -> Result<Vec<String>, DomainError> {
        Ok(self.roster())
    }

    async fn history(&self, client: &ClientIdentity) -> Result<Vec<ActivityEntry>, DomainError> {
        Ok(self.history_of(client.as_str()))
    }
}

// ── UpstreamExchange ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUpstream {
    calls: Mutex<Vec<(String, TransportKind)>>,
    should_fail: AtomicBool,
}

impl MockUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let upstream = Self::new();
        upstream.should_fail.store(true, Ordering::SeqCst);
        upstream
    }

    pub fn calls(&self) -> Vec<(String, TransportKind)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamExchange for MockUpstream {
    async fn exchange(
        &self,
        request: &Message,
        transport: TransportKind,
    ) -> Result<Message, DomainError> {
        let name = request
            .queries()
            .first()
            .map(|q| q.name().to_ascii())
            .unwrap_or_default();
        self.calls.lock().unwrap().push((name.clone(), transport));

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::UpstreamExchange("mock upstream down".to_string()));
        }

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_response_code(ResponseCode::NoError);
        response.add_queries(request.queries().iter().cloned());
        response.add_answer(Record::from_rdata(
            Name::from_str(&name).unwrap_or_else(|_| Name::root()),
            300,
            RData::A(A(UPSTREAM_ANSWER)),
        ));
        Ok(response)
    }

    fn upstream_name(&self) -> String {
        "mock-upstream".to_string()
    }
}

// ── OutboundIpProvider ──────────────────────────────────────────────────────

pub struct MockOutboundIp(pub Result<IpAddr, DomainError>);

impl OutboundIpProvider for MockOutboundIp {
    fn outbound_ip(&self) -> Result<IpAddr, DomainError> {
        self.0.clone()
    }
}

// ── ResponseWriter ──────────────────────────────────────────────────────────

pub struct MockResponseWriter {
    transport: TransportKind,
    remote: SocketAddr,
    sent: Arc<Mutex<Vec<Message>>>,
}

impl MockResponseWriter {
    pub fn new(transport: TransportKind, remote: &str) -> (Self, Arc<Mutex<Vec<Message>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                transport,
                remote: remote.parse().unwrap(),
                sent: sent.clone(),
            },
            sent,
        )
    }

    pub fn udp() -> (Self, Arc<Mutex<Vec<Message>>>) {
        Self::new(TransportKind::Datagram, CLIENT_ADDR)
    }

    pub fn tcp() -> (Self, Arc<Mutex<Vec<Message>>>) {
        Self::new(TransportKind::Stream, CLIENT_ADDR)
    }
}

#[async_trait]
impl ResponseWriter for MockResponseWriter {
    fn transport(&self) -> TransportKind {
        self.transport
    }

    fn remote_addr(&self) -> SocketAddr {
        self.remote
    }

    async fn send(self, message: Message) -> Result<(), DomainError> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}
