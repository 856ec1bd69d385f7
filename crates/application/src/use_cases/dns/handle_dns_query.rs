use crate::ports::{ResponseWriter, UpstreamExchange};
use crate::services::{RedirectResolver, ResponseSynthesizer};
use crate::use_cases::{CheckBlacklistUseCase, RecordClientActivityUseCase};
use hickory_proto::op::Message;
use hickory_proto::rr::RecordType;
use sinkhole_dns_domain::{ClientIdentity, TransportKind, LOCALHOST_FQDN};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// How a single query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Upstream answer relayed to the client.
    Forwarded,
    /// Sinkhole A answer with the given address.
    Blocked(Ipv4Addr),
    SuppressedAaaa,
    /// Upstream exchange failed; the client got SERVFAIL.
    UpstreamFailed,
    /// No question section; the client got FORMERR.
    Malformed,
}

struct Filtering {
    blacklist: Arc<CheckBlacklistUseCase>,
    activity: Arc<RecordClientActivityUseCase>,
    redirect: Arc<RedirectResolver>,
    wildcard: bool,
}

/// Per-query decision engine: classify, filter or forward, then reply once.
pub struct HandleDnsQueryUseCase {
    upstream: Arc<dyn UpstreamExchange>,
    filtering: Option<Filtering>,
}

impl HandleDnsQueryUseCase {
    /// Pass-through variant: every query goes upstream.
    pub fn new(upstream: Arc<dyn UpstreamExchange>) -> Self {
        Self {
            upstream,
            filtering: None,
        }
    }

    pub fn with_filtering(
        mut self,
        blacklist: Arc<CheckBlacklistUseCase>,
        activity: Arc<RecordClientActivityUseCase>,
        redirect: Arc<RedirectResolver>,
        wildcard: bool,
    ) -> Self {
        self.filtering = Some(Filtering {
            blacklist,
            activity,
            redirect,
            wildcard,
        });
        self
    }

    pub fn is_filtering(&self) -> bool {
        self.filtering.is_some()
    }

    pub async fn execute<W: ResponseWriter>(&self, request: &Message, writer: W) -> QueryOutcome {
        let Some(query) = request.queries().first() else {
            warn!(id = request.id(), "Query without question section");
            Self::reply(writer, ResponseSynthesizer::format_error(request.id())).await;
            return QueryOutcome::Malformed;
        };

        let Some(filtering) = &self.filtering else {
            return self.forward(request, writer).await;
        };

        let hostname = query.name().to_ascii();

        match query.query_type() {
            RecordType::AAAA => {
                debug!(hostname = %hostname, "Suppressing AAAA query");
                Self::reply(writer, ResponseSynthesizer::suppressed_aaaa(request)).await;
                QueryOutcome::SuppressedAaaa
            }
            RecordType::A if hostname == LOCALHOST_FQDN => self.forward(request, writer).await,
            RecordType::A => {
                let client = ClientIdentity::from_socket_addr(writer.remote_addr());
                filtering.activity.execute(&client, &hostname).await;

                let blocked = match filtering
                    .blacklist
                    .execute(&hostname, filtering.wildcard)
                    .await
                {
                    Ok(blocked) => blocked,
                    Err(e) => {
                        // Fail open.
                        warn!(error = %e, hostname = %hostname, "Blacklist lookup failed, forwarding");
                        false
                    }
                };

                if blocked {
                    let address = filtering.redirect.resolve();
                    info!(
                        hostname = %hostname,
                        client = %client,
                        redirect = %address,
                        "Intercepted blacklisted domain"
                    );
                    Self::reply(writer, ResponseSynthesizer::blocked_a(request, address)).await;
                    QueryOutcome::Blocked(address)
                } else {
                    debug!(hostname = %hostname, client = %client, "Sending A query upstream");
                    self.forward(request, writer).await
                }
            }
            _ => self.forward(request, writer).await,
        }
    }

    async fn forward<W: ResponseWriter>(&self, request: &Message, writer: W) -> QueryOutcome {
        let transport: TransportKind = writer.transport();

        match self.upstream.exchange(request, transport).await {
            Ok(response) => {
                Self::reply(writer, response).await;
                QueryOutcome::Forwarded
            }
            Err(e) => {
                error!(
                    error = %e,
                    upstream = %self.upstream.upstream_name(),
                    transport = %transport,
                    "Error getting response from upstream"
                );
                Self::reply(writer, ResponseSynthesizer::server_failure(request)).await;
                QueryOutcome::UpstreamFailed
            }
        }
    }

    async fn reply<W: ResponseWriter>(writer: W, message: Message) {
        let peer = writer.remote_addr();
        if let Err(e) = writer.send(message).await {
            error!(error = %e, client = %peer, "Failed to send response");
        }
    }
}
