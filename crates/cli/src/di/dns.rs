use crate::bootstrap;
use sinkhole_dns_application::ports::UpstreamExchange;
use sinkhole_dns_application::services::RedirectResolver;
use sinkhole_dns_application::use_cases::{
    CheckBlacklistUseCase, HandleDnsQueryUseCase, RecordClientActivityUseCase,
};
use sinkhole_dns_domain::{Config, ResolutionMode};
use sinkhole_dns_infrastructure::dns::UpstreamForwarder;
use sinkhole_dns_infrastructure::system::UdpProbeOutboundIp;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let upstream_addr = bootstrap::resolve_upstream(&config.dns).await?;
        let upstream: Arc<dyn UpstreamExchange> =
            Arc::new(UpstreamForwarder::new(upstream_addr, config.dns.timeout()));

        info!(
            upstream = %upstream_addr,
            timeout_secs = config.dns.query_timeout,
            mode = config.server.mode.as_str(),
            "Upstream forwarder configured"
        );

        let use_case = match config.server.mode {
            ResolutionMode::Passthrough => HandleDnsQueryUseCase::new(upstream),
            ResolutionMode::Filter => {
                let stores = bootstrap::open_stores(config).await?;
                let redirect = Arc::new(RedirectResolver::new(
                    config.redirect_target()?,
                    Arc::new(UdpProbeOutboundIp::new()),
                ));

                info!(
                    wildcard_subdomain = config.blocking.wildcard_subdomain,
                    redirect = ?redirect.target(),
                    "Blacklist filtering enabled"
                );

                HandleDnsQueryUseCase::new(upstream).with_filtering(
                    Arc::new(CheckBlacklistUseCase::new(stores.blacklist)),
                    Arc::new(RecordClientActivityUseCase::new(stores.activity)),
                    redirect,
                    config.blocking.wildcard_subdomain,
                )
            }
        };

        Ok(Self {
            handler_use_case: Arc::new(use_case),
        })
    }
}
