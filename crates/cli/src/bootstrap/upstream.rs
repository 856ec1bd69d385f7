use sinkhole_dns_domain::config::DnsConfig;
use std::net::SocketAddr;
use tracing::info;

/// Resolves `upstream_dns` once; the forwarder talks to the first address returned.
pub async fn resolve_upstream(dns: &DnsConfig) -> anyhow::Result<SocketAddr> {
    let (host, port) = dns
        .upstream_host_port()
        .ok_or_else(|| anyhow::anyhow!("Invalid upstream address: {}", dns.upstream_dns))?;

    let addr = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve upstream {}: {}", dns.upstream_dns, e))?
        .next()
        .ok_or_else(|| anyhow::anyhow!("Upstream {} resolved to no address", dns.upstream_dns))?;

    if addr.ip().to_string() != host {
        info!(upstream = %dns.upstream_dns, resolved = %addr, "Resolved upstream resolver");
    }
    Ok(addr)
}
