use crate::bootstrap;
use crate::di::AdminUseCases;
use crate::{BlacklistAction, ClientsAction};
use sinkhole_dns_domain::{ClientIdentity, Config, StoreBackend};
use std::net::IpAddr;
use tracing::warn;

async fn admin_use_cases(config: &Config) -> anyhow::Result<AdminUseCases> {
    if config.store.backend == StoreBackend::Memory {
        warn!("The in-memory store is private to this process; changes will not reach a running server");
    }
    let stores = bootstrap::open_stores(config).await?;
    Ok(AdminUseCases::new(&stores))
}

pub async fn blacklist(config: &Config, action: BlacklistAction) -> anyhow::Result<()> {
    let use_cases = admin_use_cases(config).await?;

    match action {
        BlacklistAction::Add { domain } => {
            if use_cases.manage_blacklist.add(&domain).await? {
                println!("added {}", domain);
            } else {
                println!("{} is already blacklisted", domain);
            }
        }
        BlacklistAction::Remove { domain } => {
            if use_cases.manage_blacklist.remove(&domain).await? {
                println!("removed {}", domain);
            } else {
                println!("{} was not blacklisted", domain);
            }
        }
        BlacklistAction::List => {
            for domain in use_cases.manage_blacklist.list().await? {
                println!("{}", domain);
            }
        }
    }

    Ok(())
}

pub async fn clients(config: &Config, action: ClientsAction) -> anyhow::Result<()> {
    let use_cases = admin_use_cases(config).await?;

    match action {
        ClientsAction::List => {
            for client in use_cases.get_clients.list().await? {
                println!("{}", client);
            }
        }
        ClientsAction::History { ip } => {
            let ip: IpAddr = ip
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid client address: {}", ip))?;
            let client = ClientIdentity::from_ip(ip);
            for entry in use_cases.get_clients.history(&client).await? {
                println!("{}", entry);
            }
        }
    }

    Ok(())
}
