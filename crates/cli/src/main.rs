use clap::{Parser, Subcommand};
use sinkhole_dns_domain::CliOverrides;
use sinkhole_dns_infrastructure::dns::DnsServerHandler;
use tracing::info;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "sinkhole-dns")]
#[command(version)]
#[command(about = "Sinkhole DNS - intercepting DNS forwarder with blacklist redirection")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long, global = true)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long, global = true)]
    bind: Option<String>,

    /// Upstream resolver (ip:port)
    #[arg(short = 'u', long, global = true)]
    upstream: Option<String>,

    /// Store URL (redis://host:port/db)
    #[arg(long, global = true)]
    store_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the DNS server (default)
    Serve,
    /// Manage the domain blacklist
    Blacklist {
        #[command(subcommand)]
        action: BlacklistAction,
    },
    /// Inspect recorded client activity
    Clients {
        #[command(subcommand)]
        action: ClientsAction,
    },
}

#[derive(Subcommand)]
pub enum BlacklistAction {
    /// Add a domain to the blacklist
    Add { domain: String },
    /// Remove a domain from the blacklist
    Remove { domain: String },
    /// Print every blacklisted domain
    List,
}

#[derive(Subcommand)]
pub enum ClientsAction {
    /// Print every client that has sent an A query
    List,
    /// Print one client's lookup history
    History { ip: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        upstream_dns: cli.upstream.clone(),
        store_url: cli.store_url.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Blacklist { action } => commands::blacklist(&config, action).await,
        Command::Clients { action } => commands::clients(&config, action).await,
    }
}

async fn serve(config: sinkhole_dns_domain::Config) -> anyhow::Result<()> {
    info!("Starting Sinkhole DNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config).await?;
    let handler = DnsServerHandler::new(dns_services.handler_use_case);

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::start_dns_server(dns_addr, handler).await?;

    info!("Server shutdown complete");
    Ok(())
}
