use sinkhole_dns_domain::config::{Config, ConfigError, ResolutionMode, StoreBackend};
use sinkhole_dns_domain::{CliOverrides, RedirectTarget};
use std::io::Write;
use std::net::Ipv4Addr;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.mode, ResolutionMode::Filter);
    assert_eq!(config.dns.upstream_dns, "8.8.8.8:53");
    assert_eq!(config.dns.query_timeout, 2);
    assert!(!config.blocking.wildcard_subdomain);
    assert!(!config.redirect.use_redirect);
    assert!(config.redirect.redirect_site.is_empty());
    assert_eq!(config.store.backend, StoreBackend::Redis);
    assert_eq!(config.store.url, "redis://127.0.0.1:6379");
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_toml_full() {
    let toml_str = r#"
        [server]
        dns_port = 5353
        bind_address = "127.0.0.1"
        mode = "passthrough"

        [dns]
        upstream_dns = "1.1.1.1:53"
        query_timeout = 5

        [blocking]
        wildcard_subdomain = true

        [redirect]
        use_redirect = true
        redirect_site = "10.0.0.5"

        [store]
        backend = "memory"

        [logging]
        level = "debug"
        json = true
    "#;

    let config = Config::from_toml(toml_str).unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.mode, ResolutionMode::Passthrough);
    assert_eq!(config.dns.upstream_host_port(), Some(("1.1.1.1", 53)));
    assert_eq!(config.dns.timeout().as_secs(), 5);
    assert!(config.blocking.wildcard_subdomain);
    assert_eq!(config.store.backend, StoreBackend::Memory);
    assert!(config.logging.json);
    assert_eq!(
        config.redirect_target().unwrap(),
        RedirectTarget::Explicit(Ipv4Addr::new(10, 0, 0, 5))
    );
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml("[blocking]\nwildcard_subdomain = true\n").unwrap();

    assert!(config.blocking.wildcard_subdomain);
    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.dns.upstream_dns, "8.8.8.8:53");
}

#[test]
fn test_config_rejects_unknown_mode() {
    let result = Config::from_toml("[server]\nmode = \"recursive\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_upstream_without_port() {
    let mut config = Config::default();
    config.dns.upstream_dns = "8.8.8.8".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_ipv6_redirect_site() {
    let mut config = Config::default();
    config.redirect.use_redirect = true;
    config.redirect.redirect_site = "::1".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_load_from_file_applies_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[dns]\nupstream_dns = \"9.9.9.9:53\"\n[logging]\nlevel = \"warn\"").unwrap();

    let overrides = CliOverrides {
        dns_port: Some(1053),
        log_level: Some("trace".to_string()),
        ..Default::default()
    };
    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.dns.upstream_dns, "9.9.9.9:53");
    assert_eq!(config.server.dns_port, 1053);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_load_missing_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/sinkhole.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_validate_rejects_zero_query_timeout() {
    let config = Config::from_toml("[dns]\nquery_timeout = 0\n").unwrap();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_accepts_upstream_host_name() {
    let mut config = Config::default();
    config.dns.upstream_dns = "localhost:53".to_string();

    assert!(config.validate().is_ok());
    assert_eq!(config.dns.upstream_host_port(), Some(("localhost", 53)));
}

#[test]
fn test_upstream_host_port_handles_ipv6() {
    let mut config = Config::default();

    config.dns.upstream_dns = "[2001:db8::1]:53".to_string();
    assert_eq!(config.dns.upstream_host_port(), Some(("2001:db8::1", 53)));

    config.dns.upstream_dns = "2001:db8::1".to_string();
    assert_eq!(config.dns.upstream_host_port(), None);
}

#[test]
fn test_validate_rejects_bad_upstream_port() {
    let mut config = Config::default();

    config.dns.upstream_dns = "dns.example.net:domain".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    config.dns.upstream_dns = "dns.example.net:0".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_memory_store_when_filtering() {
    let config = Config::from_toml("[store]\nbackend = \"memory\"\n").unwrap();
    assert_eq!(config.server.mode, ResolutionMode::Filter);
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let passthrough =
        Config::from_toml("[server]\nmode = \"passthrough\"\n[store]\nbackend = \"memory\"\n")
            .unwrap();
    assert!(passthrough.validate().is_ok());
}
