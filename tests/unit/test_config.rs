use moex_gateway::constants::{
    DEFAULT_HISTORY_DAYS, DEFAULT_ISS_BASE_URL, DEFAULT_ISS_TIMEOUT, DEFAULT_TICKERS,
};
use moex_gateway::prelude::*;
use moex_gateway::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn test_config_defaults_without_environment() {
    let config = Config::new();

    assert_eq!(config.iss.base_url, DEFAULT_ISS_BASE_URL);
    assert_eq!(config.iss.timeout, DEFAULT_ISS_TIMEOUT);
    assert_eq!(config.default_tickers, DEFAULT_TICKERS);
    assert_eq!(config.default_history_days, DEFAULT_HISTORY_DAYS);
}

#[test]
fn test_default_ticker_set_matches_contract() {
    // the documented default set, in order
    assert_eq!(DEFAULT_TICKERS, "SBER,GAZP,LKOH,YNDX");

    let config = Config::new();
    assert_eq!(
        config.default_ticker_list(),
        vec!["SBER", "GAZP", "LKOH", "YNDX"]
    );
}

#[test]
fn test_listen_addr_joins_host_and_port() {
    let mut config = Config::new();
    config.server = ServerConfig {
        host: "0.0.0.0".to_string(),
        port: 9090,
    };
    assert_eq!(config.listen_addr(), "0.0.0.0:9090");
}

#[test]
fn test_get_env_or_default_for_unset_variable() {
    let value: u64 = get_env_or_default("MOEX_GATEWAY_TEST_UNSET_VARIABLE", 42);
    assert_eq!(value, 42);
}

#[test]
fn test_get_env_or_none_for_unset_variable() {
    let value: Option<u64> = get_env_or_none("MOEX_GATEWAY_TEST_UNSET_VARIABLE");
    assert_eq!(value, None);
}

#[test]
fn test_version_is_exposed() {
    assert_eq!(version(), VERSION);
    assert!(!VERSION.is_empty());
}
