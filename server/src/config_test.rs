use super::*;

#[test]
fn parse_port_defaults_when_absent_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("  ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_number() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
}

#[test]
fn parse_port_rejects_out_of_range() {
    let err = parse_port(Some("70000")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "70000"));
}

#[test]
fn from_env_reads_port() {
    unsafe { std::env::set_var("PORT", "4100") };
    assert_eq!(ServerConfig::from_env().unwrap(), ServerConfig { port: 4100 });
    unsafe { std::env::remove_var("PORT") };
}
