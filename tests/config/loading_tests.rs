// Configuration loading from disk and environment

use krishi_core::config::{ConfigError, GatewayConfig};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::time::Duration;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
#[serial]
fn custom_key_variables_are_honoured() {
    unsafe {
        env::remove_var("PORT");
        env::set_var("KRISHI_IT_GEMINI", "it-gemini-key");
        env::remove_var("KRISHI_IT_WEATHER");
    }
    let file = write_config(
        r#"
[gemini]
api_key_env = "KRISHI_IT_GEMINI"

[weather]
api_key_env = "KRISHI_IT_WEATHER"
forecast_days = 3
"#,
    );

    let config = GatewayConfig::load(Some(file.path())).expect("load");
    assert_eq!(config.gemini.api_key.as_deref(), Some("it-gemini-key"));
    assert!(!config.has_weather_key());
    assert_eq!(config.weather.api_key_env, "KRISHI_IT_WEATHER");
    assert_eq!(config.weather.forecast_days, 3);

    unsafe {
        env::remove_var("KRISHI_IT_GEMINI");
    }
}

#[test]
#[serial]
fn timeouts_and_server_section_load() {
    unsafe {
        env::remove_var("PORT");
    }
    let file = write_config(
        r#"
[timeouts]
grounded_secs = 45
probe_secs = 3

[server]
bind = "127.0.0.1:9100"
cors_origins = ["https://krishi.example"]
"#,
    );

    let config = GatewayConfig::load(Some(file.path())).expect("load");
    assert_eq!(config.timeouts.grounded, Duration::from_secs(45));
    assert_eq!(config.timeouts.probe, Duration::from_secs(3));
    assert_eq!(config.timeouts.completion, Duration::from_secs(90));
    assert_eq!(config.server.bind.to_string(), "127.0.0.1:9100");
    assert_eq!(config.server.cors_origins, vec!["https://krishi.example"]);
}

#[test]
#[serial]
fn invalid_bind_address_is_reported() {
    unsafe {
        env::remove_var("PORT");
    }
    let file = write_config("[server]\nbind = \"localhost\"\n");
    let err = GatewayConfig::load(Some(file.path())).expect_err("invalid bind");
    assert!(matches!(err, ConfigError::InvalidBind { ref value, .. } if value == "localhost"));
}

#[test]
#[serial]
fn unknown_types_fail_to_parse() {
    let file = write_config("[weather]\nforecast_days = \"five\"\n");
    let err = GatewayConfig::load(Some(file.path())).expect_err("type error");
    assert!(matches!(err, ConfigError::Parse { .. }));
}
