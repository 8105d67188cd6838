use std::io::Write;

use tempfile::NamedTempFile;
use water::config::{Config, ConfigError, GatewayKind};
use water::geo::Region;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();
    assert_eq!(config.gateway.kind, GatewayKind::Memory);
    assert!(config.gateway.seed);
    assert!(config.gateway.path.is_none());
    assert_eq!(config.initial_region(), Region::WILMINGTON);
}

#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("water/config.toml"));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_file_gateway_and_map() {
    let file = write_config(
        r#"
[gateway]
kind = "file"
path = "/tmp/water.json"

[map]
latitude = 35.0
longitude = -80.5
latitude_delta = 2.0
"#,
    );
    let config = Config::load_from(file.path()).unwrap();

    assert_eq!(config.gateway.kind, GatewayKind::File);
    assert_eq!(config.gateway.path.as_deref(), Some(std::path::Path::new("/tmp/water.json")));
    assert!(config.gateway.seed);
    let region = config.initial_region();
    assert_eq!(region.location.longitude, -80.5);
    assert_eq!(region.span.latitude_delta, 2.0);
    assert_eq!(region.span.longitude_delta, Region::WILMINGTON.span.longitude_delta);
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
}

#[test]
fn test_unknown_gateway_kind_is_parse_error() {
    let file = write_config("[gateway]\nkind = \"cloud\"\n");
    let err = Config::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_out_of_range_latitude_fails_validation() {
    let file = write_config("[map]\nlatitude = 91.0\n");
    let err = Config::load_from(file.path()).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("latitude")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_zero_span_fails_validation() {
    let mut config = Config::default();
    config.map.longitude_delta = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validate_reports_longitude_and_nan_span() {
    let mut config = Config::default();
    config.map.longitude = -180.5;
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("longitude")),
        other => panic!("expected validation error, got {other:?}"),
    }

    let mut config = Config::default();
    config.map.latitude_delta = f64::NAN;
    assert!(config.validate().is_err());
}
