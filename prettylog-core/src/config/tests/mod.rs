use crate::access_log::SinkKind;
use crate::config::{ConfigError, PrettylogConfig};
use crate::logging::{LogLevel, LogMode};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn empty_config_uses_defaults() {
    let cfg = PrettylogConfig::parse("").unwrap();

    assert_eq!(cfg.logger.mode, None);
    assert_eq!(cfg.logger.sink, SinkKind::Stdout);
    assert_eq!(cfg.logger.level, LogLevel::Info);
}

#[test]
fn logger_table_is_parsed() {
    let cfg = PrettylogConfig::parse(
        r#"
        [logger]
        mode = "structured"
        sink = "tracing"
        level = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(cfg.logger.mode, Some(LogMode::Structured));
    assert_eq!(cfg.logger.sink, SinkKind::Tracing);
    assert_eq!(cfg.logger.level, LogLevel::Debug);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = PrettylogConfig::parse(
        r#"
        [logger]
        colour = true
        "#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("colour"));
}

#[test]
fn unknown_mode_is_rejected() {
    assert!(PrettylogConfig::parse("[logger]\nmode = \"fancy\"\n").is_err());
}

#[test]
fn from_file_reads_toml() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logger]\nmode = \"off\"\nsink = \"stderr\"").unwrap();

    let cfg = PrettylogConfig::from_file(file.path()).unwrap();

    assert_eq!(cfg.logger.mode, Some(LogMode::Off));
    assert_eq!(cfg.logger.sink, SinkKind::Stderr);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PrettylogConfig::from_file(dir.path().join("nope.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logger").unwrap();

    let err = PrettylogConfig::from_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}
