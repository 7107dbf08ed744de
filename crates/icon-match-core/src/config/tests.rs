//! Tests for configuration defaults, parsing and validation.

use std::io::Write;

use crate::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.ranking.top_n, 5);
    assert!(config.ranking.unique);
    assert_eq!(config.embedding.dimension, 300);
    assert_eq!(config.logging.level, "warn");
    assert!(config.text.extra_stop_words.is_empty());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_fails_zero_top_n() {
    let mut config = Config::default();
    config.ranking.top_n = 0;

    let err_msg = config.validate().unwrap_err().to_string();
    assert!(err_msg.contains("ranking.top_n"), "got: {}", err_msg);
}

#[test]
fn test_validation_fails_zero_dimension() {
    let mut config = Config::default();
    config.embedding.dimension = 0;

    let err_msg = config.validate().unwrap_err().to_string();
    assert!(err_msg.contains("embedding.dimension"), "got: {}", err_msg);
}

#[test]
fn test_validation_fails_unknown_log_level() {
    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.logging.level = "DEBUG".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_fails_blank_stop_word() {
    let mut config = Config::default();
    config.text.extra_stop_words = vec!["business".to_string(), "  ".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_from_file_partial_tables_use_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[ranking]
top_n = 3

[text]
extra_stop_words = ["business"]
"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.ranking.top_n, 3);
    assert!(config.ranking.unique);
    assert_eq!(config.text.extra_stop_words, vec!["business".to_string()]);
    assert_eq!(config.embedding.dimension, 300);
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[ranking]\ntop_n = 0").unwrap();
    assert!(Config::from_file(file.path()).is_err());
}

#[test]
fn test_from_file_missing() {
    let err = Config::from_file(std::path::Path::new("/nonexistent/icon-match.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_toml_round_trip() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
