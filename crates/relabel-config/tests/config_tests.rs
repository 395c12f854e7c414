//! Configuration loading tests

use figment::Jail;
use pretty_assertions::assert_eq;
use relabel_config::{logging, AppConfig, LogFormat, DEFAULT_RENAME_COMMAND};
use relabel_foundation::protocol::MatchStrategy;

#[test]
fn test_load_without_files_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = AppConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_load_reads_toml_and_env_overrides() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "relabel.toml",
            r#"
            [logging]
            level = "debug"
            format = "json"

            [rename]
            command_id = "java.rename"
            default_match_strategy = "EMBEDDED"
            "#,
        )?;
        jail.set_env("RELABEL__LOGGING__LEVEL", "warn");

        let config = AppConfig::load().map_err(|e| e.to_string())?;

        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.rename.command_id, "java.rename");
        assert_eq!(
            config.rename.default_match_strategy,
            MatchStrategy::Embedded
        );
        Ok(())
    });
}

#[test]
fn test_load_reads_nested_config_path() {
    Jail::expect_with(|jail| {
        std::fs::create_dir(".relabel").map_err(|e| e.to_string())?;
        jail.create_file(
            ".relabel/config.toml",
            r#"
            [rename]
            default_match_strategy = "SUFFIX"
            "#,
        )?;

        let config = AppConfig::load().map_err(|e| e.to_string())?;

        assert_eq!(config.rename.command_id, DEFAULT_RENAME_COMMAND);
        assert_eq!(config.rename.default_match_strategy, MatchStrategy::Suffix);
        Ok(())
    });
}

#[test]
fn test_load_rejects_invalid_level() {
    Jail::expect_with(|jail| {
        jail.set_env("RELABEL__LOGGING__LEVEL", "loud");

        let err = AppConfig::load().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
        Ok(())
    });
}

#[test]
fn test_load_from_explicit_file() {
    Jail::expect_with(|jail| {
        let path = jail.directory().join("custom.toml");
        jail.create_file("custom.toml", "[rename]\ncommand_id = \"che.rename\"")?;

        let config = AppConfig::load_from(&path).map_err(|e| e.to_string())?;

        assert_eq!(config.rename.command_id, "che.rename");
        assert_eq!(config.logging.level, "info");
        Ok(())
    });
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();

    assert_eq!(err.code(), "E1009");
}

#[test]
fn test_logging_initializes_once() {
    let config = AppConfig::default();

    // Only one global subscriber can exist per process
    let _ = logging::initialize(&config);
    assert!(logging::initialize(&config).is_err());
}
