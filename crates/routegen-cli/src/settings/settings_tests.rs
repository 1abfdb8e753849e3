#![allow(non_snake_case)]

use super::*;
use std::fs;

#[test]
fn locate___explicit_path___wins_even_if_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();

    let source = locate(Some(PathBuf::from("other.toml")), dir.path());

    assert_eq!(source, ConfigSource::File(PathBuf::from("other.toml")));
}

#[test]
fn locate___config_in_dir___is_discovered() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIG_FILE_NAME), "methods = [\"get\"]\n").unwrap();

    let source = locate(None, dir.path());

    assert_eq!(source, ConfigSource::File(dir.path().join(CONFIG_FILE_NAME)));
}

#[test]
fn locate___empty_dir___falls_back_to_built_in() {
    let dir = tempfile::tempdir().unwrap();

    let source = locate(None, dir.path());

    assert_eq!(source, ConfigSource::BuiltIn);
}

#[test]
fn read___built_in___is_default_config() {
    let config = read(&ConfigSource::BuiltIn).unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn read___valid_file___parses_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "methods = [\"get\", \"head\"]\nlog_level = \"debug\"\n").unwrap();

    let config = read(&ConfigSource::File(path)).unwrap();

    assert_eq!(config.methods.len(), 2);
    assert_eq!(config.log_level, Some(LogLevel::Debug));
}

#[test]
fn read___missing_file___error_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = read(&ConfigSource::File(path.clone())).unwrap_err();

    assert!(err.to_string().contains(&path.display().to_string()));
}

#[test]
fn read___malformed_toml___errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "methods = [").unwrap();

    assert!(read(&ConfigSource::File(path)).is_err());
}

#[test]
fn ConfigSource___display___built_in_and_path() {
    assert_eq!(ConfigSource::BuiltIn.to_string(), "built-in");
    assert_eq!(
        ConfigSource::File(PathBuf::from("conf/routegen.toml")).to_string(),
        "conf/routegen.toml"
    );
}

#[test]
fn LoggingOverride___cli_level_set___ignores_config_level() {
    let logging = LoggingOverride::new(true);

    // Must not touch the global handle
    logging.apply(Some(LogLevel::Trace));
}

#[test]
fn LoggingOverride___uninitialized_handle___does_not_fail() {
    let logging = LoggingOverride::new(false);

    logging.apply(Some(LogLevel::Info));
    logging.apply(None);
}
