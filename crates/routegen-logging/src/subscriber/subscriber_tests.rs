#![allow(non_snake_case)]

use super::*;

#[test]
fn initial_filter___explicit_level___wins() {
    let filter = initial_filter(Some(LogLevel::Debug));

    assert_eq!(filter.to_string(), "debug");
}

#[test]
fn init_logging___second_call___returns_false_and_keeps_handle() {
    // Both outcomes of the first call are acceptable: another test binary
    // thread may already have installed the global default.
    let _ = init_logging(Some(LogLevel::Warn));

    let second = init_logging(Some(LogLevel::Info));

    assert!(!second);
}

#[test]
fn init_logging___installed_subscriber___is_reloadable() {
    let installed = init_logging(None);

    if installed || ReloadHandle::global().is_initialized() {
        assert!(ReloadHandle::global().reload_level(LogLevel::Error).is_ok());
    }
}
