#![allow(non_snake_case)]

use super::*;

#[test]
fn GenError___invalid_descriptor___displays_name_and_reason() {
    let err = GenError::invalid_descriptor("builder", "missing bound name");

    let display = err.to_string();

    assert_eq!(display, "invalid descriptor 'builder': missing bound name");
}

#[test]
fn GenError___signature_collision___displays_method_and_signature() {
    let err = GenError::SignatureCollision {
        method: "get".into(),
        signature: "get<Decodable>".into(),
    };

    let display = err.to_string();

    assert!(display.contains("get"));
    assert!(display.contains("<Decodable>"));
}

#[test]
fn GenError___invalid_model___displays_message() {
    let err = GenError::InvalidModel("method list is empty".into());

    assert_eq!(err.to_string(), "invalid model: method list is empty");
}

#[test]
fn GenError___from_io_error___converts() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");

    let err: GenError = io_err.into();

    assert!(matches!(err, GenError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn GenError___from_toml_error___converts() {
    let toml_err = toml::from_str::<toml::Value>("methods = [").unwrap_err();

    let err: GenError = toml_err.into();

    assert!(matches!(err, GenError::Toml(_)));
}
