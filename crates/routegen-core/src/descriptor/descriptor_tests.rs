#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

fn request() -> ParamDescriptor {
    ParamDescriptor::plain("request", "Request", "Request class").unwrap()
}

fn params() -> ParamDescriptor {
    ParamDescriptor::decoded(
        "params",
        "T",
        "struct/class created from request query parameters",
        ["Decodable"],
        "try ResponseManager.convertParameters(request: request)",
    )
    .unwrap()
}

fn session() -> ParamDescriptor {
    ParamDescriptor::built(
        "session",
        "Session",
        "Session class",
        "try request.session()",
    )
    .unwrap()
}

fn custom_builder() -> ParamDescriptor {
    ParamDescriptor::user_builder(
        "builder",
        "@escaping (_ request: Request) throws -> C",
        "builder for custom struct/class created from request",
        "C",
        "try builder(request)",
        "customParam",
    )
    .unwrap()
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn ParamDescriptor___plain___is_concrete_and_not_buildable() {
    let desc = request();

    assert!(!desc.is_generic());
    assert!(!desc.is_buildable());
    assert!(!desc.is_user_builder());
    assert_eq!(desc.builder(), None);
}

#[test]
fn ParamDescriptor___built___is_concrete_and_buildable() {
    let desc = session();

    assert!(!desc.is_generic());
    assert!(desc.is_buildable());
    assert_eq!(desc.builder(), Some("try request.session()"));
}

#[test]
fn ParamDescriptor___decoded___is_generic_and_buildable() {
    let desc = params();

    assert!(desc.is_generic());
    assert!(desc.is_buildable());
    assert!(!desc.is_user_builder());
    assert_eq!(desc.generic_name(), Some("T"));
    assert_eq!(desc.constraints(), ["Decodable".to_string()]);
}

#[test]
fn ParamDescriptor___user_builder___is_generic_buildable_user_builder() {
    let desc = custom_builder();

    assert!(desc.is_generic());
    assert!(desc.is_buildable());
    assert!(desc.is_user_builder());
    assert!(desc.constraints().is_empty());
}

// ============================================================================
// Names and types
// ============================================================================

#[test]
fn ParamDescriptor___var_name___equals_name_for_ordinary_kinds() {
    assert_eq!(request().var_name(), "request");
    assert_eq!(params().var_name(), "params");
    assert_eq!(session().var_name(), "session");
}

#[test]
fn ParamDescriptor___var_name___is_prefixed_for_user_builder() {
    let desc = custom_builder();

    assert_eq!(desc.var_name(), "_builder");
    assert_eq!(desc.handler_label(), "customParam");
    assert_ne!(desc.var_name(), desc.name());
}

#[test]
fn ParamDescriptor___var_type___uses_generic_name_when_generic() {
    assert_eq!(request().var_type(), "Request");
    assert_eq!(params().var_type(), "T");
    assert_eq!(custom_builder().var_type(), "C");
}

#[test]
fn ParamDescriptor___declared_type___is_callback_type_for_user_builder() {
    assert_eq!(
        custom_builder().declared_type(),
        "@escaping (_ request: Request) throws -> C"
    );
    assert_eq!(session().declared_type(), "Session");
}

// ============================================================================
// Fragments
// ============================================================================

#[test]
fn ParamDescriptor___signature_fragment___uses_name_when_concrete() {
    assert_eq!(request().signature_fragment(), "<request>");
    assert_eq!(session().signature_fragment(), "<session>");
}

#[test]
fn ParamDescriptor___signature_fragment___uses_constraints_when_generic() {
    assert_eq!(params().signature_fragment(), "<Decodable>");
    assert_eq!(custom_builder().signature_fragment(), "<>");
}

#[test]
fn ParamDescriptor___signature_fragment___ignores_generic_name() {
    let t = ParamDescriptor::decoded("a", "T", "", ["Decodable"], "decode()").unwrap();
    let u = ParamDescriptor::decoded("b", "U", "", ["Decodable"], "decode()").unwrap();

    assert_eq!(t.signature_fragment(), u.signature_fragment());
}

#[test]
fn ParamDescriptor___generic_clause_fragment___joins_constraints() {
    let desc =
        ParamDescriptor::decoded("body", "B", "", ["Decodable", "Sendable"], "decode()").unwrap();

    assert_eq!(
        desc.generic_clause_fragment().as_deref(),
        Some("B: Decodable, Sendable")
    );
}

#[test]
fn ParamDescriptor___generic_clause_fragment___is_bare_name_without_constraints() {
    assert_eq!(custom_builder().generic_clause_fragment().as_deref(), Some("C"));
}

#[test]
fn ParamDescriptor___generic_clause_fragment___is_none_when_concrete() {
    assert_eq!(request().generic_clause_fragment(), None);
    assert_eq!(session().generic_clause_fragment(), None);
}

#[test]
fn ParamDescriptor___display___describes_concrete_and_generic() {
    assert_eq!(request().to_string(), "request: Request");
    assert_eq!(params().to_string(), "<T - params: Decodable>");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn ParamDescriptor___user_builder_without_bound_name___fails() {
    let result = ParamDescriptor::user_builder(
        "builder",
        "@escaping (Request) throws -> C",
        "",
        "C",
        "try builder(request)",
        "",
    );

    let err = result.unwrap_err();
    assert!(matches!(err, GenError::InvalidDescriptor { .. }));
    assert!(err.to_string().contains("bound variable name"));
}

#[test]
fn ParamDescriptor___user_builder_bound_name_equal_to_name___fails() {
    let result = ParamDescriptor::user_builder(
        "builder",
        "@escaping (Request) throws -> C",
        "",
        "C",
        "try builder(request)",
        "builder",
    );

    assert!(result.is_err());
}

#[test]
fn ParamDescriptor___built_without_builder_expression___fails() {
    let result = ParamDescriptor::built("session", "Session", "", "   ");

    assert!(matches!(result, Err(GenError::InvalidDescriptor { .. })));
}

#[test]
fn ParamDescriptor___decoded_with_empty_constraint___fails() {
    let result = ParamDescriptor::decoded("params", "T", "", [""], "decode()");

    assert!(result.is_err());
}

#[test_case("")]
#[test_case("1param")]
#[test_case("my-param")]
#[test_case("two words")]
fn ParamDescriptor___invalid_name___fails(name: &str) {
    let result = ParamDescriptor::plain(name, "Request", "");

    assert!(matches!(result, Err(GenError::InvalidDescriptor { .. })));
}

#[test_case("request")]
#[test_case("_private")]
#[test_case("bodyParams")]
#[test_case("p2")]
fn ParamDescriptor___valid_name___succeeds(name: &str) {
    assert!(ParamDescriptor::plain(name, "Request", "").is_ok());
}

#[test]
fn ParamDescriptor___plain_with_empty_type___fails() {
    assert!(ParamDescriptor::plain("request", "", "").is_err());
}
