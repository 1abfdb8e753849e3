//! Descriptor fixtures shared by unit tests

#![allow(clippy::unwrap_used)]

use crate::descriptor::ParamDescriptor;

pub fn request() -> ParamDescriptor {
    ParamDescriptor::plain("request", "Request", "Request class").unwrap()
}

pub fn params() -> ParamDescriptor {
    ParamDescriptor::decoded(
        "params",
        "T",
        "struct/class created from request query parameters",
        ["Decodable"],
        "try ResponseManager.convertParameters(request: request)",
    )
    .unwrap()
}

pub fn session() -> ParamDescriptor {
    ParamDescriptor::built(
        "session",
        "Session",
        "Session class",
        "try request.session()",
    )
    .unwrap()
}

pub fn custom_builder() -> ParamDescriptor {
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

/// `{request, params, session}`
pub fn example_params() -> Vec<ParamDescriptor> {
    vec![request(), params(), session()]
}

/// A plain descriptor with a one-letter name, for shape-only tests
pub fn letter(name: &str) -> ParamDescriptor {
    ParamDescriptor::plain(name, "Value", name).unwrap()
}
