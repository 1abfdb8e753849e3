//! Validated generation model: methods and parameter descriptors

use crate::descriptor::ParamDescriptor;
use crate::error::{GenError, GenResult};
use crate::method::HttpMethod;
use std::collections::HashSet;

/// Upper bound on descriptors; enumeration is exponential in their number.
pub const MAX_PARAMS: usize = 16;

/// Methods and descriptors a generation run works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteModel {
    methods: Vec<HttpMethod>,
    params: Vec<ParamDescriptor>,
}

impl RouteModel {
    pub fn new(methods: Vec<HttpMethod>, params: Vec<ParamDescriptor>) -> GenResult<Self> {
        if methods.is_empty() {
            return Err(GenError::InvalidModel("method list is empty".to_string()));
        }

        let mut seen_methods = HashSet::new();
        for method in &methods {
            if !seen_methods.insert(*method) {
                return Err(GenError::InvalidModel(format!(
                    "method '{method}' is listed more than once"
                )));
            }
        }

        if params.len() > MAX_PARAMS {
            return Err(GenError::InvalidModel(format!(
                "{} parameters declared, at most {MAX_PARAMS} are supported",
                params.len()
            )));
        }

        // Names, internal bindings and handler labels share one namespace
        let mut seen_names = HashSet::new();
        for param in &params {
            let mut names = vec![param.name()];
            if param.is_user_builder() {
                names.push(param.var_name());
                names.push(param.handler_label());
            }
            for name in names {
                if !seen_names.insert(name) {
                    return Err(GenError::InvalidModel(format!(
                        "parameter name '{name}' is declared more than once"
                    )));
                }
            }
        }

        Ok(Self { methods, params })
    }

    pub fn methods(&self) -> &[HttpMethod] {
        &self.methods
    }

    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// Number of (method, combination) pairs before deduplication
    pub fn route_count(&self) -> usize {
        self.methods.len() << self.params.len()
    }
}
