//! Generator configuration, loadable from `routegen.toml`

use crate::LogLevel;
use crate::descriptor::{ParamDescriptor, ParamKind};
use crate::document::HeaderConfig;
use crate::error::{GenError, GenResult};
use crate::method::HttpMethod;
use crate::model::RouteModel;
use crate::render::RenderTarget;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default name of the configuration file
pub const CONFIG_FILE_NAME: &str = "routegen.toml";

/// Flat, file-friendly description of one parameter kind.
///
/// Classified into a [`ParamKind`] when the model is built:
/// `user_builder` wins, then `constraints`/`generic_name` (generic, needs a
/// builder), then `builder` (computed concrete value), else plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,

    /// Concrete type, or the callback type for user-supplied builders
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub doc: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builder: Option<String>,

    /// Generic placeholder; defaults to `type` when constraints are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,

    #[serde(default, skip_serializing_if = "is_false")]
    pub user_builder: bool,

    /// Handler-visible name of the value a user-supplied builder computes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bound_name: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ParamSpec {
    /// Validate and convert into an immutable descriptor
    pub fn to_descriptor(&self) -> GenResult<ParamDescriptor> {
        if self.bound_name.is_some() && !self.user_builder {
            return Err(GenError::invalid_descriptor(
                &self.name,
                "bound_name only applies to user-supplied builders",
            ));
        }

        let kind = if self.user_builder {
            if !self.constraints.is_empty() {
                return Err(GenError::invalid_descriptor(
                    &self.name,
                    "user-supplied builders cannot declare constraints",
                ));
            }
            ParamKind::UserBuilder {
                generic_name: self.require_generic_name()?,
                callback_type: self.type_name.clone(),
                builder: self.require_builder("user-supplied builder")?,
                bound_name: self.bound_name.clone().unwrap_or_default(),
            }
        } else if !self.constraints.is_empty() || self.generic_name.is_some() {
            ParamKind::Decoded {
                generic_name: self
                    .generic_name
                    .clone()
                    .unwrap_or_else(|| self.type_name.clone()),
                constraints: self.constraints.clone(),
                builder: self.require_builder("generic parameter")?,
            }
        } else if let Some(builder) = &self.builder {
            ParamKind::Built {
                type_name: self.type_name.clone(),
                builder: builder.clone(),
            }
        } else {
            ParamKind::Plain {
                type_name: self.type_name.clone(),
            }
        };

        ParamDescriptor::new(self.name.clone(), self.doc.clone(), kind)
    }

    fn require_builder(&self, what: &str) -> GenResult<String> {
        self.builder.clone().ok_or_else(|| {
            GenError::invalid_descriptor(&self.name, format!("{what} requires a builder expression"))
        })
    }

    fn require_generic_name(&self) -> GenResult<String> {
        self.generic_name.clone().ok_or_else(|| {
            GenError::invalid_descriptor(
                &self.name,
                "user-supplied builder requires a generic_name",
            )
        })
    }
}

/// Complete generator configuration.
///
/// Every field has a default, and the defaults reproduce the Squirrel
/// router overloads, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// HTTP methods, in generation order
    pub methods: Vec<HttpMethod>,

    /// Destination of the generated file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Treat any dropped duplicate signature as an error
    pub fail_on_collision: bool,

    /// Log level applied once the configuration is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    /// Parameter kinds, in canonical order
    pub params: Vec<ParamSpec>,

    pub target: RenderTarget,

    pub header: HeaderConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            methods: HttpMethod::DEFAULTS.to_vec(),
            output: None,
            fail_on_collision: false,
            log_level: None,
            params: default_params(),
            target: RenderTarget::default(),
            header: HeaderConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> GenResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> GenResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> GenResult<String> {
        toml::to_string_pretty(self).map_err(|e| GenError::Config(e.to_string()))
    }

    /// Convert parameter specs into descriptors and validate the whole model
    pub fn build_model(&self) -> GenResult<RouteModel> {
        let params = self
            .params
            .iter()
            .map(ParamSpec::to_descriptor)
            .collect::<GenResult<Vec<_>>>()?;

        RouteModel::new(self.methods.clone(), params)
    }
}

/// The parameter kinds a Squirrel route handler can ask for
pub fn default_params() -> Vec<ParamSpec> {
    vec![
        ParamSpec {
            name: "request".to_string(),
            type_name: "Request".to_string(),
            doc: "Request class".to_string(),
            constraints: vec![],
            builder: None,
            generic_name: None,
            user_builder: false,
            bound_name: None,
        },
        ParamSpec {
            name: "params".to_string(),
            type_name: "T".to_string(),
            doc: "struct/class created from request query parameters".to_string(),
            constraints: vec!["Decodable".to_string()],
            builder: Some("try ResponseManager.convertParameters(request: request)".to_string()),
            generic_name: None,
            user_builder: false,
            bound_name: None,
        },
        ParamSpec {
            name: "bodyParams".to_string(),
            type_name: "B".to_string(),
            doc: "struct/class created from request body".to_string(),
            constraints: vec!["BodyDecodable".to_string()],
            builder: Some(
                "try ResponseManager.convertBodyParameters(request: request)".to_string(),
            ),
            generic_name: None,
            user_builder: false,
            bound_name: None,
        },
        ParamSpec {
            name: "session".to_string(),
            type_name: "Session".to_string(),
            doc: "Session class".to_string(),
            constraints: vec![],
            builder: Some("try request.session()".to_string()),
            generic_name: None,
            user_builder: false,
            bound_name: None,
        },
        ParamSpec {
            name: "sessionParams".to_string(),
            type_name: "S".to_string(),
            doc: "struct/class created from session".to_string(),
            constraints: vec!["SessionDecodable".to_string()],
            builder: Some(
                "try ResponseManager.convertSessionParameters(request: request)".to_string(),
            ),
            generic_name: None,
            user_builder: false,
            bound_name: None,
        },
        ParamSpec {
            name: "builder".to_string(),
            type_name: "@escaping (_ request: Request) throws -> C".to_string(),
            doc: "builder for custom struct/class created from request".to_string(),
            constraints: vec![],
            builder: Some("try builder(request)".to_string()),
            generic_name: Some("C".to_string()),
            user_builder: true,
            bound_name: Some("customParam".to_string()),
        },
    ]
}
