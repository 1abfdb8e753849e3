//! Parameter descriptors: the kinds of value a generated handler may receive

use crate::error::{GenError, GenResult};

/// How a handler argument is typed and obtained.
///
/// Each case carries exactly the fields it needs, so "generic but not
/// buildable" cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamKind {
    /// Concrete value passed straight through (e.g. `request: Request`)
    Plain { type_name: String },

    /// Concrete value computed from a library call (e.g. `try request.session()`)
    Built { type_name: String, builder: String },

    /// Generic value decoded at request time (e.g. `T: Decodable`)
    Decoded {
        generic_name: String,
        constraints: Vec<String>,
        builder: String,
    },

    /// Generic value computed by a callback the caller passes in.
    ///
    /// `callback_type` is the type of that extra formal parameter and
    /// `bound_name` is the label the handler sees for the computed value.
    UserBuilder {
        generic_name: String,
        callback_type: String,
        builder: String,
        bound_name: String,
    },
}

/// Immutable description of one kind of handler argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    name: String,
    doc: String,
    kind: ParamKind,
    var_name: String,
}

impl ParamDescriptor {
    /// A concrete argument taken directly from the request pipeline.
    pub fn plain(
        name: impl Into<String>,
        type_name: impl Into<String>,
        doc: impl Into<String>,
    ) -> GenResult<Self> {
        Self::new(
            name.into(),
            doc.into(),
            ParamKind::Plain {
                type_name: type_name.into(),
            },
        )
    }

    /// A concrete argument computed by `builder` before the handler runs.
    pub fn built(
        name: impl Into<String>,
        type_name: impl Into<String>,
        doc: impl Into<String>,
        builder: impl Into<String>,
    ) -> GenResult<Self> {
        Self::new(
            name.into(),
            doc.into(),
            ParamKind::Built {
                type_name: type_name.into(),
                builder: builder.into(),
            },
        )
    }

    /// A generic argument decoded by `builder`, bounded by `constraints`.
    pub fn decoded<I, S>(
        name: impl Into<String>,
        generic_name: impl Into<String>,
        doc: impl Into<String>,
        constraints: I,
        builder: impl Into<String>,
    ) -> GenResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name.into(),
            doc.into(),
            ParamKind::Decoded {
                generic_name: generic_name.into(),
                constraints: constraints.into_iter().map(Into::into).collect(),
                builder: builder.into(),
            },
        )
    }

    /// A generic argument computed by a caller-supplied callback named `name`.
    pub fn user_builder(
        name: impl Into<String>,
        callback_type: impl Into<String>,
        doc: impl Into<String>,
        generic_name: impl Into<String>,
        builder: impl Into<String>,
        bound_name: impl Into<String>,
    ) -> GenResult<Self> {
        Self::new(
            name.into(),
            doc.into(),
            ParamKind::UserBuilder {
                generic_name: generic_name.into(),
                callback_type: callback_type.into(),
                builder: builder.into(),
                bound_name: bound_name.into(),
            },
        )
    }

    /// Validate and build a descriptor from an already classified kind.
    pub fn new(name: String, doc: String, kind: ParamKind) -> GenResult<Self> {
        if !is_identifier(&name) {
            return Err(GenError::invalid_descriptor(
                &name,
                "name must be a valid identifier",
            ));
        }

        match &kind {
            ParamKind::Plain { type_name } => {
                require_text(&name, "type", type_name)?;
            }
            ParamKind::Built { type_name, builder } => {
                require_text(&name, "type", type_name)?;
                require_text(&name, "builder expression", builder)?;
            }
            ParamKind::Decoded {
                generic_name,
                constraints,
                builder,
            } => {
                require_identifier(&name, "generic name", generic_name)?;
                require_text(&name, "builder expression", builder)?;
                if constraints.iter().any(|c| c.trim().is_empty()) {
                    return Err(GenError::invalid_descriptor(
                        &name,
                        "constraints cannot contain empty entries",
                    ));
                }
            }
            ParamKind::UserBuilder {
                generic_name,
                callback_type,
                builder,
                bound_name,
            } => {
                require_identifier(&name, "generic name", generic_name)?;
                require_text(&name, "callback type", callback_type)?;
                require_text(&name, "builder expression", builder)?;
                if bound_name.is_empty() {
                    return Err(GenError::invalid_descriptor(
                        &name,
                        "user-supplied builder requires a bound variable name",
                    ));
                }
                require_identifier(&name, "bound name", bound_name)?;
                if *bound_name == name {
                    return Err(GenError::invalid_descriptor(
                        &name,
                        "bound name must differ from the builder parameter name",
                    ));
                }
            }
        }

        let var_name = match &kind {
            ParamKind::UserBuilder { .. } => format!("_{name}"),
            _ => name.clone(),
        };

        Ok(Self {
            name,
            doc,
            kind,
            var_name,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn kind(&self) -> &ParamKind {
        &self.kind
    }

    /// Internal binding used in generated statements.
    ///
    /// Equal to [`name`](Self::name) except for user-supplied builders, whose
    /// name is already taken by the callback parameter.
    pub fn var_name(&self) -> &str {
        &self.var_name
    }

    pub fn is_generic(&self) -> bool {
        matches!(
            self.kind,
            ParamKind::Decoded { .. } | ParamKind::UserBuilder { .. }
        )
    }

    pub fn is_buildable(&self) -> bool {
        self.builder().is_some()
    }

    pub fn is_user_builder(&self) -> bool {
        matches!(self.kind, ParamKind::UserBuilder { .. })
    }

    /// Type expression as declared: the concrete type, the generic
    /// placeholder, or the callback type of a user-supplied builder.
    pub fn declared_type(&self) -> &str {
        match &self.kind {
            ParamKind::Plain { type_name } | ParamKind::Built { type_name, .. } => type_name,
            ParamKind::Decoded { generic_name, .. } => generic_name,
            ParamKind::UserBuilder { callback_type, .. } => callback_type,
        }
    }

    /// Type of the value as the handler receives it.
    pub fn var_type(&self) -> &str {
        match &self.kind {
            ParamKind::Plain { type_name } | ParamKind::Built { type_name, .. } => type_name,
            ParamKind::Decoded { generic_name, .. }
            | ParamKind::UserBuilder { generic_name, .. } => generic_name,
        }
    }

    /// Label of the value in the handler's parameter list.
    pub fn handler_label(&self) -> &str {
        match &self.kind {
            ParamKind::UserBuilder { bound_name, .. } => bound_name,
            _ => &self.name,
        }
    }

    pub fn builder(&self) -> Option<&str> {
        match &self.kind {
            ParamKind::Plain { .. } => None,
            ParamKind::Built { builder, .. }
            | ParamKind::Decoded { builder, .. }
            | ParamKind::UserBuilder { builder, .. } => Some(builder),
        }
    }

    pub fn generic_name(&self) -> Option<&str> {
        match &self.kind {
            ParamKind::Decoded { generic_name, .. }
            | ParamKind::UserBuilder { generic_name, .. } => Some(generic_name),
            _ => None,
        }
    }

    pub fn constraints(&self) -> &[String] {
        match &self.kind {
            ParamKind::Decoded { constraints, .. } => constraints,
            _ => &[],
        }
    }

    /// Fragment of the external call shape this descriptor contributes.
    ///
    /// Generic descriptors are identified only by their constraints, so two
    /// generic descriptors with the same bounds produce the same fragment.
    pub fn signature_fragment(&self) -> String {
        if self.is_generic() {
            format!("<{}>", self.constraints().join(", "))
        } else {
            format!("<{}>", self.name)
        }
    }

    /// Entry in the function's generic clause, `None` for concrete kinds.
    pub fn generic_clause_fragment(&self) -> Option<String> {
        let generic_name = self.generic_name()?;
        let constraints = self.constraints();
        if constraints.is_empty() {
            Some(generic_name.to_string())
        } else {
            Some(format!("{generic_name}: {}", constraints.join(", ")))
        }
    }
}

impl std::fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.generic_name() {
            Some(generic_name) => write!(
                f,
                "<{} - {}: {}>",
                generic_name,
                self.name,
                self.constraints().join(", ")
            ),
            None => write!(f, "{}: {}", self.name, self.declared_type()),
        }
    }
}

fn require_text(name: &str, what: &str, value: &str) -> GenResult<()> {
    if value.trim().is_empty() {
        return Err(GenError::invalid_descriptor(
            name,
            format!("{what} cannot be empty"),
        ));
    }
    Ok(())
}

fn require_identifier(name: &str, what: &str, value: &str) -> GenResult<()> {
    if !is_identifier(value) {
        return Err(GenError::invalid_descriptor(
            name,
            format!("{what} '{value}' is not a valid identifier"),
        ));
    }
    Ok(())
}

/// ASCII identifier: a letter or underscore followed by letters, digits or underscores.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
#[path = "descriptor/descriptor_tests.rs"]
mod descriptor_tests;
