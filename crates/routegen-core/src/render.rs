//! Swift rendering of one route-registration overload

use crate::signature::Route;
use serde::{Deserialize, Serialize};

/// Names in the consuming codebase that generated functions call into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderTarget {
    /// Type the generated functions extend
    pub container: String,

    /// Registration facility receiving `method`, `url`, `middlewares` and the closure
    pub register_call: String,

    /// Helper merging the route URL with the container's prefix
    pub merge_url: String,

    /// Middlewares of the container, prepended to per-route middlewares
    pub middleware_group: String,

    /// Element type of the `middlewares` argument
    pub middleware_type: String,

    /// Return type of handlers
    pub return_type: String,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self {
            container: "Router".to_string(),
            register_call: "ResponseManager.sharedInstance.route".to_string(),
            merge_url: "mergeURL".to_string(),
            middleware_group: "middlewareGroup".to_string(),
            middleware_type: "Middleware".to_string(),
            return_type: "Any".to_string(),
        }
    }
}

const INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const CLOSURE_INDENT: &str = "                ";

/// Renders a route into a complete function definition.
///
/// Rendering is plain string assembly over validated descriptors and cannot
/// fail; mistakes in builder expressions surface only when the generated
/// Swift is compiled.
#[derive(Debug, Clone, Copy)]
pub struct FunctionRenderer<'t> {
    target: &'t RenderTarget,
}

impl<'t> FunctionRenderer<'t> {
    pub fn new(target: &'t RenderTarget) -> Self {
        Self { target }
    }

    /// Render one function block, starting with a blank separator line.
    pub fn render(&self, route: &Route<'_>) -> String {
        let mut code = String::new();

        self.render_doc(route, &mut code);
        self.render_declaration(route, &mut code);
        self.render_body(route, &mut code);

        code
    }

    fn render_doc(&self, route: &Route<'_>, code: &mut String) {
        code.push('\n');
        code.push_str(&format!(
            "{INDENT}/// Add route for {} method\n",
            route.method
        ));
        code.push_str(&format!("{INDENT}///\n"));
        code.push_str(&format!("{INDENT}/// - Parameters:\n"));
        code.push_str(&format!("{INDENT}///   - url: Url of route\n"));
        code.push_str(&format!("{INDENT}///   - middlewares: Array of Middlewares\n"));
        code.push_str(&format!("{INDENT}///   - handler: Response handler\n"));

        for param in route.combination.iter() {
            code.push_str(&format!("{INDENT}///   - {}: {}\n", param.name(), param.doc()));
        }
    }

    fn render_declaration(&self, route: &Route<'_>, code: &mut String) {
        code.push_str(&format!(
            "{INDENT}public func {}{}(\n",
            route.method,
            generic_clause(route)
        ));
        code.push_str(&format!("{BODY_INDENT}_ url: String,\n"));
        code.push_str(&format!(
            "{BODY_INDENT}middlewares: [{}] = [],\n",
            self.target.middleware_type
        ));

        // Callbacks of user-supplied builders go right before the handler
        for param in route.combination.iter().filter(|p| p.is_user_builder()) {
            code.push_str(&format!(
                "{BODY_INDENT}{}: {},\n",
                param.name(),
                param.declared_type()
            ));
        }

        let handler_params = route
            .combination
            .iter()
            .map(|p| format!("_ {}: {}", p.handler_label(), p.var_type()))
            .collect::<Vec<_>>()
            .join(", ");
        code.push_str(&format!(
            "{BODY_INDENT}handler: @escaping ({handler_params}) throws -> {}) {{\n",
            self.target.return_type
        ));
    }

    fn render_body(&self, route: &Route<'_>, code: &mut String) {
        let closure_param = if route.combination.is_empty() {
            "_"
        } else {
            "request"
        };

        code.push('\n');
        code.push_str(&format!("{BODY_INDENT}{}(\n", self.target.register_call));
        code.push_str(&format!("{BODY_INDENT}    method: .{},\n", route.method));
        code.push_str(&format!(
            "{BODY_INDENT}    url: {}(with: url),\n",
            self.target.merge_url
        ));
        code.push_str(&format!(
            "{BODY_INDENT}    middlewares: {} + middlewares) {{ {closure_param} in\n",
            self.target.middleware_group
        ));

        for param in route.combination.iter() {
            if let Some(builder) = param.builder() {
                code.push_str(&format!(
                    "{CLOSURE_INDENT}let {}: {} = {}\n",
                    param.var_name(),
                    param.var_type(),
                    builder
                ));
            }
        }

        let arguments = route
            .combination
            .iter()
            .map(|p| p.var_name())
            .collect::<Vec<_>>()
            .join(", ");
        code.push_str(&format!("{CLOSURE_INDENT}return try handler({arguments})\n"));
        code.push_str(&format!("{BODY_INDENT}}}\n"));
        code.push_str(&format!("{INDENT}}}\n"));
    }
}

/// `<T: Decodable, C>` for the generic descriptors of a route, empty when none
fn generic_clause(route: &Route<'_>) -> String {
    let fragments: Vec<String> = route
        .combination
        .iter()
        .filter_map(|p| p.generic_clause_fragment())
        .collect();

    if fragments.is_empty() {
        String::new()
    } else {
        format!("<{}>", fragments.join(", "))
    }
}
