use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::route_spec::ParsedPath;

fn default_mux() -> String {
    "Mux".to_string()
}

/// The merged, typed configuration.
///
/// Maps are ordered by key so the generated output never depends on hash ordering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Configuration {
    /// Package the generated module belongs to.
    pub package: String,
    /// Output directory, relative to the root configuration's directory.
    pub out: String,
    /// Paths emitted as `use` statements.
    pub imports: Vec<String>,
    /// Extra parameters of the registration function, name to type.
    pub args: BTreeMap<String, String>,
    /// Local bindings available to handler and middleware expressions, name to expression.
    pub vars: BTreeMap<String, String>,
    /// Type of the router handle passed to the registration function.
    pub mux: String,
    /// Route groups, in document order.
    pub routes: Vec<RouteGroup>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            package: String::new(),
            out: String::new(),
            imports: Vec::new(),
            args: BTreeMap::new(),
            vars: BTreeMap::new(),
            mux: default_mux(),
            routes: Vec::new(),
        }
    }
}

/// A set of routes sharing a base path and a middleware stack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteGroup {
    /// Shared middlewares, applied outside the path-specific ones.
    #[serde(rename = "use")]
    pub uses: Vec<String>,
    /// Prefix prepended to every pattern of the group.
    pub base: String,
    /// Raw route-spec strings.
    pub paths: Vec<String>,
    /// One entry per `paths` element once the configuration is loaded.
    #[serde(skip_deserializing)]
    pub parsed_paths: Vec<ParsedPath>,
}
