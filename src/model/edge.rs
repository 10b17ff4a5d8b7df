//! Edge — a typed, directed relationship between two nodes.

use serde::{Deserialize, Serialize};

use crate::Error;

/// Relationship type carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    DependsOn,
    Contains,
    Describes,
    BuildDependency,
    DevDependency,
    RuntimeDependency,
    Documentation,
    Variant,
    Other,
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeType::DependsOn => "DEPENDS_ON",
            EdgeType::Contains => "CONTAINS",
            EdgeType::Describes => "DESCRIBES",
            EdgeType::BuildDependency => "BUILD_DEPENDENCY",
            EdgeType::DevDependency => "DEV_DEPENDENCY",
            EdgeType::RuntimeDependency => "RUNTIME_DEPENDENCY",
            EdgeType::Documentation => "DOCUMENTATION",
            EdgeType::Variant => "VARIANT",
            EdgeType::Other => "OTHER",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for EdgeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "DEPENDS_ON" => Ok(EdgeType::DependsOn),
            "CONTAINS" => Ok(EdgeType::Contains),
            "DESCRIBES" => Ok(EdgeType::Describes),
            "BUILD_DEPENDENCY" => Ok(EdgeType::BuildDependency),
            "DEV_DEPENDENCY" => Ok(EdgeType::DevDependency),
            "RUNTIME_DEPENDENCY" => Ok(EdgeType::RuntimeDependency),
            "DOCUMENTATION" => Ok(EdgeType::Documentation),
            "VARIANT" => Ok(EdgeType::Variant),
            "OTHER" => Ok(EdgeType::Other),
            other => Err(Error::ArgumentType {
                expected: "a relationship type (DEPENDS_ON, CONTAINS, ...)".into(),
                got: other.into(),
            }),
        }
    }
}

/// A directed edge in the SBOM graph.
///
/// Invariant: within a fragment, `from` and `to` must both name nodes
/// present in the fragment's node set. An edge violating this is dangling
/// and must be dropped by `NodeList::clean_edges`, never kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, edge_type: EdgeType) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            edge_type,
        }
    }
}
