//! Node — a single SBOM element (package, file).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Kind of SBOM element a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Package,
    File,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Package => write!(f, "PACKAGE"),
            NodeKind::File => write!(f, "FILE"),
        }
    }
}

/// A node in the SBOM graph.
///
/// Everything past `id` and `kind` is pass-through payload: the graph
/// algebra copies it around but never interprets it, with one exception:
/// the purl's type component feeds the purl-type filter on `NodeList`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a graph; generated upstream, opaque here.
    pub id: String,
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    /// Package URL, e.g. `pkg:golang/sigs.k8s.io/release-utils@v0.7.4`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub hashes: HashMap<String, String>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: String::new(),
            version: String::new(),
            purl: None,
            licenses: Vec::new(),
            hashes: HashMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_purl(mut self, purl: impl Into<String>) -> Self {
        self.purl = Some(purl.into());
        self
    }

    /// The type component of this node's purl: the segment between the
    /// `pkg:` scheme and the first `/` (e.g. `"golang"`, `"npm"`).
    /// `None` when the node has no purl or the purl is malformed.
    pub fn purl_type(&self) -> Option<&str> {
        let purl = self.purl.as_deref()?;
        let rest = purl.strip_prefix("pkg:")?;
        let ty = rest.split('/').next()?;
        if ty.is_empty() { None } else { Some(ty) }
    }
}
