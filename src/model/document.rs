//! Document — a graph fragment wrapped with provenance metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NodeList;

/// A tool that produced (or transformed) a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub vendor: String,
}

/// An author of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// Provenance metadata attached to a document.
///
/// `tools` must record the generating tool when the document is synthesized
/// by assembly; documents loaded from external sources carry whatever their
/// producer wrote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub id: String,
    /// Format version of the document, not of the described software.
    pub version: String,
    #[serde(default)]
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub authors: Vec<Person>,
    #[serde(default)]
    pub comment: String,
}

/// A complete SBOM document: fragment plus metadata.
///
/// Invariant: `node_list` is self-consistent — no edge references a node
/// absent from the node set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: Metadata,
    pub node_list: NodeList,
}
