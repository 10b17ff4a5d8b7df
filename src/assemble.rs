//! Document assembly — promote a fragment to a standalone document.
//!
//! Assembly is the terminal step of a query pipeline: orphan roots are
//! reconnected under the document root, then the fragment is wrapped with
//! generated provenance metadata. Provenance is injected configuration, not
//! ambient state, so assembly is deterministic given a fixed timestamp.

use chrono::{DateTime, Utc};

use crate::model::{Document, Metadata, NodeList, Tool};

/// Format version written into generated documents.
const FORMAT_VERSION: &str = "1";

/// Provenance constants embedded into generated metadata.
#[derive(Debug, Clone)]
pub struct Provenance {
    pub tool_name: String,
    pub tool_version: String,
    pub vendor: String,
    pub document_name: String,
    pub comment: String,
}

impl Default for Provenance {
    fn default() -> Self {
        Self {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            vendor: "sbomq project".to_string(),
            document_name: concat!(env!("CARGO_PKG_NAME"), " generated document").to_string(),
            comment: concat!(
                "This document was generated by ",
                env!("CARGO_PKG_NAME"),
                " from a node fragment"
            )
            .to_string(),
        }
    }
}

/// Wraps fragments into documents carrying the configured provenance.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    provenance: Provenance,
}

impl Assembler {
    pub fn new(provenance: Provenance) -> Self {
        Self { provenance }
    }

    /// Assemble a document from a fragment, dated now.
    pub fn assemble(&self, fragment: NodeList) -> Document {
        self.assemble_at(fragment, Utc::now())
    }

    /// Assemble with an explicit timestamp. The only nondeterminism in
    /// assembly is the date; pinning it makes the output reproducible.
    pub fn assemble_at(&self, mut fragment: NodeList, date: DateTime<Utc>) -> Document {
        fragment.reconnect_orphans();

        Document {
            metadata: Metadata {
                id: String::new(),
                version: FORMAT_VERSION.to_string(),
                name: self.provenance.document_name.clone(),
                date,
                tools: vec![Tool {
                    name: self.provenance.tool_name.clone(),
                    version: self.provenance.tool_version.clone(),
                    vendor: self.provenance.vendor.clone(),
                }],
                authors: Vec::new(),
                comment: self.provenance.comment.clone(),
            },
            node_list: fragment,
        }
    }
}
