//! External document loading.
//!
//! Parsing is delegated to serde_json over the crate's document schema; the
//! core only requires that a successful parse yields a graph satisfying the
//! edge invariant, so that is verified here before the document is handed
//! to the caller. No retry on any failure.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::model::Document;
use crate::{Error, Result};

/// Load a document from a file path.
///
/// Open failures surface as [`Error::Io`], malformed content as
/// [`Error::Parse`], and a parse that yields a graph with dangling edges as
/// [`Error::Load`].
pub fn load(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let doc = read_document(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        nodes = doc.node_list.nodes.len(),
        edges = doc.node_list.edges.len(),
        "loaded document"
    );
    Ok(doc)
}

/// Parse a document from any reader and verify its graph invariants.
pub fn read_document(reader: impl Read) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;

    for edge in &doc.node_list.edges {
        if !doc.node_list.contains_node(&edge.from) || !doc.node_list.contains_node(&edge.to) {
            return Err(Error::Load(format!(
                "document graph is inconsistent: edge {} -> {} references a missing node",
                edge.from, edge.to
            )));
        }
    }

    Ok(doc)
}
