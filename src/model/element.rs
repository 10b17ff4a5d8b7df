//! Element — the closed value union the expression dispatcher trades in.
//!
//! The function surface receives already-type-erased arguments from the
//! expression collaborator and must validate them itself. A tagged union
//! with exhaustive matching keeps that validation in one obvious place
//! instead of scattered type assertions.

use serde::{Deserialize, Serialize};

use super::{Document, Node, NodeList};
use crate::Error;

/// A type-erased value crossing the function surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Element {
    /// Explicit "no value" — lookup misses, never an error.
    Null,
    String(String),
    Node(Box<Node>),
    NodeList(Box<NodeList>),
    Document(Box<Document>),
}

impl Element {
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Null => "NULL",
            Element::String(_) => "STRING",
            Element::Node(_) => "NODE",
            Element::NodeList(_) => "NODE_LIST",
            Element::Document(_) => "DOCUMENT",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Element::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::String(s) => Some(s),
            _ => None,
        }
    }

    /// The fragment carried by a graph-bearing element, if any.
    pub fn as_node_list(&self) -> Option<&NodeList> {
        match self {
            Element::NodeList(nl) => Some(nl),
            Element::Document(doc) => Some(&doc.node_list),
            _ => None,
        }
    }

    /// Require a string argument, or fail with an argument-type error.
    pub fn expect_str(&self, what: &str) -> Result<&str, Error> {
        self.as_str().ok_or_else(|| Error::ArgumentType {
            expected: format!("{what} (a string)"),
            got: self.type_name().to_string(),
        })
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(Box::new(node))
    }
}

impl From<NodeList> for Element {
    fn from(nl: NodeList) -> Self {
        Element::NodeList(Box::new(nl))
    }
}

impl From<Document> for Element {
    fn from(doc: Document) -> Self {
        Element::Document(Box::new(doc))
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::String(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::String(s)
    }
}
