//! GraphBuilder — owned, composable graph mutation.
//!
//! Relating a subgraph extends the target in place; that is the one
//! observable mutation in the algebra, and it exists so repeated relate
//! calls compose on a running graph. The builder makes the aliasing
//! contract visible in the type: it owns the target exclusively for its
//! lifetime, so no other reference can observe a half-applied merge.

use crate::model::{Element, NodeList};
use crate::{Error, Result};

/// Owns a Document or NodeList target and accumulates relate calls into it.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    target: Element,
}

impl GraphBuilder {
    /// Wrap a graph-bearing element. Anything but a Document or NodeList is
    /// rejected.
    pub fn new(target: Element) -> Result<Self> {
        match target {
            Element::Document(_) | Element::NodeList(_) => Ok(Self { target }),
            other => Err(Error::UnsupportedType(other.type_name().to_string())),
        }
    }

    /// Start from an empty fragment.
    pub fn empty() -> Self {
        Self {
            target: NodeList::new().into(),
        }
    }

    fn fragment_mut(&mut self) -> &mut NodeList {
        match &mut self.target {
            Element::Document(doc) => &mut doc.node_list,
            Element::NodeList(nl) => nl,
            // new() admits only the two graph-bearing variants.
            _ => unreachable!("builder target is always graph-bearing"),
        }
    }

    /// Merge `subgraph` into the owned target and link its roots under
    /// `anchor_id` with `relation_type` edges. See `NodeList::relate_at`
    /// for the merge and root semantics.
    pub fn relate(
        &mut self,
        subgraph: &NodeList,
        anchor_id: &str,
        relation_type: &str,
    ) -> Result<&mut Self> {
        let edge_type = relation_type.parse()?;
        self.fragment_mut().relate_at(subgraph, anchor_id, edge_type)?;
        Ok(self)
    }

    /// The accumulated graph, same variant as the input target.
    pub fn element(&self) -> &Element {
        &self.target
    }

    /// Release the accumulated graph.
    pub fn into_element(self) -> Element {
        self.target
    }
}
