//! NodeList — a graph fragment and the query/mutation algebra over it.
//!
//! A fragment is a node set (unique by id) plus an edge set. It has no
//! inherent root: rootedness is computed on demand as the nodes with zero
//! incoming edges. `root_elements` flags the ids a document presents as its
//! entry points; orphan reconnection writes to it when a fragment is
//! promoted to a standalone document.
//!
//! Every derived fragment returned by the filters is self-consistent: edges
//! whose endpoints did not survive the filter are dropped, never kept.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Edge, EdgeType, Node, NodeKind};
use crate::{Error, Result};

/// A graph fragment: nodes, edges, and flagged entry points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeList {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Ids flagged as document entry points. Stands in for the implicit
    /// document root: a node listed here is "connected" even with zero
    /// incoming edges.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub root_elements: Vec<String>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Find a node by identifier. Absence is `None`, not an error.
    ///
    /// Linear scan; identifiers are assumed unique, so the first match wins.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_by_id(id).is_some()
    }

    // ========================================================================
    // Edge consistency
    // ========================================================================

    /// Drop edges whose source or target is absent from the node set.
    ///
    /// Idempotent: a second pass over an already-clean fragment is a no-op.
    pub fn clean_edges(&mut self) {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .retain(|e| ids.contains(e.from.as_str()) && ids.contains(e.to.as_str()));
    }

    // ========================================================================
    // Filters (pure: inputs untouched, fresh fragment out)
    // ========================================================================

    /// Induced subgraph of nodes of the given kind.
    pub fn nodes_by_kind(&self, kind: NodeKind) -> NodeList {
        self.filter_nodes(|n| n.kind == kind)
    }

    /// Induced subgraph of nodes whose purl type component matches.
    /// Nodes without a purl never match.
    pub fn nodes_by_purl_type(&self, purl_type: &str) -> NodeList {
        self.filter_nodes(|n| n.purl_type() == Some(purl_type))
    }

    /// Shared filter shape: select nodes, carry the full edge set over,
    /// then clean so the result is self-consistent.
    fn filter_nodes(&self, pred: impl Fn(&Node) -> bool) -> NodeList {
        let mut out = NodeList {
            nodes: self.nodes.iter().filter(|&n| pred(n)).cloned().collect(),
            edges: self.edges.clone(),
            root_elements: Vec::new(),
        };
        out.clean_edges();
        out.root_elements = self
            .root_elements
            .iter()
            .filter(|id| out.contains_node(id))
            .cloned()
            .collect();
        out
    }

    // ========================================================================
    // Roots
    // ========================================================================

    /// Nodes with zero incoming edges within this fragment.
    pub fn root_nodes(&self) -> Vec<&Node> {
        let targets: HashSet<&str> = self.edges.iter().map(|e| e.to.as_str()).collect();
        self.nodes
            .iter()
            .filter(|n| !targets.contains(n.id.as_str()))
            .collect()
    }

    /// Flag every computed root as a document entry point.
    ///
    /// A fragment produced by arbitrary composition of filter/relate calls
    /// may carry several unrelated roots; a document is expected to describe
    /// a single coherent subject, so assembly reconnects them under the
    /// implicit document root instead of erroring or dropping components.
    /// Adds structure only — no node or edge is ever removed.
    pub fn reconnect_orphans(&mut self) {
        let roots: Vec<String> = self.root_nodes().iter().map(|n| n.id.clone()).collect();
        for id in roots {
            if !self.root_elements.contains(&id) {
                self.root_elements.push(id);
            }
        }
    }

    // ========================================================================
    // Relation engine
    // ========================================================================

    /// Merge `subgraph` into this fragment and link every root of
    /// `subgraph` under the node `anchor` with an edge of `edge_type`.
    ///
    /// Roots are computed on `subgraph` before the merge. Nodes merge by
    /// id — an id already present here wins, the incoming duplicate is
    /// skipped. Edges union with exact-duplicate dedup.
    ///
    /// This is the one mutating operation in the algebra: the receiver is
    /// extended in place so repeated calls compose on a running graph. An
    /// unknown `anchor` is rejected with [`Error::NotFound`] before any
    /// mutation; a relate error leaves the receiver untouched.
    pub fn relate_at(
        &mut self,
        subgraph: &NodeList,
        anchor: &str,
        edge_type: EdgeType,
    ) -> Result<()> {
        if !self.contains_node(anchor) {
            return Err(Error::NotFound(format!("anchor node {anchor}")));
        }

        let roots: Vec<String> = subgraph.root_nodes().iter().map(|n| n.id.clone()).collect();

        for node in &subgraph.nodes {
            if !self.contains_node(&node.id) {
                self.nodes.push(node.clone());
            }
        }
        for edge in &subgraph.edges {
            if !self.edges.contains(edge) {
                self.edges.push(edge.clone());
            }
        }
        for root in &roots {
            let edge = Edge::new(anchor, root.clone(), edge_type);
            if !self.edges.contains(&edge) {
                self.edges.push(edge);
            }
        }

        debug!(
            anchor,
            %edge_type,
            roots = roots.len(),
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "related subgraph at anchor"
        );
        Ok(())
    }

    // ========================================================================
    // Union
    // ========================================================================

    /// Fragment union: nodes by id (entries of `self` win), edges deduped,
    /// entry-point flags combined. Pure — both inputs are left untouched.
    pub fn add(&self, other: &NodeList) -> NodeList {
        let mut out = self.clone();
        for node in &other.nodes {
            if !out.contains_node(&node.id) {
                out.nodes.push(node.clone());
            }
        }
        for edge in &other.edges {
            if !out.edges.contains(edge) {
                out.edges.push(edge.clone());
            }
        }
        for id in &other.root_elements {
            if !out.root_elements.contains(id) {
                out.root_elements.push(id.clone());
            }
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pkg(id: &str) -> Node {
        Node::new(id, NodeKind::Package)
    }

    fn file(id: &str) -> Node {
        Node::new(id, NodeKind::File)
    }

    fn sample() -> NodeList {
        NodeList::new()
            .with_node(file("f1"))
            .with_node(pkg("p1"))
            .with_node(pkg("p2"))
            .with_edge(Edge::new("p1", "p2", EdgeType::Contains))
            .with_edge(Edge::new("p1", "f1", EdgeType::Contains))
    }

    #[test]
    fn clean_drops_dangling_edges() {
        let mut nl = sample();
        nl.edges.push(Edge::new("p1", "ghost", EdgeType::DependsOn));
        nl.clean_edges();
        assert_eq!(nl.edges.len(), 2);
        assert!(nl.edges.iter().all(|e| e.to != "ghost"));
    }

    #[test]
    fn filter_by_kind_keeps_internal_edges() {
        let packages = sample().nodes_by_kind(NodeKind::Package);
        assert_eq!(packages.nodes.len(), 2);
        assert_eq!(packages.edges, vec![Edge::new("p1", "p2", EdgeType::Contains)]);
    }

    #[test]
    fn filter_by_kind_drops_cross_kind_edges() {
        let files = sample().nodes_by_kind(NodeKind::File);
        assert_eq!(files.nodes.len(), 1);
        assert_eq!(files.nodes[0].id, "f1");
        assert!(files.edges.is_empty());
    }

    #[test]
    fn filter_by_purl_type() {
        let nl = NodeList::new()
            .with_node(pkg("p1").with_purl("pkg:golang/example.com/a@v1"))
            .with_node(pkg("p2").with_purl("pkg:npm/left-pad@1.0.0"))
            .with_node(pkg("p3"));
        let golang = nl.nodes_by_purl_type("golang");
        assert_eq!(golang.nodes.len(), 1);
        assert_eq!(golang.nodes[0].id, "p1");
    }

    #[test]
    fn lookup_hit_and_miss() {
        let nl = sample();
        assert_eq!(nl.node_by_id("p2").map(|n| n.id.as_str()), Some("p2"));
        assert!(nl.node_by_id("missing").is_none());
    }

    #[test]
    fn roots_are_nodes_without_incoming_edges() {
        let nl = sample();
        let roots: Vec<&str> = nl.root_nodes().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(roots, vec!["p1"]);
    }

    #[test]
    fn relate_merges_without_duplicates_and_links_all_roots() {
        let mut target = NodeList::new()
            .with_node(pkg("a"))
            .with_node(pkg("c"));
        let sub = NodeList::new()
            .with_node(pkg("a"))
            .with_node(pkg("b"));

        target.relate_at(&sub, "c", EdgeType::DependsOn).unwrap();

        let ids: Vec<&str> = target.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);

        // Both subgraph nodes were roots, so both get an anchor edge.
        assert_eq!(
            target.edges,
            vec![
                Edge::new("c", "a", EdgeType::DependsOn),
                Edge::new("c", "b", EdgeType::DependsOn),
            ]
        );
    }

    #[test]
    fn relate_computes_roots_before_merge() {
        let mut target = NodeList::new()
            .with_node(pkg("anchor"))
            .with_node(pkg("x"))
            .with_edge(Edge::new("anchor", "x", EdgeType::Contains));
        // "x" is a root of the subgraph even though the target already has
        // an incoming edge to it.
        let sub = NodeList::new()
            .with_node(pkg("x"))
            .with_node(pkg("y"))
            .with_edge(Edge::new("x", "y", EdgeType::DependsOn));

        target.relate_at(&sub, "anchor", EdgeType::DependsOn).unwrap();

        assert!(target.edges.contains(&Edge::new("anchor", "x", EdgeType::DependsOn)));
        assert!(!target.edges.contains(&Edge::new("anchor", "y", EdgeType::DependsOn)));
    }

    #[test]
    fn relate_rejects_unknown_anchor_without_mutating() {
        let mut target = NodeList::new().with_node(pkg("a"));
        let before = target.clone();
        let sub = NodeList::new().with_node(pkg("b"));

        let err = target.relate_at(&sub, "nope", EdgeType::DependsOn).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(target, before);
    }

    #[test]
    fn relate_is_idempotent_on_edges() {
        let mut target = NodeList::new().with_node(pkg("a"));
        let sub = NodeList::new().with_node(pkg("b"));

        target.relate_at(&sub, "a", EdgeType::DependsOn).unwrap();
        target.relate_at(&sub, "a", EdgeType::DependsOn).unwrap();

        assert_eq!(target.nodes.len(), 2);
        assert_eq!(target.edges.len(), 1);
    }

    #[test]
    fn reconnect_flags_every_root_once() {
        let mut nl = NodeList::new()
            .with_node(pkg("r1"))
            .with_node(pkg("r2"))
            .with_node(pkg("leaf"))
            .with_edge(Edge::new("r1", "leaf", EdgeType::Contains));
        nl.root_elements.push("r1".into());

        nl.reconnect_orphans();
        assert_eq!(nl.root_elements, vec!["r1".to_string(), "r2".to_string()]);

        // Second pass adds nothing.
        nl.reconnect_orphans();
        assert_eq!(nl.root_elements.len(), 2);
    }

    #[test]
    fn add_unions_by_id() {
        let left = NodeList::new().with_node(pkg("a")).with_node(pkg("b"));
        let right = NodeList::new()
            .with_node(pkg("b").with_name("duplicate"))
            .with_node(pkg("c"));

        let union = left.add(&right);
        assert_eq!(union.nodes.len(), 3);
        // Existing entry wins: left's unnamed "b" survives.
        assert_eq!(union.node_by_id("b").unwrap().name, "");
    }
}

// ============================================================================
// Property tests — the algebra laws
// ============================================================================
