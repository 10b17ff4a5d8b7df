//! Function surface — the externally callable operations.
//!
//! An expression-language runtime dispatches these by name and arity with
//! already-type-erased [`Element`] arguments. Argument count and type
//! validation happens here, not in the dispatcher, and every failure is a
//! typed error value — nothing on this surface panics.
//!
//! Filters and lookups accept a Document or a NodeList interchangeably and
//! preserve the caller's type in the result; the two deliberate exceptions
//! are [`to_document`] (fragment in, document out) and [`add`] (always a
//! fragment out).

use crate::assemble::Assembler;
use crate::builder::GraphBuilder;
use crate::loader;
use crate::model::{Element, NodeKind, NodeList};
use crate::{Error, Result};

// ============================================================================
// Dispatch
// ============================================================================

/// Invoke a surface function by name. This is the seam the expression
/// runtime calls into: fixed names, owned arguments, typed errors.
pub fn call(name: &str, args: Vec<Element>) -> Result<Element> {
    match name {
        "files" => {
            let [graph] = take("files", args)?;
            files(graph)
        }
        "packages" => {
            let [graph] = take("packages", args)?;
            packages(graph)
        }
        "node_by_id" => {
            let [graph, id] = take("node_by_id", args)?;
            node_by_id(graph, &id)
        }
        "nodes_by_purl_type" => {
            let [graph, purl_type] = take("nodes_by_purl_type", args)?;
            nodes_by_purl_type(graph, &purl_type)
        }
        "to_node_list" => {
            let [value] = take("to_node_list", args)?;
            to_node_list(value)
        }
        "to_document" => {
            let [fragment] = take("to_document", args)?;
            to_document(fragment)
        }
        "add" => {
            let [lhs, rhs] = take("add", args)?;
            add(lhs, rhs)
        }
        "relate_at" => {
            let [target, subgraph, anchor, relation] = take("relate_at", args)?;
            relate_at(target, subgraph, &anchor, &relation)
        }
        "load" => {
            let [path] = take("load", args)?;
            load(&path)
        }
        other => Err(Error::UnknownFunction(other.to_string())),
    }
}

/// Enforce exact arity, handing the arguments back as a fixed-size array.
fn take<const N: usize>(function: &'static str, args: Vec<Element>) -> Result<[Element; N]> {
    let got = args.len();
    args.try_into().map_err(|_| Error::ArgumentCount {
        function,
        expected: N,
        got,
    })
}

// ============================================================================
// Filters and lookups
// ============================================================================

/// Induced subgraph of FILE nodes. Document in, document out.
pub fn files(graph: Element) -> Result<Element> {
    filter_kind(graph, NodeKind::File)
}

/// Induced subgraph of PACKAGE nodes. Document in, document out.
pub fn packages(graph: Element) -> Result<Element> {
    filter_kind(graph, NodeKind::Package)
}

fn filter_kind(graph: Element, kind: NodeKind) -> Result<Element> {
    match graph {
        Element::Document(mut doc) => {
            doc.node_list = doc.node_list.nodes_by_kind(kind);
            Ok(Element::Document(doc))
        }
        Element::NodeList(nl) => Ok(nl.nodes_by_kind(kind).into()),
        other => Err(Error::UnsupportedType(other.type_name().to_string())),
    }
}

/// Induced subgraph of nodes whose purl type matches (e.g. `"golang"`).
pub fn nodes_by_purl_type(graph: Element, purl_type: &Element) -> Result<Element> {
    let purl_type = purl_type.expect_str("purl type")?;
    match graph {
        Element::Document(mut doc) => {
            doc.node_list = doc.node_list.nodes_by_purl_type(purl_type);
            Ok(Element::Document(doc))
        }
        Element::NodeList(nl) => Ok(nl.nodes_by_purl_type(purl_type).into()),
        other => Err(Error::UnsupportedType(other.type_name().to_string())),
    }
}

/// Look up a node by identifier. A miss is `Element::Null`, not an error.
pub fn node_by_id(graph: Element, id: &Element) -> Result<Element> {
    let id = id.expect_str("node id")?;
    let nl = graph
        .as_node_list()
        .ok_or_else(|| Error::UnsupportedType(graph.type_name().to_string()))?;
    Ok(nl
        .node_by_id(id)
        .map_or(Element::Null, |node| node.clone().into()))
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert a value to a fragment: a node becomes a singleton fragment, a
/// document yields its graph, a fragment passes through.
pub fn to_node_list(value: Element) -> Result<Element> {
    match value {
        Element::Node(node) => Ok(NodeList::new().with_node(*node).into()),
        Element::NodeList(nl) => Ok(Element::NodeList(nl)),
        Element::Document(doc) => Ok(doc.node_list.into()),
        other => Err(Error::UnsupportedType(other.type_name().to_string())),
    }
}

/// Promote a fragment to a standalone document. Documents can be created
/// only from node fragments — a document argument is an error, convert it
/// with [`to_node_list`] first.
pub fn to_document(fragment: Element) -> Result<Element> {
    match fragment {
        Element::NodeList(nl) => Ok(Assembler::default().assemble(*nl).into()),
        other => Err(Error::UnsupportedType(format!(
            "documents can be created only from node fragments, got {}",
            other.type_name()
        ))),
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Union of two graphs. Nodes merge by id (left entry wins), edges dedup.
/// Always yields a fragment.
pub fn add(lhs: Element, rhs: Element) -> Result<Element> {
    let left = lhs
        .as_node_list()
        .ok_or_else(|| Error::UnsupportedType(lhs.type_name().to_string()))?;
    let right = rhs
        .as_node_list()
        .ok_or_else(|| Error::UnsupportedType(rhs.type_name().to_string()))?;
    Ok(left.add(right).into())
}

/// Merge `subgraph` into `target` and link its roots under the anchor node.
/// Returns the mutated target, same variant in as out.
pub fn relate_at(
    target: Element,
    subgraph: Element,
    anchor_id: &Element,
    relation_type: &Element,
) -> Result<Element> {
    let anchor_id = anchor_id.expect_str("anchor node id")?;
    let relation_type = relation_type.expect_str("relationship type")?;
    let subgraph = match subgraph {
        Element::NodeList(nl) => *nl,
        other => {
            return Err(Error::ArgumentType {
                expected: "a node fragment".to_string(),
                got: other.type_name().to_string(),
            });
        }
    };

    let mut builder = GraphBuilder::new(target)?;
    builder.relate(&subgraph, anchor_id, relation_type)?;
    Ok(builder.into_element())
}

// ============================================================================
// Loading
// ============================================================================

/// Load a document from the path named by a string element.
pub fn load(path: &Element) -> Result<Element> {
    let path = path.expect_str("path")?;
    Ok(loader::load(path)?.into())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Edge, EdgeType, Node};

    fn pkg(id: &str) -> Node {
        Node::new(id, NodeKind::Package)
    }

    fn sample() -> NodeList {
        NodeList::new()
            .with_node(Node::new("f1", NodeKind::File))
            .with_node(pkg("p1"))
            .with_node(pkg("p2"))
            .with_edge(Edge::new("p1", "p2", EdgeType::Contains))
    }

    #[test]
    fn dispatch_unknown_function() {
        let err = call("frobnicate", vec![]).unwrap_err();
        assert!(matches!(err, Error::UnknownFunction(_)));
    }

    #[test]
    fn dispatch_checks_arity() {
        let err = call("relate_at", vec![sample().into()]).unwrap_err();
        match err {
            Error::ArgumentCount {
                function,
                expected,
                got,
            } => {
                assert_eq!(function, "relate_at");
                assert_eq!(expected, 4);
                assert_eq!(got, 1);
            }
            other => panic!("expected ArgumentCount, got {other:?}"),
        }
    }

    #[test]
    fn packages_preserves_the_caller_type() {
        // Fragment in, fragment out.
        let out = packages(sample().into()).unwrap();
        assert!(matches!(out, Element::NodeList(_)));

        // Document in, document out, metadata intact.
        let doc = Assembler::default().assemble(sample());
        let name = doc.metadata.name.clone();
        let out = packages(doc.into()).unwrap();
        match out {
            Element::Document(doc) => {
                assert_eq!(doc.metadata.name, name);
                assert_eq!(doc.node_list.nodes.len(), 2);
            }
            other => panic!("expected Document, got {other:?}"),
        }
    }

    #[test]
    fn node_by_id_miss_is_null() {
        let hit = node_by_id(sample().into(), &"p1".into()).unwrap();
        assert!(matches!(hit, Element::Node(_)));

        let miss = node_by_id(sample().into(), &"missing".into()).unwrap();
        assert!(miss.is_null());
    }

    #[test]
    fn node_by_id_requires_a_string_id() {
        let err = node_by_id(sample().into(), &Element::Null).unwrap_err();
        assert!(matches!(err, Error::ArgumentType { .. }));
    }

    #[test]
    fn to_document_rejects_documents() {
        let doc = Assembler::default().assemble(sample());
        let err = to_document(doc.into()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn to_node_list_wraps_a_single_node() {
        let out = to_node_list(pkg("solo").into()).unwrap();
        let nl = out.as_node_list().unwrap();
        assert_eq!(nl.nodes.len(), 1);
        assert_eq!(nl.nodes[0].id, "solo");
    }

    #[test]
    fn relate_at_rejects_a_non_fragment_subgraph() {
        let err = relate_at(
            sample().into(),
            Element::from("not a graph"),
            &"p1".into(),
            &"DEPENDS_ON".into(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::ArgumentType { .. }));
    }

    #[test]
    fn relate_at_returns_the_target_variant() {
        let sub = NodeList::new().with_node(pkg("extra"));
        let out = relate_at(
            sample().into(),
            sub.clone().into(),
            &"p1".into(),
            &"DEPENDS_ON".into(),
        )
        .unwrap();
        let nl = match out {
            Element::NodeList(nl) => *nl,
            other => panic!("expected NodeList, got {other:?}"),
        };
        assert!(nl.edges.contains(&Edge::new("p1", "extra", EdgeType::DependsOn)));
        assert_eq!(nl.nodes.len(), 4);
    }

    #[test]
    fn add_unions_fragments() {
        let lhs = NodeList::new().with_node(pkg("a"));
        let rhs = NodeList::new().with_node(pkg("b"));
        let out = add(lhs.into(), rhs.into()).unwrap();
        assert_eq!(out.as_node_list().unwrap().nodes.len(), 2);
    }
}
