//! # sbomq — SBOM Graph Query/Mutation Engine
//!
//! A small algebra for querying and mutating software-bill-of-materials
//! graphs: typed nodes (packages, files) connected by typed, directed edges
//! (DEPENDS_ON, CONTAINS, DESCRIBES, ...).
//!
//! ## Design Principles
//!
//! 1. **Model is pure data**: `Node`, `Edge`, `NodeList`, `Document` cross
//!    every boundary; no I/O, no state in the model layer
//! 2. **Consistency by construction**: every derived fragment is cleaned so
//!    edges never reference nodes absent from the node set
//! 3. **Mutation is visible in the type**: `GraphBuilder` owns the one
//!    graph that `relate` extends in place; everything else is pure
//! 4. **Errors are values**: every operation returns a typed error, never
//!    panics across the surface
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sbomq::{loader, Assembler, Provenance};
//!
//! # fn example() -> sbomq::Result<()> {
//! let doc = loader::load("app.sbomq.json")?;
//!
//! // Extract the induced subgraph of package nodes.
//! let packages = doc.node_list.nodes_by_kind(sbomq::NodeKind::Package);
//!
//! // Promote the fragment to a standalone document.
//! let derived = Assembler::new(Provenance::default()).assemble(packages);
//! println!("{}", derived.metadata.name);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod assemble;
pub mod builder;
pub mod functions;
pub mod loader;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Node, NodeKind, Edge, EdgeType, NodeList, Document,
    Metadata, Tool, Person, Element,
};

// ============================================================================
// Re-exports: Assembly and mutation
// ============================================================================

pub use assemble::{Assembler, Provenance};
pub use builder::GraphBuilder;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("argument type error: expected {expected}, got {got}")]
    ArgumentType { expected: String, got: String },

    #[error("wrong number of arguments for {function}: expected {expected}, got {got}")]
    ArgumentCount {
        function: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("loading document: {0}")]
    Load(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
