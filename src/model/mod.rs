//! # SBOM Graph Model
//!
//! Clean DTOs that define the SBOM graph. These types cross every boundary:
//! loader ↔ graph algebra ↔ function surface ↔ user.
//!
//! Design rule: this module is pure data — no I/O, no state, no clocks.
//! Identifiers are externally generated, globally unique strings; the model
//! never mints them.

pub mod node;
pub mod edge;
pub mod node_list;
pub mod document;
pub mod element;

pub use node::{Node, NodeKind};
pub use edge::{Edge, EdgeType};
pub use node_list::NodeList;
pub use document::{Document, Metadata, Tool, Person};
pub use element::Element;
