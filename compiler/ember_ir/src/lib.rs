//! Ember IR - identity types shared by the value and evaluator crates.
//!
//! The evaluator nodes live in the host's expression tree. This crate only
//! carries what a node needs to identify itself in diagnostics:
//! - `NodeId` for the syntactic expression a node was built from
//! - `SourceLocation` for human-readable `file line col` positions

mod location;
mod node_id;

pub use location::SourceLocation;
pub use node_id::NodeId;
