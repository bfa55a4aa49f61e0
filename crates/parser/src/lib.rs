//! Smithy model loading and dependency resolution
//!
//! This crate loads a Smithy JSON AST document into typed shapes and
//! computes the transitive closure of shapes reachable from a set of roots.
//!
//! ## Resolution
//!
//! Edges are the `target` fields of:
//! - operation `input`, `output`, and `errors`
//! - structure and union `members`
//! - list `member`
//! - map `key` and `value`
//!
//! Targets absent from the model end the walk silently.

mod resolver;
pub mod smithy;

pub use resolver::DependencyResolver;
pub use smithy::{SmithyModel, SmithyParser};
