//! Schema validation subsystem for jsonvet
//!
//! Schemas are composable constraint descriptions: built through
//! chainable builders, stored in an arena, and walked against a parsed
//! value tree. Validation accumulates every independent violation in
//! one pass instead of stopping at the first.
//!
//! # Design Principles
//!
//! - Kind check before constraint checks, per node
//! - Violations are recorded, never thrown
//! - Independent checks record independent errors
//! - Deterministic error ordering (key-sorted object traversal)
//! - Every schema node is owned by exactly one arena

mod context;
mod errors;
mod factory;
mod types;
mod validator;

pub use context::ValidatorContext;
pub use errors::{ValidationError, ValidationReport};
pub use factory::{SchemaArena, SchemaHandle};
pub use types::{
    ArraySchema, BoolSchema, NullSchema, NumberSchema, ObjectSchema, Schema, SchemaKind,
    StringSchema,
};
pub use validator::SchemaValidator;
