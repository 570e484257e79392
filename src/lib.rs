//! jsonvet - a lenient JSON parser paired with a strict, composable
//! schema validator
//!
//! The pipeline: text → [`json::Lexer`] → tokens → [`json::Parser`] →
//! owned [`json::Value`] tree → [`schema::SchemaValidator`] →
//! [`schema::ValidationReport`].

pub mod cli;
pub mod json;
pub mod schema;
