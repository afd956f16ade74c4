//! Common types and utilities for the dsense source-intelligence engine.
//!
//! This crate provides foundational types used across all dsense crates:
//! - Source locations (`CodeLocation`, `CodeSpan`)
//! - Pure text predicates (`is_identifier_char`)

// Line/column source locations and spans
pub mod position;
pub use position::{CodeLocation, CodeSpan};

// Stateless text predicates
pub mod text;
pub use text::{char_before, char_two_before, is_identifier_char};
