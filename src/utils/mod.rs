//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and custom alias validation
//! - [`url_normalizer`] - URL validation and canonicalization

pub mod code_generator;
pub mod url_normalizer;
