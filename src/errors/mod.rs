//! Error types and error reporting for the lexer.
//!
//! This module defines:
//!
//! - The lexical error record with its source line
//! - The two lexical error variants
//! - Driver errors for reading source files
//! - Diagnostic printing

pub mod errors;
