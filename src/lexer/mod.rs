//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a flat
//! sequence of tokens. It handles:
//!
//! - Punctuation and one-or-two character operators
//! - Recognition of keywords and identifiers
//! - String and number literals, kept as text
//! - Line comments and whitespace
//! - Line tracking for every token and error

pub mod lexer;
pub mod tokens;
