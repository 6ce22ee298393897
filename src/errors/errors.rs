use std::{fmt::Display, io, path::PathBuf};

use colored::Colorize;
use thiserror::Error;

pub const DIAGNOSTIC_PREFIX: &str = "Error on line:";

/// A lexical error recorded by the scanner. Scanning continues after one
/// is raised; the offending lexeme is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// `<prefix> <line> : <message>`, the one layout every diagnostic uses.
    pub fn render_with_prefix(&self, prefix: impl Display) -> String {
        format!("{} {} : {}", prefix, self.line, self.internal_error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_with_prefix(DIAGNOSTIC_PREFIX))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Unterminated String")]
    UnterminatedString,
    #[error("Unexpected Character")]
    UnexpectedCharacter { character: u8 },
}

/// Failures of the driver around the scanner. Reading the source is the
/// only one and it is fatal for the binary.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes a diagnostic for `error` to standard error.
pub fn report(error: &Error) {
    eprintln!("{}", error.render_with_prefix(DIAGNOSTIC_PREFIX.red().bold()));
}
