#![allow(clippy::module_inception)]

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    sync::Once,
};

use crate::{
    errors::errors::{report, DriverError, Error},
    lexer::{lexer::tokenize, tokens::Token},
};

pub mod errors;
pub mod lexer;
pub mod macros;

pub const CSV_HEADER: &str = "Line,TokenType,Literal,Lexeme";
pub const REPL_BANNER: &str = "Mayfair lexer REPL";
pub const REPL_PROMPT: &str = "\n-->> ";
pub const REPL_FAREWELL: &str = "Thanks for using Lex REPL";
pub const QUIT_COMMAND: &str = "quit";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=mfer=debug`. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}

/// Scans one complete source text and reports its lexical errors.
pub fn run_source(source: impl Into<Vec<u8>>) -> (Vec<Token>, Vec<Error>) {
    let (tokens, errors) = tokenize(source);

    for error in &errors {
        report(error);
    }

    (tokens, errors)
}

/// Reads `path` fully and scans it as one source text.
///
/// The file is read as bytes, so invalid UTF-8 is left for the scanner to
/// report instead of failing the read.
pub fn run_file(path: impl AsRef<Path>) -> Result<(Vec<Token>, Vec<Error>), DriverError> {
    let path = path.as_ref();
    let source = fs::read(path).map_err(|source| DriverError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "read source file");
    Ok(run_source(source))
}

/// Interactive mode: every input line is scanned on its own and printed.
///
/// Stops on a line reading `quit` (surrounding whitespace ignored) or at
/// end of input. No state, errors included, carries from one line to the
/// next.
pub fn run_prompt(mut input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{}", REPL_BANNER)?;

    loop {
        write!(output, "{}", REPL_PROMPT)?;
        output.flush()?;

        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }

        if String::from_utf8_lossy(&line).trim() == QUIT_COMMAND {
            writeln!(output, "{}", REPL_FAREWELL)?;
            return Ok(());
        }

        let (tokens, _) = run_source(line);
        print_tokens(&tokens, &mut output)?;
    }
}

/// Writes the CSV header then one `line,TokenType,literal,lexeme` row per token.
pub fn print_tokens(tokens: &[Token], mut output: impl Write) -> io::Result<()> {
    writeln!(output, "{}", CSV_HEADER)?;

    for token in tokens {
        writeln!(output, "{}", token.render())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{print_tokens, run_source};

    #[test]
    fn test_print_tokens() {
        let (tokens, _) = run_source("var x;".to_string());
        let mut output = Vec::new();
        print_tokens(&tokens, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Line,TokenType,Literal,Lexeme\n\
             1,VAR,null,var\n\
             1,IDENTIFIER,x,x\n\
             1,SEMICOLON,null,;\n\
             1,EOF,null,\n"
        );
    }

    #[test]
    fn test_print_no_tokens() {
        let mut output = Vec::new();
        print_tokens(&[], &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Line,TokenType,Literal,Lexeme\n");
    }

    #[test]
    fn test_run_source_keeps_errors() {
        let (tokens, errors) = run_source("\"abc".to_string());

        assert_eq!(tokens.len(), 1);
        assert_eq!(errors.len(), 1);
    }
}
