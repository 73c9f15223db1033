//! # Letter Expression Language
//!
//! A lexer and recursive descent parser for Letter, a small expression
//! language with:
//! - Number and identifier literals
//! - Arithmetic with standard precedence (`+ - * /`, unary minus, grouping)
//! - Assignment statements (`x = expr`)
//! - Function calls with optionally labeled arguments (`f(a, b: 2)`)
//!
//! ## Architecture
//!
//! The implementation is organized into several modules:
//! - `lexer`: Tokenization of source code
//! - `parser`: Parsing tokens into an Abstract Syntax Tree (AST)
//! - `error`: Error handling and diagnostics
//!
//! Data flow is strictly one-directional: source text -> lexer -> token
//! sequence -> parser -> AST. The parser never re-reads raw text and the
//! lexer knows nothing about the grammar above individual tokens.

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, LetterError, LetterResult, SourceLocation};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Argument, BinaryOp, Expr, Parser, Program, Stmt};

/// Version of the Letter crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a Letter program from source code
///
/// This is the main entry point for the crate. It performs lexical analysis
/// followed by parsing and returns the resulting AST.
///
/// # Arguments
///
/// * `source` - The source code to parse
/// * `filename` - Optional filename for error reporting
///
/// # Returns
///
/// Returns the parsed `Program`, or the first `LetterError` either phase
/// produced. Both phases fail fast; there are no partial results.
pub fn parse_source(source: &str, filename: Option<&str>) -> LetterResult<Program> {
    // Phase 1: Lexical Analysis
    let mut lexer = Lexer::new(source, filename);
    let tokens = lexer.tokenize()?;

    // Phase 2: Parsing
    Parser::new(tokens).parse()
}
