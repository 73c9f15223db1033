//! Diagnostic formatting for better error messages
//!
//! This module provides utilities for formatting lexer and parser errors
//! with source code context.

use super::{LetterError, SourceLocation};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic {
    error: LetterError,
    source: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic from an error
    pub fn new(error: LetterError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: LetterError, source: &str) -> Self {
        Self {
            error,
            source: Some(source.to_string()),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(self.error.message());
        output.push('\n');

        // Location and source context
        let location = self.error.location();
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        if let Some(ref source) = self.source {
            output.push_str(&self.format_source_context(source, location));
        }

        output
    }

    /// Format the offending source line with a caret under the error column
    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();

        let line = match source.lines().nth(location.line.wrapping_sub(1)) {
            Some(line) => line,
            None => return output,
        };

        let line_num = location.line.to_string();

        output.push_str(&format!("  {} {}\n", line_num.blue().bold(), line));

        // Caret under the error column
        let indicator_padding = " ".repeat(line_num.len() + 2 + location.column);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        output
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
