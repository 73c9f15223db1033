//! Lexer/Scanner implementation for the Letter language
//!
//! This module implements lexical analysis, converting source code into
//! tokens in a single left-to-right pass with no backtracking.

use super::token::{Token, TokenType};
use crate::error::{LetterError, LetterResult, SourceLocation};

/// Lexer for Letter source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code
    ///
    /// Fails on the first unrecognized character or malformed numeral; no
    /// partial token list is returned. The returned sequence always ends
    /// with exactly one EOF token.
    pub fn tokenize(&mut self) -> LetterResult<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }

        // Add EOF token
        self.tokens.push(Token::new(
            TokenType::Eof,
            String::new(),
            self.current_location(),
        ));

        Ok(self.tokens.clone())
    }

    /// Scan a single token
    fn scan_token(&mut self) -> LetterResult<()> {
        let c = self.advance();

        match c {
            // Whitespace (skip)
            ' ' | '\r' | '\t' => Ok(()),

            // Newline
            '\n' => {
                self.line += 1;
                self.column = 1;
                Ok(())
            }

            // Single-character tokens
            '=' => self.add_token(TokenType::Equal),
            '+' => self.add_token(TokenType::Plus),
            '-' => self.add_token(TokenType::Minus),
            '*' => self.add_token(TokenType::Star),
            '/' => self.add_token(TokenType::Slash),
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            ',' => self.add_token(TokenType::Comma),
            ':' => self.add_token(TokenType::Colon),

            // Number literals
            c if c.is_ascii_digit() => self.scan_number(),

            // Identifiers (Letter has no keywords)
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            // Unexpected character
            _ => Err(self.error(&format!("Unexpected character '{}'", c))),
        }
    }

    /// Scan a number literal
    ///
    /// A maximal run of digits, optionally followed by a single '.' and a
    /// mandatory run of digits. The lexeme keeps the raw text; the parser
    /// converts it to a numeric value later.
    fn scan_number(&mut self) -> LetterResult<()> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // Check for decimal point
        if self.peek() == '.' {
            if !self.peek_next().is_ascii_digit() {
                // Trailing '.' with no digit after it, reported at the '.'
                return Err(self.error_at_cursor("Malformed number: expected digit after '.'"));
            }
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.add_token(TokenType::Number)
    }

    /// Scan an identifier
    fn scan_identifier(&mut self) -> LetterResult<()> {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        self.add_token(TokenType::Ident)
    }

    /// Add a token to the token list
    fn add_token(&mut self, token_type: TokenType) -> LetterResult<()> {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        let location = SourceLocation::new(
            self.line,
            self.column - (self.current - self.start),
            self.filename.clone(),
        );
        self.tokens.push(Token::new(token_type, lexeme, location));
        Ok(())
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Get the current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }

    /// Create an error pointing at the first character of the current lexeme
    fn error(&self, message: &str) -> LetterError {
        let location = SourceLocation::new(
            self.line,
            self.column - (self.current - self.start),
            self.filename.clone(),
        );
        LetterError::lexer_error(message, location)
    }

    /// Create an error at the cursor, for faults past the lexeme start
    fn error_at_cursor(&self, message: &str) -> LetterError {
        LetterError::lexer_error(message, self.current_location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize_source(source: &str) -> LetterResult<Vec<Token>> {
        let mut lexer = Lexer::new(source, None);
        lexer.tokenize()
    }

    fn token_types(source: &str) -> Vec<TokenType> {
        tokenize_source(source)
            .unwrap()
            .iter()
            .map(|t| t.token_type)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize_source("").unwrap();
        assert_eq!(tokens.len(), 1); // Just EOF
        assert_eq!(tokens[0].token_type, TokenType::Eof);
        assert_eq!(tokens[0].location, SourceLocation::at(1, 1));
    }

    #[test]
    fn test_whitespace_only_source() {
        let tokens = tokenize_source("  \t \r ").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::Eof);
    }

    #[test]
    fn test_single_character_tokens() {
        let tokens = tokenize_source("=+-*/(),:").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Equal);
        assert_eq!(tokens[1].token_type, TokenType::Plus);
        assert_eq!(tokens[2].token_type, TokenType::Minus);
        assert_eq!(tokens[3].token_type, TokenType::Star);
        assert_eq!(tokens[4].token_type, TokenType::Slash);
        assert_eq!(tokens[5].token_type, TokenType::LeftParen);
        assert_eq!(tokens[6].token_type, TokenType::RightParen);
        assert_eq!(tokens[7].token_type, TokenType::Comma);
        assert_eq!(tokens[8].token_type, TokenType::Colon);
        assert_eq!(tokens[9].token_type, TokenType::Eof);
    }

    #[test]
    fn test_identifiers() {
        let tokens = tokenize_source("foo bar_baz _private myVar123").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Ident);
        assert_eq!(tokens[0].lexeme, "foo");
        assert_eq!(tokens[1].token_type, TokenType::Ident);
        assert_eq!(tokens[1].lexeme, "bar_baz");
        assert_eq!(tokens[2].token_type, TokenType::Ident);
        assert_eq!(tokens[2].lexeme, "_private");
        assert_eq!(tokens[3].token_type, TokenType::Ident);
        assert_eq!(tokens[3].lexeme, "myVar123");
    }

    #[test]
    fn test_no_keywords() {
        // Every name is an identifier, even ones that look reserved
        let tokens = tokenize_source("if let fn return").unwrap();
        for token in &tokens[..4] {
            assert_eq!(token.token_type, TokenType::Ident);
        }
    }

    #[test]
    fn test_integer_literals() {
        let tokens = tokenize_source("0 42 123456").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Number);
        assert_eq!(tokens[0].lexeme, "0");
        assert_eq!(tokens[1].token_type, TokenType::Number);
        assert_eq!(tokens[1].lexeme, "42");
        assert_eq!(tokens[2].token_type, TokenType::Number);
        assert_eq!(tokens[2].lexeme, "123456");
    }

    #[test]
    fn test_decimal_literals() {
        let tokens = tokenize_source("3.14 0.5 123.456").unwrap();
        assert_eq!(tokens[0].lexeme, "3.14");
        assert_eq!(tokens[1].lexeme, "0.5");
        assert_eq!(tokens[2].lexeme, "123.456");
        for token in &tokens[..3] {
            assert_eq!(token.token_type, TokenType::Number);
        }
    }

    #[test]
    fn test_assignment_statement() {
        let tokens = tokenize_source("x1 = 3.14").unwrap();
        assert_eq!(tokens[0].token_type, TokenType::Ident);
        assert_eq!(tokens[0].lexeme, "x1");
        assert_eq!(tokens[0].location, SourceLocation::at(1, 1));
        assert_eq!(tokens[1].token_type, TokenType::Equal);
        assert_eq!(tokens[1].location, SourceLocation::at(1, 4));
        assert_eq!(tokens[2].token_type, TokenType::Number);
        assert_eq!(tokens[2].lexeme, "3.14");
        assert_eq!(tokens[2].location, SourceLocation::at(1, 6));
        assert_eq!(tokens[3].token_type, TokenType::Eof);
        assert_eq!(tokens[3].location, SourceLocation::at(1, 10));
    }

    #[test]
    fn test_negative_number_is_two_tokens() {
        // Unary minus is a parser-level construct, not a lexical one
        let types = token_types("-3");
        assert_eq!(
            types,
            vec![TokenType::Minus, TokenType::Number, TokenType::Eof]
        );
    }

    #[test]
    fn test_call_with_labeled_argument() {
        let types = token_types("f(a, b: 2)");
        assert_eq!(
            types,
            vec![
                TokenType::Ident,
                TokenType::LeftParen,
                TokenType::Ident,
                TokenType::Comma,
                TokenType::Ident,
                TokenType::Colon,
                TokenType::Number,
                TokenType::RightParen,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_line_and_column_tracking() {
        let tokens = tokenize_source("x\n  y = 1").unwrap();
        assert_eq!(tokens[0].location, SourceLocation::at(1, 1));
        assert_eq!(tokens[1].location, SourceLocation::at(2, 3));
        assert_eq!(tokens[2].location, SourceLocation::at(2, 5));
        assert_eq!(tokens[3].location, SourceLocation::at(2, 7));
    }

    #[test]
    fn test_lexeme_concatenation_reproduces_input() {
        let source = "area = width * (height + 2.5)";
        let tokens = tokenize_source(source).unwrap();
        let joined: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(joined, stripped);
    }

    #[test]
    fn test_trailing_dot_is_an_error() {
        let result = tokenize_source("3.");
        let err = result.unwrap_err();
        assert!(matches!(err, LetterError::LexerError { .. }));
        assert_eq!(err.location(), &SourceLocation::at(1, 2));
        assert!(err.message().contains("digit after '.'"));
    }

    #[test]
    fn test_bare_dot_is_an_error() {
        let result = tokenize_source(".");
        let err = result.unwrap_err();
        assert!(matches!(err, LetterError::LexerError { .. }));
        assert_eq!(err.location(), &SourceLocation::at(1, 1));
    }

    #[test]
    fn test_unexpected_characters() {
        for c in ['@', '$', '!', ';', '{', '~', '?'] {
            let result = tokenize_source(&c.to_string());
            let err = result.unwrap_err();
            assert!(matches!(err, LetterError::LexerError { .. }));
            assert!(err.message().contains(c), "message should name '{}'", c);
            assert_eq!(err.location(), &SourceLocation::at(1, 1));
        }
    }

    #[test]
    fn test_unexpected_character_position_mid_line() {
        let result = tokenize_source("x = $");
        let err = result.unwrap_err();
        assert_eq!(err.location(), &SourceLocation::at(1, 5));
    }

    #[test]
    fn test_filename_in_locations() {
        let mut lexer = Lexer::new("x", Some("calc.lt"));
        let tokens = lexer.tokenize().unwrap();
        assert_eq!(tokens[0].location.filename.as_deref(), Some("calc.lt"));
    }
}
