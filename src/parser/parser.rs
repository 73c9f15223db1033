//! Parser implementation
//!
//! This module implements the recursive descent parser for the Letter
//! language. Operator precedence falls out of the rule structure
//! (expression -> term -> unary -> primary) rather than a precedence table.

use super::ast::*;
use crate::error::{LetterError, LetterResult, SourceLocation};
use crate::lexer::{Token, TokenType};

/// Parser for Letter token sequences
///
/// Consumes tokens left-to-right with one token of lookahead (two at the
/// statement boundary, for assignment disambiguation) and no backtracking.
/// The first grammar mismatch aborts the parse; there is no error recovery.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    /// Create a new parser from tokens
    ///
    /// The token sequence must end with an EOF token, as produced by
    /// `Lexer::tokenize`.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse tokens into a program
    pub fn parse(&mut self) -> LetterResult<Program> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        Ok(Program { statements })
    }

    // ===== Statements =====

    fn statement(&mut self) -> LetterResult<Stmt> {
        // An identifier immediately followed by '=' commits to assignment;
        // otherwise the identifier starts an expression. One token of
        // lookahead past the identifier, never more.
        if self.check(TokenType::Ident) && self.peek_next().token_type == TokenType::Equal {
            self.assignment()
        } else {
            self.expression_statement()
        }
    }

    fn assignment(&mut self) -> LetterResult<Stmt> {
        let target_token = self.advance();
        let target = target_token.lexeme.clone();
        let location = target_token.location.clone();

        self.consume(TokenType::Equal, "Expected '=' after assignment target")?;

        // Assignment is not an expression: the value is parsed as a plain
        // expression, so `a = b = 1` fails at the second '='.
        let value = self.expression()?;

        Ok(Stmt::Assignment {
            target,
            value,
            location,
        })
    }

    fn expression_statement(&mut self) -> LetterResult<Stmt> {
        let expr = self.expression()?;
        let location = expr.location().clone();
        Ok(Stmt::Expression { expr, location })
    }

    // ===== Expressions =====

    fn expression(&mut self) -> LetterResult<Expr> {
        let mut expr = self.term()?;

        while self.match_tokens(&[TokenType::Plus, TokenType::Minus]) {
            let location = self.previous().location.clone();
            let operator = match self.previous().token_type {
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            };
            let right = Box::new(self.term()?);
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right,
                location,
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> LetterResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_tokens(&[TokenType::Star, TokenType::Slash]) {
            let location = self.previous().location.clone();
            let operator = match self.previous().token_type {
                TokenType::Star => BinaryOp::Multiply,
                TokenType::Slash => BinaryOp::Divide,
                _ => unreachable!(),
            };
            let right = Box::new(self.unary()?);
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right,
                location,
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> LetterResult<Expr> {
        if self.match_token(TokenType::Minus) {
            let location = self.previous().location.clone();
            // Right-recursive, so `--x` is legal
            let operand = Box::new(self.unary()?);
            return Ok(Expr::UnaryMinus { operand, location });
        }

        self.primary()
    }

    fn primary(&mut self) -> LetterResult<Expr> {
        // Number literal; the lexeme is converted to a value here
        if self.check(TokenType::Number) {
            let token = self.advance();
            let lexeme = token.lexeme.clone();
            let location = token.location.clone();
            let value = lexeme.parse::<f64>().map_err(|_| {
                LetterError::parse_error(
                    format!("Invalid number literal '{}'", lexeme),
                    location.clone(),
                )
            })?;
            return Ok(Expr::Number { value, location });
        }

        // Bare identifier or call
        if self.check(TokenType::Ident) {
            let token = self.advance();
            let name = token.lexeme.clone();
            let location = token.location.clone();

            if self.match_token(TokenType::LeftParen) {
                return self.finish_call(name, location);
            }

            return Ok(Expr::Variable { name, location });
        }

        // Parenthesized expression
        if self.match_token(TokenType::LeftParen) {
            let location = self.previous().location.clone();
            let inner = Box::new(self.expression()?);
            self.consume(TokenType::RightParen, "Expected ')' after expression")?;
            return Ok(Expr::Grouping { inner, location });
        }

        Err(self.error_at_peek("Expected expression"))
    }

    fn finish_call(&mut self, callee: String, location: SourceLocation) -> LetterResult<Expr> {
        let mut arguments = Vec::new();

        if !self.check(TokenType::RightParen) {
            loop {
                arguments.push(self.argument()?);
                if !self.match_token(TokenType::Comma) {
                    break;
                }
            }
        }

        self.consume(TokenType::RightParen, "Expected ')' after arguments")?;

        Ok(Expr::Call {
            callee,
            arguments,
            location,
        })
    }

    fn argument(&mut self) -> LetterResult<Argument> {
        // An identifier immediately followed by ':' is an argument label;
        // otherwise the identifier starts the value expression
        let label = if self.check(TokenType::Ident)
            && self.peek_next().token_type == TokenType::Colon
        {
            let name = self.advance().lexeme.clone();
            self.advance(); // consume ':'
            Some(name)
        } else {
            None
        };

        let value = self.expression()?;

        Ok(Argument { label, value })
    }

    // ===== Helper Methods =====

    fn match_token(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_tokens(&mut self, types: &[TokenType]) -> bool {
        for t in types {
            if self.check(*t) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn check(&self, token_type: TokenType) -> bool {
        self.peek().token_type == token_type
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::Eof)
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn peek_next(&self) -> &Token {
        if self.current + 1 < self.tokens.len() {
            &self.tokens[self.current + 1]
        } else {
            // The EOF token is always last
            &self.tokens[self.tokens.len() - 1]
        }
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn consume(&mut self, token_type: TokenType, expected: &str) -> LetterResult<&Token> {
        if self.check(token_type) {
            Ok(self.advance())
        } else {
            Err(self.error_at_peek(expected))
        }
    }

    /// Create a parse error describing what was expected and the token found
    fn error_at_peek(&self, expected: &str) -> LetterError {
        let found = self.peek();
        LetterError::parse_error(
            format!("{}, found {}", expected, found),
            found.location.clone(),
        )
    }
}

// Helper method for Expr to get location
impl Expr {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::Number { location, .. }
            | Expr::Variable { location, .. }
            | Expr::Binary { location, .. }
            | Expr::UnaryMinus { location, .. }
            | Expr::Call { location, .. }
            | Expr::Grouping { location, .. } => location,
        }
    }
}
