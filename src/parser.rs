//! Token stream to AST: a hand-written recursive-descent / precedence
//! climbing parser. The parser never aborts on a recoverable error —
//! it records a message in `errors` and keeps going, same contract the
//! embedding shell expects (see `SPEC_FULL.md` §10.2).
//!
//! - Program    -> Statement* (stops at EOF or an unmatched `}`)
//! - Statement  -> Assign | ExpressionStatement
//! - Assign     -> IDENT "=" Expression
//! - Expression -> Equality
//! - Equality   -> Comparison ( ( "==" | "!=" ) Comparison )*
//! - Comparison -> Term ( ( "<" | "<=" | ">" | ">=" ) Term )*
//! - Term       -> Factor ( ( "+" | "-" ) Factor )*
//! - Factor     -> Prefix ( ( "*" | "/" ) Prefix )*
//! - Prefix     -> ( "+" | "-" ) Prefix | Call
//! - Call       -> Atom ( "(" Arguments? ")" )*
//! - Atom       -> INT | STRING | IDENT | Array | FunctionLiteral | "(" Expression ")"
//! - Array      -> "[" ( Expression ( "," Expression )* ","? )? "]"

use crate::ast::{Expr, Program, Stmt};
use crate::scanner::Scanner;
use crate::token::{Token, Type};

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

fn token_precedence(kind: Type) -> Precedence {
    match kind {
        Type::EqualEqual | Type::BangEqual => Precedence::Equals,
        Type::Less | Type::LessEqual | Type::Greater | Type::GreaterEqual => Precedence::LessGreater,
        Type::Plus | Type::Minus => Precedence::Sum,
        Type::Star | Type::Slash => Precedence::Product,
        Type::LeftParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

/// A four-token lookahead window: `tokens[0]` is current, `tokens[1..]`
/// are peeks. Required (and sufficient) to disambiguate a function
/// literal's `(params){body}` from a parenthesized expression.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    tokens: [Token; 4],
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(mut scanner: Scanner<'a>) -> Parser<'a> {
        let tokens = [
            scanner.next_token(),
            scanner.next_token(),
            scanner.next_token(),
            scanner.next_token(),
        ];
        Parser { scanner, tokens, errors: Vec::new() }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    fn cur(&self) -> &Token {
        &self.tokens[0]
    }

    fn cur_is(&self, kind: Type) -> bool {
        self.tokens[0].kind == kind
    }

    fn peek_is(&self, kind: Type) -> bool {
        self.tokens[1].kind == kind
    }

    fn peek_precedence(&self) -> Precedence {
        token_precedence(self.tokens[1].kind)
    }

    fn advance(&mut self) {
        self.tokens[0] = self.tokens[1].clone();
        self.tokens[1] = self.tokens[2].clone();
        self.tokens[2] = self.tokens[3].clone();
        self.tokens[3] = self.scanner.next_token();
    }

    fn expect_peek(&mut self, kind: Type) -> bool {
        if self.peek_is(kind) {
            self.advance();
            true
        } else {
            self.errors.push(format!(
                "expected next token to be '{kind}', got '{}' instead",
                self.tokens[1].kind
            ));
            false
        }
    }

    /// Parses a statement list, stopping at `EOF` or an unmatched `}`.
    /// This is both `Program` (called once, at top level) and a
    /// function literal's body (called after consuming its `{`).
    fn parse_statements(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        loop {
            while self.cur_is(Type::Newline) {
                self.advance();
            }
            if self.cur_is(Type::EOF) || self.cur_is(Type::RightBrace) {
                break;
            }
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }
        statements
    }

    pub fn parse_program(&mut self) -> Program {
        self.parse_statements()
    }

    fn parse_statement(&mut self) -> Option<Stmt> {
        if self.cur_is(Type::Ident) && self.peek_is(Type::Equal) {
            self.parse_assign_statement()
        } else {
            self.parse_expression_statement()
        }
    }

    fn parse_assign_statement(&mut self) -> Option<Stmt> {
        let name = self.cur().clone();
        self.advance(); // cur = '='
        self.advance(); // cur = start of value
        let value = self.parse_expression(Precedence::Lowest)?;
        Some(Stmt::Assign { name, value })
    }

    fn parse_expression_statement(&mut self) -> Option<Stmt> {
        let expr = self.parse_expression(Precedence::Lowest)?;
        Some(Stmt::ExpressionStatement(expr))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !self.peek_is(Type::Newline) && !self.peek_is(Type::EOF) && precedence < self.peek_precedence() {
            self.advance(); // cur = the operator
            left = if self.cur_is(Type::LeftParen) {
                self.parse_call_expression(left)?
            } else {
                self.parse_infix_expression(left)?
            };
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.cur().kind {
            Type::Int => self.parse_integer_literal(),
            Type::String => Some(Expr::StringLiteral(self.cur().literal.clone())),
            Type::Ident => Some(Expr::Identifier(self.cur().clone())),
            Type::Minus | Type::Plus => self.parse_prefix_expression(),
            Type::LeftBracket => self.parse_array_literal(),
            Type::LeftParen => self.parse_left_paren_expression(),
            other => {
                self.errors.push(format!("no prefix parse function for '{other}' found"));
                None
            }
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expr> {
        let literal = self.cur().literal.clone();
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral(value)),
            Err(_) => {
                self.errors.push(format!("could not parse {literal:?} as integer"));
                None
            }
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = self.cur().clone();
        self.advance(); // cur = operand start
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { operator, right: Box::new(right) })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = self.cur().clone();
        let precedence = token_precedence(operator.kind);
        self.advance(); // cur = right operand start
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix { left: Box::new(left), operator, right: Box::new(right) })
    }

    fn parse_call_expression(&mut self, callee: Expr) -> Option<Expr> {
        self.advance(); // past '('
        let arguments = self.parse_expression_list(Type::RightParen)?;
        Some(Expr::FunctionCalling { callee: Box::new(callee), arguments })
    }

    fn parse_array_literal(&mut self) -> Option<Expr> {
        self.advance(); // past '['
        let elements = self.parse_expression_list(Type::RightBracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// Parses a comma-separated expression list up to (and including)
    /// `end`, trailing comma permitted. Assumes `cur` is already
    /// positioned on the first element or on `end` itself.
    fn parse_expression_list(&mut self, end: Type) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.cur_is(end) {
            return Some(list);
        }

        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(Type::Comma) {
            self.advance(); // cur = ','
            self.advance(); // cur = next element, or `end` (trailing comma)
            if self.cur_is(end) {
                return Some(list);
            }
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }
        Some(list)
    }

    /// `(` begins a function literal iff the lookahead matches one of
    /// three patterns; otherwise it's a parenthesized expression.
    fn looks_like_function_literal(&self) -> bool {
        match (self.tokens[1].kind, self.tokens[2].kind) {
            (Type::RightParen, Type::LeftBrace) => true, // ( ) {
            (Type::Ident, Type::RightParen) => self.tokens[3].kind == Type::LeftBrace, // ( IDENT ) {
            (Type::Ident, Type::Comma) => true, // ( IDENT ,
            _ => false,
        }
    }

    fn parse_left_paren_expression(&mut self) -> Option<Expr> {
        if self.looks_like_function_literal() {
            self.parse_function_literal()
        } else {
            self.parse_grouped_expression()
        }
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance(); // past '('
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(Type::RightParen) {
            return None;
        }
        Some(expr)
    }

    fn parse_function_literal(&mut self) -> Option<Expr> {
        self.advance(); // past '('

        let mut params = Vec::new();
        if !self.cur_is(Type::RightParen) {
            params.push(self.cur().clone());
            while self.peek_is(Type::Comma) {
                self.advance(); // cur = ','
                self.advance(); // cur = next param
                params.push(self.cur().clone());
            }
            if !self.expect_peek(Type::RightParen) {
                return None;
            }
        }

        if !self.expect_peek(Type::LeftBrace) {
            return None;
        }
        self.advance(); // past '{'

        let body = self.parse_statements();
        Some(Expr::FunctionLiteral { params, body })
    }
}
