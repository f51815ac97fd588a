//! Yokan is a small expression-oriented scripting language. It is
//! dynamically typed, lexically scoped, and has first-class
//! functions with proper closures. Yokan is a tree-walk interpreter
//! with a hand-written recursive descent parser.
//!
//! ## Scanning
//! The first step is scanning: converting a string of characters into
//! a stream of tokens. For example, `1 + 2` becomes
//! ```text
//! [Int("1"), Plus, Int("2"), EOF]
//! ```
//! The scanner is implemented in [`scanner`] as a pull-driven state
//! machine: each call to `next_token` returns the next token and
//! advances, with no buffering of the stream.
//!
//! ## Parsing
//! The second step is parsing: converting the token stream into an
//! abstract syntax tree. The parser in [`parser`] is a recursive
//! descent / precedence-climbing parser producing the closed
//! [`Expr`](ast::Expr) and [`Stmt`](ast::Stmt) unions defined in
//! [`ast`]. Unlike the scanner, the parser never aborts on a
//! recoverable error — it records a message and keeps going, so a
//! caller can report every syntax problem in one pass instead of one
//! at a time.
//!
//! ## Evaluating
//! The final step is evaluation: walking the AST against a lexically
//! scoped [`Environment`](environment::Environment). The evaluator in
//! [`interpreter`] never panics — every failure, from an unbound name
//! to a division by zero, surfaces as an error-tagged
//! [`Value`](object::Value) rather than unwinding the Rust stack.
//! Errors are absorbing: any sub-evaluation that yields one halts the
//! enclosing evaluation immediately.

pub mod ast;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod object;
pub mod parser;
pub mod scanner;
pub mod token;

use ast::Program;
use environment::EnvRef;
use object::Value;
use parser::Parser;
use scanner::Scanner;

/// Runs one chunk of source text against `env` and returns the result
/// plus any parser errors. This is the embedding contract the CLI
/// shell and the REPL both sit on top of (see `SPEC_FULL.md` §6):
/// scanning, parsing and evaluation are driven here as one pure call,
/// with no I/O of its own beyond whatever a built-in like `puts`
/// performs.
pub fn run(source: &str, env: &EnvRef) -> (Value, Vec<String>) {
    let scanner = Scanner::new(source);
    let mut parser = Parser::new(scanner);
    let program: Program = parser.parse_program();
    let errors = parser.errors().to_vec();

    if !errors.is_empty() {
        return (Value::StatementResult, errors);
    }

    (interpreter::eval_program(&program, env), errors)
}
