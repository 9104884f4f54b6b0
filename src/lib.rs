//! # ether
//!
//! Ether is a minimal interactive language written in Rust.
//! Each input line is tokenized, parsed into a statement under an
//! operator-precedence grammar, and evaluated against a variable environment
//! that persists from one line to the next.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent one
/// parsed line as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error carries a stable numeric code and the source line it refers
/// to, so callers can tell failures apart without matching on message text.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Integrates with the standard error traits.
pub mod error;
/// Orchestrates the core of code execution.
///
/// This module ties together lexing, parsing, evaluation, the variable
/// environment and runtime values.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Keeps each phase free of any console output.
pub mod interpreter;
/// The read-eval-print loop around a [`Session`].
pub mod repl;
/// Runs single lines through the whole pipeline.
///
/// A [`Session`] owns the environment for as long as the user keeps typing
/// and reports each line as a [`LineReport`].
pub mod session;
/// Grows the stack for deeply nested expressions.
pub mod stack;

pub use error::Error;
pub use session::{LineReport, Session};

use crate::interpreter::lexer::Dialect;

/// Returns the output of the last line that printed something.
///
/// This function runs every line in one fresh base-dialect session, in order,
/// and stops at the first line that reports any diagnostic, lexical ones
/// included.
///
/// # Errors
/// Returns the first error reported by any line.
///
/// # Examples
/// ```
/// use ether::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let res = get_result(&["x = 2 + 2", "x * 3"]);
/// assert_eq!(res.unwrap().as_deref(), Some("12"));
///
/// // Example with an intentional error (undefined variable).
/// let res = get_result(&["y = x + 1"]);
/// assert!(res.is_err());
/// ```
pub fn get_result(lines: &[&str]) -> Result<Option<String>, Error> {
    let mut session = Session::new(Dialect::Base);
    let mut result = None;

    for line in lines {
        let report = session.run_line(line);
        if let Some(e) = report.lex_errors.into_iter().next() {
            return Err(e.into());
        }
        if let Some(output) = report.result?.printable() {
            result = Some(output);
        }
    }

    Ok(result)
}
