/// Core evaluation logic.
///
/// Contains the expression and statement evaluators and the [`core::Outcome`]
/// a statement produces.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements checked integer arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Reserved commands.
///
/// Defines the names that dispatch a built-in command instead of a variable
/// lookup, and the messages those commands print.
pub mod command;
