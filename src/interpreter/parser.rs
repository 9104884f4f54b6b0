/// Core parsing entry points.
///
/// Declares the parse result type and the expression entry point.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over the arithmetic operators.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles unary minus and the atoms of the grammar: numbers and names.
pub mod unary;

/// Statement parsing.
///
/// Resolves a whole line into an empty statement, an assignment or a bare
/// expression, and rejects anything left over.
pub mod statement;
