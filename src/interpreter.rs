/// The environment module holds variable bindings between statements.
///
/// A single [`environment::Environment`] is created per session and passed by
/// reference into every evaluation. Lookups return an `Option`, leaving the
/// decision of what a missing name means to the evaluator.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks a parsed statement, computes integer arithmetic, reads
/// and writes variables, and dispatches the reserved commands.
///
/// # Responsibilities
/// - Evaluates AST nodes, left operand before right.
/// - Binds variables only after the right-hand side evaluated successfully.
/// - Reports runtime errors such as division by zero or undefined symbols.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of text and produces tokens for numbers, strings,
/// identifiers and single-character operators, skipping whitespace and
/// comments.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Applies the rules of the selected dialect.
/// - Reports illegal characters one at a time and keeps scanning.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser resolves the statement form (empty, assignment or expression)
/// and parses expressions by precedence climbing.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
pub mod value;
