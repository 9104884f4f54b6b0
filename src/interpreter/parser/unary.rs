use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a unary expression.
///
/// Unary minus is right-associative and binds tighter than any binary
/// operator, so `-2 * 3` is `(-2) * 3` and `--2` is `-(-2)`.
///
/// A run of minus signs is read in one pass and folded into nested
/// [`Expr::Negate`] nodes, innermost last.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, preceding_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut minus_lines = Vec::new();
    let mut preceding_line = preceding_line;
    while let Some((Token::Minus, line)) = tokens.peek() {
        preceding_line = *line;
        minus_lines.push(*line);
        tokens.next();
    }

    let primary = parse_primary(tokens, preceding_line)?;
    Ok(minus_lines.into_iter()
                  .rev()
                  .fold(primary, |expr, line| Expr::Negate { expr: Box::new(expr),
                                                             line }))
}

/// Parses a primary (atomic) expression: an integer literal or a name.
///
/// Strings are rejected here because they are only legal as the whole
/// right-hand side of an assignment, which the statement parser handles before
/// reaching the expression grammar. Parentheses are tokens of the language but
/// not part of the grammar, so they are rejected too.
///
/// # Errors
/// - `StringOutsideAssignment` for a string literal.
/// - `UnexpectedToken` for any other non-operand token.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, preceding_line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(value), line)) => Ok(Expr::Number { value: *value,
                                                                 line:  *line, }),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        Some((Token::Str(_), line)) => Err(ParseError::StringOutsideAssignment { line: *line }),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: preceding_line }),
    }
}
