use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a binary expression by precedence climbing.
///
/// Parses one unary operand, then keeps folding operators whose binding power
/// is at least `min_precedence`. The right operand of each operator is parsed
/// with a strictly higher minimum, which makes every level left-associative:
/// `8 - 4 - 2` parses as `(8 - 4) - 2`, and `2 + 3 * 4` as `2 + (3 * 4)`.
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `min_precedence`: Lowest binding power this call may consume.
/// - `preceding_line`: Line reported if the input ends before an operand.
///
/// # Returns
/// An `Expr::BinaryOp` tree, or the bare operand if no operator follows.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           preceding_line: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_unary(tokens, preceding_line)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && op.precedence() >= min_precedence
    {
        let line = *line;
        tokens.next(); // consume operator

        let right = parse_binary(tokens, op.precedence() + 1, line)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// # Example
/// ```
/// use ether::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
