use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        evaluator::command::is_reserved_identifier,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the tokens of one input line into a statement.
///
/// An empty token sequence is the empty statement. Otherwise exactly one
/// statement must consume every token; anything left over is reported as
/// `UnexpectedTrailingTokens`.
///
/// # Parameters
/// - `tokens`: The `(Token, line)` pairs of the line.
///
/// # Example
/// ```
/// use ether::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::Token, parser::statement::parse_line},
/// };
///
/// let tokens = [(Token::Identifier("x".into()), 1),
///               (Token::Equals, 1),
///               (Token::Integer(5), 1)];
/// assert_eq!(parse_line(&tokens),
///            Ok(Statement::Assignment { name:  "x".into(),
///                                       value: Expr::Number { value: 5, line: 1 },
///                                       line:  1, }));
/// assert_eq!(parse_line(&[]), Ok(Statement::Empty));
/// ```
pub fn parse_line(tokens: &[(Token, usize)]) -> ParseResult<Statement> {
    let mut iter = tokens.iter().peekable();
    let statement = parse_statement(&mut iter)?;

    match iter.next() {
        None => Ok(statement),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: tok.to_string(),
                                                                        line:  *line, }),
    }
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - nothing at all,
/// - an assignment,
/// - an expression used as a statement.
///
/// Assignment is tried first; if the line does not start with `name =`, the
/// input is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some(&&(_, line)) = tokens.peek() else {
        return Ok(Statement::Empty);
    };

    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens, line)?;
    Ok(Statement::Expression { expr, line })
}

/// Parses an assignment statement.
///
/// Supported forms:
///
/// - `<identifier> = <expression>`
/// - `<identifier> = <string>`
///
/// The function looks one token past the identifier; if it is not `=`, the
/// function returns `Ok(None)` and does not consume tokens. A string is only
/// taken as the right-hand side when it comes first; any tokens after it are
/// left for the caller to reject.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - the right-hand side is missing or malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Identifier(name), _)) = tokens.peek().copied() else {
        return Ok(None);
    };

    let mut lookahead = tokens.clone();
    lookahead.next();
    let Some(&(Token::Equals, line)) = lookahead.next() else {
        return Ok(None);
    };

    if is_reserved_identifier(name) {
        return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                    line });
    }
    tokens.next();
    tokens.next();

    let value = if let Some((Token::Str(text), string_line)) = tokens.peek().copied() {
        tokens.next();
        Expr::StringLiteral { text: text.clone(),
                              line: *string_line, }
    } else {
        parse_expression(tokens, line)?
    };

    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    line }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::BinaryOperator,
        interpreter::lexer::{Dialect, tokenize},
    };

    fn parse(source: &str) -> ParseResult<Statement> {
        let tokens: Vec<_> = tokenize(source, Dialect::Base, 1).filter_map(Result::ok)
                                                              .collect();
        parse_line(&tokens)
    }

    fn num(value: i64) -> Box<Expr> {
        Box::new(Expr::Number { value, line: 1 })
    }

    fn expression(source: &str) -> Expr {
        match parse(source) {
            Ok(Statement::Expression { expr, .. }) => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(expression("2+3*4"),
                   Expr::BinaryOp { left:  num(2),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::BinaryOp { left:  num(3),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: num(4),
                                                                     line:  1, }),
                                    line:  1, });
    }

    #[test]
    fn operators_are_left_associative() {
        assert_eq!(expression("8-4-2"),
                   Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  num(8),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: num(4),
                                                                     line:  1, }),
                                    op:    BinaryOperator::Sub,
                                    right: num(2),
                                    line:  1, });
    }

    #[test]
    fn unary_minus_binds_tighter_than_multiplication() {
        assert_eq!(expression("-2*3"),
                   Expr::BinaryOp { left:  Box::new(Expr::Negate { expr: num(2),
                                                                   line: 1, }),
                                    op:    BinaryOperator::Mul,
                                    right: num(3),
                                    line:  1, });
        assert_eq!(expression("--2"),
                   Expr::Negate { expr: Box::new(Expr::Negate { expr: num(2),
                                                                line: 1, }),
                                  line: 1, });
    }

    #[test]
    fn long_minus_runs_nest_without_recursion() {
        let depth = 200_000;
        let Ok(Statement::Expression { expr, .. }) = parse(&format!("{}1", "-".repeat(depth))) else {
            panic!("expected an expression statement");
        };

        let mut negations = 0;
        let mut node = &expr;
        while let Expr::Negate { expr, .. } = node {
            negations += 1;
            node = &**expr;
        }
        assert_eq!(negations, depth);
        assert_eq!(node, &Expr::Number { value: 1, line: 1 });

        assert_eq!(parse(&"-".repeat(depth)),
                   Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn string_assignment() {
        assert_eq!(parse(r#"s = "hi""#),
                   Ok(Statement::Assignment { name:  "s".into(),
                                              value: Expr::StringLiteral { text: "\"hi\"".into(),
                                                                           line: 1, },
                                              line:  1, }));
    }

    #[test]
    fn empty_and_comment_only_lines() {
        assert_eq!(parse(""), Ok(Statement::Empty));
        assert_eq!(parse("   // just a note"), Ok(Statement::Empty));
    }

    #[test]
    fn malformed_lines() {
        assert_eq!(parse("(2+3)"),
                   Err(ParseError::UnexpectedToken { token: "(".into(),
                                                     line:  1, }));
        assert_eq!(parse("2 +"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("x ="), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token: "2".into(),
                                                              line:  1, }));
        assert_eq!(parse(r#"s = "a" + 1"#),
                   Err(ParseError::UnexpectedTrailingTokens { token: "+".into(),
                                                              line:  1, }));
        assert_eq!(parse(r#""hi""#), Err(ParseError::StringOutsideAssignment { line: 1 }));
        assert_eq!(parse("x = 1, 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token: ",".into(),
                                                              line:  1, }));
    }

    #[test]
    fn reserved_names_cannot_be_assigned() {
        assert_eq!(parse("help = 5"),
                   Err(ParseError::IdentifierReserved { name: "help".into(),
                                                        line: 1, }));
        assert_eq!(parse("credits = \"me\""),
                   Err(ParseError::IdentifierReserved { name: "credits".into(),
                                                        line: 1, }));
    }
}
