use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::command::{Command, is_reserved_identifier},
        value::Value,
    },
    stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// What evaluating one statement produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A bare expression evaluated to a value.
    Value(Value),
    /// An assignment bound the named variable.
    Bound(String),
    /// A reserved command was invoked.
    Command(Command),
    /// The statement was empty.
    Nothing,
}

impl Outcome {
    /// Returns the text to echo for this outcome, if any.
    ///
    /// Integers print in decimal, strings print verbatim with their quotes and
    /// commands print their message. Assignments and empty lines are silent.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::{evaluator::core::Outcome, value::Value};
    ///
    /// assert_eq!(Outcome::Value(Value::Integer(14)).printable().as_deref(), Some("14"));
    /// assert_eq!(Outcome::Bound("x".into()).printable(), None);
    /// ```
    #[must_use]
    pub fn printable(&self) -> Option<String> {
        match self {
            Self::Value(Value::Integer(n)) => Some(n.to_string()),
            Self::Value(Value::Text(text)) if text.starts_with(['"', '\'']) => Some(text.clone()),
            Self::Command(command) => Some(command.message().to_string()),
            Self::Value(Value::Text(_)) | Self::Bound(_) | Self::Nothing => None,
        }
    }
}

impl Environment {
    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left before right. The environment is only
    /// read; nothing here can change a binding. Nesting depth is bounded by
    /// memory, not by the thread's stack.
    ///
    /// # Errors
    /// - `UndefinedSymbol` for a name that was never bound.
    /// - `CommandInExpression` for a reserved name used as an operand.
    /// - Any error from the arithmetic itself.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Number { value, .. } => Ok(Value::Integer(*value)),
            Expr::StringLiteral { text, .. } => Ok(Value::Text(text.clone())),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Negate { expr, line } => Self::eval_negate(&self.eval(expr)?, *line),
        })
    }

    /// Resolves a variable reference.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x".into(), Value::Integer(5));
    ///
    /// assert_eq!(env.eval_variable("x", 1), Ok(Value::Integer(5)));
    /// assert!(env.eval_variable("y", 1).is_err());
    /// ```
    pub fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        if is_reserved_identifier(name) {
            return Err(RuntimeError::CommandInExpression { name: name.to_string(),
                                                           line });
        }

        self.get_variable(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedSymbol { name: name.to_string(),
                                                           line })
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side first and binds the name
    /// only if that succeeded, so a failing statement never changes the
    /// environment. A bare reserved name runs its command instead of looking
    /// up a variable.
    ///
    /// # Parameters
    /// - `statement`: Statement to evaluate.
    ///
    /// # Returns
    /// The [`Outcome`] of the statement.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Outcome> {
        let outcome = match statement {
            Statement::Empty => Outcome::Nothing,
            Statement::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name.clone(), value);
                Outcome::Bound(name.clone())
            },
            Statement::Expression { expr, .. } => {
                if let Expr::Variable { name, .. } = expr
                   && let Some(command) = Command::from_name(name)
                {
                    Outcome::Command(command)
                } else {
                    Outcome::Value(self.eval(expr)?)
                }
            },
        };

        debug!(?outcome, "evaluated statement");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::BinaryOperator;

    fn var(name: &str) -> Expr {
        Expr::Variable { name: name.into(),
                         line: 1, }
    }

    #[test]
    fn failed_assignment_leaves_environment_untouched() {
        let mut env = Environment::new();
        env.set_variable("x".into(), Value::Integer(1));

        let statement = Statement::Assignment { name:  "x".into(),
                                                value: Expr::BinaryOp { left:  Box::new(Expr::Number { value: 1,
                                                                                                       line:  1, }),
                                                                        op:    BinaryOperator::Div,
                                                                        right: Box::new(Expr::Number { value: 0,
                                                                                                       line:  1, }),
                                                                        line:  1, },
                                                line:  1, };

        assert_eq!(env.eval_statement(&statement),
                   Err(RuntimeError::DivisionByZero { line: 1 }));
        assert_eq!(env.get_variable("x"), Some(&Value::Integer(1)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn assignment_reports_the_bound_name() {
        let mut env = Environment::new();
        let statement = Statement::Assignment { name:  "s".into(),
                                                value: Expr::StringLiteral { text: "\"hi\"".into(),
                                                                             line: 1, },
                                                line:  1, };

        assert_eq!(env.eval_statement(&statement), Ok(Outcome::Bound("s".into())));
        assert_eq!(env.get_variable("s"), Some(&Value::from("\"hi\"")));
    }

    #[test]
    fn bare_command_dispatches() {
        let mut env = Environment::new();
        let statement = Statement::Expression { expr: var("credits"),
                                                line: 1, };

        assert_eq!(env.eval_statement(&statement),
                   Ok(Outcome::Command(Command::Credits)));
    }

    #[test]
    fn command_inside_an_expression_has_no_value() {
        let env = Environment::new();
        let expr = Expr::Negate { expr: Box::new(var("help")),
                                  line: 1, };

        assert_eq!(env.eval(&expr),
                   Err(RuntimeError::CommandInExpression { name: "help".into(),
                                                           line: 1, }));
    }

    #[test]
    fn left_operand_fails_first() {
        let env = Environment::new();
        let expr = Expr::BinaryOp { left:  Box::new(var("a")),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(var("b")),
                                    line:  1, };

        assert_eq!(env.eval(&expr),
                   Err(RuntimeError::UndefinedSymbol { name: "a".into(),
                                                       line: 1, }));
    }

    #[test]
    fn empty_statement_produces_nothing() {
        let mut env = Environment::new();
        assert_eq!(env.eval_statement(&Statement::Empty), Ok(Outcome::Nothing));
        assert!(env.is_empty());
    }
}
