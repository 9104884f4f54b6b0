use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

impl Environment {
    /// Evaluates a binary arithmetic operation between two values.
    ///
    /// Both operands must be integers. Arithmetic is ordinary signed 64-bit
    /// arithmetic, checked for overflow. Division truncates toward zero, so
    /// `7 / 2` is `3` and `-7 / 2` is `-3`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `TypeError` if either operand is text.
    /// - `DivisionByZero` if `op` is `Div` and `right` is zero.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use ether::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, value::Value},
    /// };
    ///
    /// let left = Value::Integer(-7);
    /// let right = Value::Integer(2);
    ///
    /// let result = Environment::eval_binary(BinaryOperator::Div, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(-3));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        };

        let result = match op {
            Add => a.checked_add(*b),
            Sub => a.checked_sub(*b),
            Mul => a.checked_mul(*b),
            Div => {
                if *b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(*b)
            },
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}
