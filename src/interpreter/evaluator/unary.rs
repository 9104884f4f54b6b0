use crate::{
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult, value::Value},
};

impl Environment {
    /// Negates an integer value.
    ///
    /// # Errors
    /// - `TypeError` for text values.
    /// - `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::{environment::Environment, value::Value};
    ///
    /// let v = Environment::eval_negate(&Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    /// ```
    pub fn eval_negate(value: &Value, line: usize) -> EvalResult<Value> {
        value.as_integer(line)?
             .checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { line })
    }
}
