use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::Value;

/// The variables bound so far in a session.
///
/// Names are case-sensitive and unique; binding a name again replaces the
/// previous value. The environment lives as long as the session that owns it
/// and is only ever touched by one statement at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    ///
    /// Returns `None` if the name was never bound; the caller decides whether
    /// that is an error.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x".into(), Value::Integer(5));
    ///
    /// assert_eq!(env.get_variable("x"), Some(&Value::Integer(5)));
    /// assert_eq!(env.get_variable("X"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, returning the value it replaced.
    pub fn set_variable(&mut self, name: String, value: Value) -> Option<Value> {
        trace!(%name, %value, "binding variable");
        self.variables.insert(name, value)
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// `true` if nothing has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
