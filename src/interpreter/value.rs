use crate::error::RuntimeError;

/// Represents a runtime value in the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A string, stored with the quotes it was written with.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Human readable name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
        }
    }

    /// Returns the integer inside the value.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for text values.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).as_integer(1), Ok(3));
    /// assert!(Value::from("\"x\"").as_integer(1).is_err());
    /// ```
    pub fn as_integer(&self, line: usize) -> Result<i64, RuntimeError> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Text(_) => {
                Err(RuntimeError::TypeError { details: format!("expected integer, found {}",
                                                               self.type_name()),
                                              line })
            },
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
