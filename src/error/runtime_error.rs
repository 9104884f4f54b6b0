#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UndefinedSymbol {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand had a type the operator does not accept.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A reserved command name was used where a value is needed.
    CommandInExpression {
        /// The command name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the stable numeric code of this error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UndefinedSymbol { .. } => 1,
            Self::DivisionByZero { .. } => 2,
            Self::TypeError { .. } => 10,
            Self::Overflow { .. } => 11,
            Self::CommandInExpression { .. } => 12,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            Self::UndefinedSymbol { name, line } => {
                write!(f, "Error {code} on line {line}: Undefined symbol '{name}' found.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Error {code} on line {line}: Division by zero.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error {code} on line {line}: Type error: {details}.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error {code} on line {line}: Integer overflow while trying to compute result."),
            Self::CommandInExpression { name, line } => write!(f,
                                                               "Error {code} on line {line}: '{name}' is a command and has no value."),
        }
    }
}

impl std::error::Error for RuntimeError {}
