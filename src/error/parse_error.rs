#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    UnexpectedToken {
        /// The token encountered, as written in the source.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the line while an operand was still expected.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a complete statement.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal used anywhere but as the whole right-hand side of an
    /// assignment.
    StringOutsideAssignment {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to assign to a reserved command name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns the stable numeric code of this error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::UnexpectedToken { .. } => 3,
            Self::UnexpectedEndOfInput { .. } => 4,
            Self::UnexpectedTrailingTokens { .. } => 5,
            Self::StringOutsideAssignment { .. } => 6,
            Self::IdentifierReserved { .. } => 7,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error {code} on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error {code} on line {line}: Unexpected end of input.")
            },

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error {code} on line {line}: Extra tokens after statement. Check your input: {token}"),

            Self::StringOutsideAssignment { line } => write!(f,
                                                             "Error {code} on line {line}: Strings can only be assigned to a variable. Example: s = \"hello\""),

            Self::IdentifierReserved { name, line } => {
                write!(f, "Error {code} on line {line}: Identifier {name} is reserved.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
