/// The raw failure reported by the generated lexer.
///
/// This is the error type of the `logos` token enum. It carries no position;
/// [`crate::interpreter::lexer::Lexer`] turns it into a [`LexError`] once it
/// knows where the failure happened.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// No rule matched at the current position.
    #[default]
    IllegalCharacter,
    /// A run of digits does not fit in a 64-bit signed integer.
    LiteralTooLarge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A character that starts no token in the active dialect.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// One-based column of the character within its line.
        column:    usize,
    },
    /// An integer literal that does not fit in an `i64`.
    LiteralTooLarge {
        /// The digits as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl LexError {
    /// Returns the stable numeric code of this error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::IllegalCharacter { .. } => 8,
            Self::LiteralTooLarge { .. } => 9,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.code();
        match self {
            Self::IllegalCharacter { character,
                                     line,
                                     column, } => write!(f,
                                                         "Error {code} on line {line}: Illegal character '{character}' at column {column}."),
            Self::LiteralTooLarge { literal, line } => write!(f,
                                                              "Error {code} on line {line}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for LexError {}
