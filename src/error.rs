/// Lexical errors.
///
/// Raised while the lexer scans a line: characters that belong to no token of
/// the active dialect and integer literals that do not fit in an `i64`. These
/// are recoverable; the lexer reports them and keeps scanning.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the parser reduces a token
/// sequence to a statement. A parse error aborts the current line only.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined symbols, division by zero, type mismatches and overflow.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while running a line through the interpreter.
///
/// Every error carries a stable numeric code (see [`Error::code`]) so that
/// callers can match on the kind of failure without parsing message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer met input it could not classify.
    Lex(LexError),
    /// The token sequence did not match the grammar.
    Parse(ParseError),
    /// Evaluation of a well-formed statement failed.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the stable numeric code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Lex(e) => e.code(),
            Self::Parse(e) => e.code(),
            Self::Runtime(e) => e.code(),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
