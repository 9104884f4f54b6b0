use tracing::debug;

use crate::{
    error::{Error, LexError},
    interpreter::{
        environment::Environment,
        evaluator::core::Outcome,
        lexer::{Dialect, tokenize},
        parser::statement::parse_line,
    },
};

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    /// Characters the lexer skipped. They do not stop the line.
    pub lex_errors: Vec<LexError>,
    /// The statement outcome, or the parse or runtime error that aborted it.
    pub result:     Result<Outcome, Error>,
}

impl LineReport {
    /// The text to echo for this line, if any.
    #[must_use]
    pub fn output(&self) -> Option<String> {
        self.result.as_ref().ok().and_then(Outcome::printable)
    }

    /// All diagnostics for this line, lexical ones first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<String> {
        self.lex_errors
            .iter()
            .map(ToString::to_string)
            .chain(self.result.as_ref().err().map(ToString::to_string))
            .collect()
    }

    /// `true` if the line ran without any diagnostic.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.lex_errors.is_empty() && self.result.is_ok()
    }
}

/// An interactive session: one environment, one dialect and a running line
/// count used for diagnostics.
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
    dialect:     Dialect,
    line:        usize,
}

impl Session {
    /// Creates a session with an empty environment.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self { environment: Environment::new(),
               dialect,
               line: 0 }
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Runs one line through the lexer, parser and evaluator.
    ///
    /// Lexical errors are collected and the remaining tokens are still parsed.
    /// A parse or runtime error aborts the line and leaves the environment as
    /// it was.
    ///
    /// # Example
    /// ```
    /// use ether::{Session, interpreter::lexer::Dialect};
    ///
    /// let mut session = Session::new(Dialect::Base);
    /// assert_eq!(session.run_line("x = 2 + 3 * 4").output(), None);
    /// assert_eq!(session.run_line("x").output().as_deref(), Some("14"));
    /// ```
    pub fn run_line(&mut self, text: &str) -> LineReport {
        self.line += 1;

        let mut tokens = Vec::new();
        let mut lex_errors = Vec::new();
        for item in tokenize(text, self.dialect, self.line) {
            match item {
                Ok(token) => tokens.push(token),
                Err(e) => lex_errors.push(e),
            }
        }
        debug!(line = self.line, ?tokens, "tokenized line");

        let result = parse_line(&tokens).map_err(Error::from)
                                        .and_then(|statement| {
                                            debug!(kind = statement.kind(), "parsed statement");
                                            self.environment
                                                .eval_statement(&statement)
                                                .map_err(Error::from)
                                        });

        LineReport { lex_errors, result }
    }
}
