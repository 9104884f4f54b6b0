/// Text printed by the `help` command.
pub const HELP_MESSAGE: &str = "Available commands: help, credits, exit()\nAssign with `name = \
                                expression` or `name = \"string\"`; operators: + - * /";

/// Text printed by the `credits` command.
pub const CREDITS_MESSAGE: &str = "Ether Language v0.1. Code & architecture: the Ether authors.";

/// A built-in command reached through a reserved name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `help`
    Help,
    /// `credits`
    Credits,
}

impl Command {
    /// Returns the command bound to `name`, if any.
    ///
    /// # Example
    /// ```
    /// use ether::interpreter::evaluator::command::Command;
    ///
    /// assert_eq!(Command::from_name("help"), Some(Command::Help));
    /// assert_eq!(Command::from_name("Help"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "credits" => Some(Self::Credits),
            _ => None,
        }
    }

    /// The fixed message the command prints.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Help => HELP_MESSAGE,
            Self::Credits => CREDITS_MESSAGE,
        }
    }
}

/// Checks whether `name` is reserved for a command and therefore cannot be
/// assigned.
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    Command::from_name(name).is_some()
}
