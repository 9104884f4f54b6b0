use logos::Logos;
use tracing::debug;

use crate::error::{LexError, LexErrorKind};

/// Represents a lexical token in the source input.
///
/// The enum covers the rules of both dialects. Tokens that only one dialect
/// accepts are filtered by [`Lexer`], so consumers never see them in the other
/// dialect.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, delimiters included: `"hi"` or `'hi'`.
    #[regex(r#""[^"\n]*""#, |lex| lex.slice().to_string())]
    #[regex(r"'[^'\n]*'", |lex| lex.slice().to_string())]
    Str(String),
    /// Identifier tokens; variable or command names such as `x` or `help`.
    #[regex(r"[a-zA-Z_\x{0400}-\x{0481}\x{048A}-\x{04FF}][a-zA-Z0-9_\x{0400}-\x{0481}\x{048A}-\x{04FF}]*",
            |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n]*", logos::skip)]
    Comment,
    /// Newlines only move the line counter.
    #[regex(r"(\r?\n)+", |lex| {
        lex.extras.line += lex.slice().matches('\n').count();
        lex.extras.line_start = lex.extras.base + lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Str(s) | Self::Identifier(s) => write!(f, "{s}"),
            Self::Comment => write!(f, "//"),
            Self::NewLine => writeln!(f),
            Self::Ignored => write!(f, " "),
            Self::Equals => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and where that line starts, for error
/// reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the current line in the whole source.
    pub line_start: usize,
    /// Byte offset in the whole source where this logos lexer began.
    pub base:       usize,
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns [`LexErrorKind::LiteralTooLarge`] when the digits do not fit in an
/// `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// The set of lexical rules in effect.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Dialect {
    /// ASCII identifiers, double-quoted strings, and `,` `;` as literals.
    #[default]
    Base,
    /// ASCII or Cyrillic identifiers, single- or double-quoted strings, no `,`
    /// or `;`.
    Extended,
}

impl Dialect {
    /// Returns how many leading bytes of `slice`, matched as `token`, this
    /// dialect accepts.
    ///
    /// Only identifiers can be accepted partially: in the base dialect an
    /// identifier stops at its first non-ASCII letter.
    fn accepted_len(self, token: &Token, slice: &str) -> usize {
        match (self, token) {
            (Self::Base, Token::Str(s)) if s.starts_with('\'') => 0,
            (Self::Base, Token::Identifier(name)) => {
                name.find(|c: char| !c.is_ascii()).unwrap_or(name.len())
            },
            (Self::Extended, Token::Comma | Token::Semicolon) => 0,
            _ => slice.len(),
        }
    }
}

/// Lazily tokenizes one input line.
///
/// Wraps the generated `logos` lexer and applies the active [`Dialect`].
/// Unrecognized input never stops the scan: the lexer yields an error for
/// exactly one character and resumes right after it.
pub struct Lexer<'src> {
    source:  &'src str,
    offset:  usize,
    inner:   logos::Lexer<'src, Token>,
    dialect: Dialect,
    /// A byte offset already converted to a column, with that column.
    column:  (usize, usize),
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`, numbering lines from `line`.
    #[must_use]
    pub fn new(source: &'src str, dialect: Dialect, line: usize) -> Self {
        Self { source,
               offset: 0,
               inner: Token::lexer_with_extras(source, LexerExtras { line, ..LexerExtras::default() }),
               dialect,
               column: (0, 1) }
    }

    fn restart_at(&mut self, position: usize) {
        let extras = LexerExtras { line:       self.inner.extras.line,
                                   line_start: self.inner.extras.line_start,
                                   base:       position, };
        self.offset = position;
        self.inner = Token::lexer_with_extras(&self.source[position..], extras);
    }

    /// Returns the 1-based column of byte offset `position`.
    ///
    /// Positions must not decrease between calls; only the text since the
    /// previous call is counted.
    fn column_at(&mut self, position: usize) -> usize {
        let line_start = self.inner.extras.line_start;
        let (mut from, mut column) = self.column;
        if from < line_start {
            (from, column) = (line_start, 1);
        }
        column += self.source[from..position].chars().count();
        self.column = (position, column);
        column
    }

    fn illegal_character(&mut self, start: usize, line: usize) -> LexError {
        let character = self.source[start..].chars()
                                            .next()
                                            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let column = self.column_at(start);

        self.restart_at(start + character.len_utf8());
        LexError::IllegalCharacter { character,
                                     line,
                                     column }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let start = self.offset + self.inner.span().start;
        let slice = self.inner.slice();
        let line = self.inner.extras.line;

        let item = match token {
            Ok(token) => {
                let accepted = self.dialect.accepted_len(&token, slice);
                if accepted == slice.len() {
                    Ok((token, line))
                } else if accepted == 0 {
                    Err(self.illegal_character(start, line))
                } else {
                    self.restart_at(start + accepted);
                    Ok((Token::Identifier(slice[..accepted].to_string()), line))
                }
            },
            Err(LexErrorKind::LiteralTooLarge) => {
                Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                line })
            },
            Err(LexErrorKind::IllegalCharacter) => Err(self.illegal_character(start, line)),
        };

        if let Err(e) = &item {
            debug!(error = %e, "skipping unrecognized input");
        }
        Some(item)
    }
}

/// Tokenizes `source` under `dialect`, numbering lines from `line`.
///
/// # Example
/// ```
/// use ether::interpreter::lexer::{Dialect, Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("x = 2 // two", Dialect::Base, 1).collect();
/// assert_eq!(tokens,
///            vec![Ok((Token::Identifier("x".into()), 1)),
///                 Ok((Token::Equals, 1)),
///                 Ok((Token::Integer(2), 1))]);
/// ```
#[must_use]
pub fn tokenize(source: &str, dialect: Dialect, line: usize) -> Lexer<'_> {
    Lexer::new(source, dialect, line)
}
