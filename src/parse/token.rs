use std::fmt;

use logos::Logos;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default, Error)]
pub enum LexerError {
    #[default]
    #[error("unknown token")]
    UnknownToken,
}

/// A single whitespace-delimited token. Any Unicode whitespace separates tokens.
///
/// Operators are only recognized when they make up the whole token. Since the
/// lexer always takes the longest match, `file.txt>out` or `>out` lex as one
/// `Word`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"\p{White_Space}+", error = LexerError)]
pub enum Token<'a> {
    #[token("<")]
    Read,
    #[token(">")]
    Write,
    #[token(">>")]
    Append,
    #[token("&")]
    Background,

    #[regex(r"[^\p{White_Space}]+")]
    Word(&'a str),
}

impl<'a> Token<'a> {
    /// The literal text of the token as the user typed it.
    pub fn as_str(&self) -> &'a str {
        match self {
            Self::Read => "<",
            Self::Write => ">",
            Self::Append => ">>",
            Self::Background => "&",
            Self::Word(word) => word,
        }
    }

    pub fn is_redirection(&self) -> bool {
        matches!(self, Self::Read | Self::Write | Self::Append)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
