use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{cmd::execution_plan::SyntaxError, parse::token::LexerError};

pub type ShellResult<T> = Result<T, ShellError>;

/// Recoverable errors. Each is reported inline and the read loop continues.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("failed to tokenize command: {0}")]
    Lexer(#[from] LexerError),
    #[error("No such command")]
    CommandNotFound(String),
    #[error("No such directory \"{0}\"")]
    DirectoryNotFound(String),
    #[error("No such file \"{}\"", .0.display())]
    FileNotFound(PathBuf),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("Input redirection is not supported for \"{0}\"")]
    UnsupportedInput(String),
    #[error("Cannot open \"{}\": {}", .path.display(), .source)]
    Redirect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Optional second line shown after the `Error:` line.
    pub fn usage(&self) -> Option<&str> {
        match self {
            Self::Syntax(err) => Some(err.usage()),
            _ => None,
        }
    }

    /// Errors that are absorbed without any output.
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
