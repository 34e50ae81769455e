use logos::Logos;

use self::token::{LexerError, Token};

pub mod token;

/// Splits a raw input line into whitespace-separated tokens.
///
/// There is no quoting, escaping or comment syntax.
pub fn tokenize(line: &str) -> Result<Vec<Token<'_>>, LexerError> {
    Token::lexer(line).collect()
}
