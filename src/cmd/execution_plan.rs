use std::{path::PathBuf, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::parse::{
    token::{LexerError, Token},
    tokenize,
};

/// The resolved form of one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionPlan {
    Execute(Invocation),
    Invalid(SyntaxError),
    NoOp,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: String,
    pub args: Vec<String>,
    pub input: InputMode,
    pub output: OutputMode,
    pub background: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputMode {
    #[default]
    Inherit,
    File(PathBuf),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum OutputMode {
    #[default]
    Inherit,
    Truncate(PathBuf),
    Append(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("No filename given")]
    MissingFilename { usage: String },
    #[error("No command given")]
    MissingCommand { usage: String },
}

impl SyntaxError {
    pub fn usage(&self) -> &str {
        match self {
            Self::MissingFilename { usage } | Self::MissingCommand { usage } => usage,
        }
    }
}

impl FromStr for ExecutionPlan {
    type Err = LexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        tokenize(s).map(|tokens| resolve(&tokens))
    }
}

/// Partitions a token sequence into an execution plan in one left-to-right scan.
///
/// A trailing `&` marks the plan as background. The first `<` and the first of
/// `>`/`>>` each take the next token as their path. Any later operator of a kind
/// already seen, and anything after a consumed path, is kept as a literal
/// argument.
pub fn resolve(tokens: &[Token<'_>]) -> ExecutionPlan {
    let (tokens, background) = match tokens.split_last() {
        Some((Token::Background, rest)) => (rest, true),
        _ => (tokens, false),
    };

    if tokens.is_empty() {
        return ExecutionPlan::NoOp;
    }

    let mut words = Vec::with_capacity(tokens.len());
    let mut input = InputMode::Inherit;
    let mut output = OutputMode::Inherit;

    let mut idx = 0;
    while idx < tokens.len() {
        let token = tokens[idx];
        let honored = match token {
            Token::Read => input == InputMode::Inherit,
            Token::Write | Token::Append => output == OutputMode::Inherit,
            _ => false,
        };

        if !honored {
            words.push(token.as_str().to_owned());
            idx += 1;
            continue;
        }

        let path = match tokens.get(idx + 1) {
            Some(next) if !next.is_redirection() => PathBuf::from(next.as_str()),
            _ => {
                return ExecutionPlan::Invalid(SyntaxError::MissingFilename {
                    usage: usage(&tokens[..=idx]),
                })
            }
        };

        match token {
            Token::Read => input = InputMode::File(path),
            Token::Write => output = OutputMode::Truncate(path),
            Token::Append => output = OutputMode::Append(path),
            _ => unreachable!("only redirections are honored"),
        }

        idx += 2;
    }

    let mut words = words.into_iter();
    let Some(command) = words.next() else {
        let op = tokens.iter().find(|t| t.is_redirection()).copied();
        return ExecutionPlan::Invalid(SyntaxError::MissingCommand {
            usage: format!("<command> {} <filename>", op.unwrap_or(Token::Write)),
        });
    };

    ExecutionPlan::Execute(Invocation {
        command,
        args: words.collect(),
        input,
        output,
        background,
    })
}

fn usage(typed: &[Token<'_>]) -> String {
    format!("{} <filename>", typed.iter().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(line: &str) -> ExecutionPlan {
        line.parse().unwrap()
    }

    fn invocation(line: &str) -> Invocation {
        match plan(line) {
            ExecutionPlan::Execute(inv) => inv,
            other => panic!("expected an invocation for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn empty_lines_are_noops() {
        assert_eq!(plan(""), ExecutionPlan::NoOp);
        assert_eq!(plan("   "), ExecutionPlan::NoOp);
        assert_eq!(plan("&"), ExecutionPlan::NoOp);
    }

    #[test]
    fn plain_command_keeps_every_token() {
        let inv = invocation("grep -r needle src");
        assert_eq!(inv.command, "grep");
        assert_eq!(inv.args, vec!["-r", "needle", "src"]);
        assert_eq!(inv.input, InputMode::Inherit);
        assert_eq!(inv.output, OutputMode::Inherit);
        assert!(!inv.background);
    }

    #[test]
    fn output_truncate() {
        let inv = invocation("echo a b > out.txt");
        assert_eq!(inv.command, "echo");
        assert_eq!(inv.args, vec!["a", "b"]);
        assert_eq!(inv.output, OutputMode::Truncate("out.txt".into()));
    }

    #[test]
    fn output_append() {
        let inv = invocation("environ >> env.txt");
        assert_eq!(inv.command, "environ");
        assert!(inv.args.is_empty());
        assert_eq!(inv.output, OutputMode::Append("env.txt".into()));
    }

    #[test]
    fn dangling_output_operator_is_invalid() {
        assert_eq!(
            plan("dir >"),
            ExecutionPlan::Invalid(SyntaxError::MissingFilename {
                usage: "dir > <filename>".into()
            })
        );
    }

    #[test]
    fn usage_keeps_everything_typed_so_far() {
        assert_eq!(
            plan("dir < list.txt >>"),
            ExecutionPlan::Invalid(SyntaxError::MissingFilename {
                usage: "dir < list.txt >> <filename>".into()
            })
        );
        assert_eq!(
            plan("dir <"),
            ExecutionPlan::Invalid(SyntaxError::MissingFilename {
                usage: "dir < <filename>".into()
            })
        );
    }

    #[test]
    fn operator_is_not_a_filename() {
        assert!(matches!(
            plan("echo hi > >> f"),
            ExecutionPlan::Invalid(SyntaxError::MissingFilename { .. })
        ));
    }

    #[test]
    fn trailing_ampersand_sets_background() {
        let inv = invocation("ls -l &");
        assert!(inv.background);
        assert_eq!(inv.command, "ls");
        assert_eq!(inv.args, vec!["-l"]);
        assert_eq!(inv.output, OutputMode::Inherit);
    }

    #[test]
    fn background_comes_after_redirection_target() {
        let inv = invocation("ls > out.txt &");
        assert!(inv.background);
        assert_eq!(inv.output, OutputMode::Truncate("out.txt".into()));

        // `&` is dropped before the scan, so the operator is left dangling
        assert!(matches!(
            plan("ls > &"),
            ExecutionPlan::Invalid(SyntaxError::MissingFilename { .. })
        ));
    }

    #[test]
    fn inner_ampersand_is_literal() {
        let inv = invocation("echo a & b");
        assert!(!inv.background);
        assert_eq!(inv.args, vec!["a", "&", "b"]);
    }

    #[test]
    fn first_output_operator_wins() {
        let inv = invocation("echo hi > first.txt >> second.txt");
        assert_eq!(inv.output, OutputMode::Truncate("first.txt".into()));
        assert_eq!(inv.args, vec!["hi", ">>", "second.txt"]);

        let inv = invocation("echo hi >> first.txt > second.txt");
        assert_eq!(inv.output, OutputMode::Append("first.txt".into()));
        assert_eq!(inv.args, vec!["hi", ">", "second.txt"]);
    }

    #[test]
    fn input_and_output_combine() {
        let inv = invocation("dir < listfile.txt > out.txt");
        assert_eq!(inv.command, "dir");
        assert!(inv.args.is_empty());
        assert_eq!(inv.input, InputMode::File("listfile.txt".into()));
        assert_eq!(inv.output, OutputMode::Truncate("out.txt".into()));
    }

    #[test]
    fn second_input_operator_is_literal() {
        let inv = invocation("dir < a.txt < b.txt");
        assert_eq!(inv.input, InputMode::File("a.txt".into()));
        assert_eq!(inv.args, vec!["<", "b.txt"]);
    }

    #[test]
    fn operators_without_command_are_invalid() {
        assert_eq!(
            plan("> out.txt"),
            ExecutionPlan::Invalid(SyntaxError::MissingCommand {
                usage: "<command> > <filename>".into()
            })
        );
    }
}
