use async_trait::async_trait;
use enum_dispatch::enum_dispatch;
use strum::{EnumIter, IntoEnumIterator};

use crate::{cmd::execution_plan::InputMode, prelude::*};

pub mod cd;
pub mod clr;
pub mod dir;
pub mod echo;
pub mod environ;
pub mod help;
pub mod pause;
pub mod quit;

/// What a built-in gets to see of the resolved plan.
///
/// Redirection has already been resolved; built-ins never look for operators
/// in `args`.
pub struct BuiltinContext<'a> {
    pub args: &'a [String],
    pub input: &'a InputMode,
    pub session: &'a mut Session,
}

/// The complete output of a built-in, written to the sink after it returns.
#[derive(Debug, Default, PartialEq)]
pub struct BuiltinOutput {
    pub stdout: Vec<u8>,
    pub flow: Flow,
}

impl BuiltinOutput {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Newline-terminated lines.
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stdout = Vec::new();
        for line in lines {
            stdout.extend_from_slice(line.as_ref().as_bytes());
            stdout.push(b'\n');
        }
        Self {
            stdout,
            flow: Flow::Continue,
        }
    }

    pub fn raw(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            flow: Flow::Continue,
        }
    }

    pub fn quit() -> Self {
        Self {
            stdout: Vec::new(),
            flow: Flow::Quit,
        }
    }
}

#[async_trait]
#[enum_dispatch(BuiltinCommands)]
pub trait BuiltinCommand {
    fn name(&self) -> &'static str;

    /// One-line description shown by `help <name>`.
    fn description(&self) -> &'static str;

    /// Whether `<` redirection means anything to this command.
    fn accepts_input(&self) -> bool {
        false
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput>;
}

#[enum_dispatch]
#[derive(EnumIter)]
pub enum BuiltinCommands {
    Dir(dir::Dir),
    Echo(echo::Echo),
    Quit(quit::Quit),
    Cd(cd::Cd),
    Environ(environ::Environ),
    Clr(clr::Clr),
    Pause(pause::Pause),
    Help(help::Help),
}

impl BuiltinCommands {
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|cmd| cmd.name() == name)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::iter().map(|cmd| cmd.name())
    }
}
