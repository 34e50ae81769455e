use async_trait::async_trait;
use termion::{clear, cursor::Goto};

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

#[derive(Default)]
pub struct Clr;

#[async_trait]
impl BuiltinCommand for Clr {
    fn name(&self) -> &'static str {
        "clr"
    }

    fn description(&self) -> &'static str {
        "clears the terminal"
    }

    async fn execute(&self, _ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        Ok(BuiltinOutput::raw(format!("{}{}", clear::All, Goto(1, 1))))
    }
}
