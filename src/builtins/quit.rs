use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

#[derive(Default)]
pub struct Quit;

#[async_trait]
impl BuiltinCommand for Quit {
    fn name(&self) -> &'static str {
        "quit"
    }

    fn description(&self) -> &'static str {
        "quits the shell"
    }

    async fn execute(&self, _ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        Ok(BuiltinOutput::quit())
    }
}
