use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::{input, prelude::*};

#[derive(Default)]
pub struct Pause;

#[async_trait]
impl BuiltinCommand for Pause {
    fn name(&self) -> &'static str {
        "pause"
    }

    fn description(&self) -> &'static str {
        "pauses the shell until the enter key is pressed"
    }

    async fn execute(&self, _ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        input::wait_for_enter().await?;
        Ok(BuiltinOutput::empty())
    }
}
