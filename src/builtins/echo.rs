use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

#[derive(Default)]
pub struct Echo;

#[async_trait]
impl BuiltinCommand for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn description(&self) -> &'static str {
        "returns a concatenated string of the arguments given"
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        Ok(BuiltinOutput::lines([ctx.args.join(" ")]))
    }
}
