use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

#[derive(Default)]
pub struct Environ;

#[async_trait]
impl BuiltinCommand for Environ {
    fn name(&self) -> &'static str {
        "environ"
    }

    fn description(&self) -> &'static str {
        "prints all the environment variables and their corresponding values"
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        let entries = ctx
            .session
            .environment()
            .iter()
            .map(|(name, value)| format!("{name} : {value}"));

        Ok(BuiltinOutput::lines(entries))
    }
}
