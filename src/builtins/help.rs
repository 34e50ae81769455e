use async_trait::async_trait;
use itertools::Itertools;

use super::{BuiltinCommand, BuiltinCommands, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

const SEPARATOR: &str = "   ";

#[derive(Default)]
pub struct Help;

#[async_trait]
impl BuiltinCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "lists the built in commands or if given a specific command, gives the usage of that command"
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        let builtin = ctx
            .args
            .first()
            .and_then(|name| BuiltinCommands::from_name(name));

        if let Some(builtin) = builtin {
            return Ok(BuiltinOutput::lines([builtin.description()]));
        }

        let header = if ctx.args.is_empty() {
            r#"Type "help" followed by one of the following commands for more information"#
        } else {
            r#"Unknown command. Type "help" followed by one of the following commands for more information"#
        };

        let names = BuiltinCommands::names().join(SEPARATOR);
        let rule = "=".repeat(names.len());

        Ok(BuiltinOutput::lines([header, rule.as_str(), names.as_str()]))
    }
}
