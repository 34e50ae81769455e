use super::execution_plan::{ExecutionPlan, InputMode, Invocation};
use crate::{
    builtins::{BuiltinCommand, BuiltinCommands, BuiltinContext},
    prelude::*,
    process::{self, write::deliver},
};

impl ExecutionPlan {
    pub async fn execute<W>(&self, session: &mut Session, console: &mut W) -> ShellResult<Flow>
    where
        W: AsyncWrite + Unpin + Send,
    {
        match self {
            Self::NoOp => Ok(Flow::Continue),
            Self::Invalid(err) => Err(err.clone().into()),
            Self::Execute(invocation) => invocation.execute(session, console).await,
        }
    }
}

impl Invocation {
    pub async fn execute<W>(&self, session: &mut Session, console: &mut W) -> ShellResult<Flow>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let builtin = BuiltinCommands::from_name(&self.command);

        let accepts_input = builtin.as_ref().is_some_and(|b| b.accepts_input());
        if matches!(self.input, InputMode::File(_)) && !accepts_input {
            return Err(ShellError::UnsupportedInput(self.command.clone()));
        }

        let Some(builtin) = builtin else {
            let launched = process::launch(self, session).await?;
            debug!(?launched, success = launched.success(), "external command");
            return Ok(Flow::Continue);
        };

        trace!("running builtin {}: {:?}", self.command, self.args);

        let output = builtin
            .execute(BuiltinContext {
                args: &self.args,
                input: &self.input,
                session: &mut *session,
            })
            .await?;

        deliver(&output.stdout, &self.output, session, console).await?;

        Ok(output.flow)
    }
}
