use crate::prelude::*;

use self::execution_plan::ExecutionPlan;

pub mod execute;
pub mod execution_plan;

/// Whether the read loop keeps going after a line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    #[default]
    Continue,
    Quit,
}

/// Runs one input line end to end: tokenize, resolve, dispatch, report.
///
/// Recoverable errors are written to `console` and swallowed. The only error
/// returned is a failure to write to the console itself.
pub async fn dispatch_line<W>(line: &str, session: &mut Session, console: &mut W) -> ShellResult<Flow>
where
    W: AsyncWrite + Unpin + Send,
{
    let result = match line.parse::<ExecutionPlan>() {
        Ok(plan) => {
            trace!(?plan, "execution plan");
            plan.execute(session, console).await
        }
        Err(err) => Err(err.into()),
    };

    match result {
        Ok(flow) => Ok(flow),
        Err(err) => {
            report(&err, console).await?;
            Ok(Flow::Continue)
        }
    }
}

/// Writes the `Error:` line, and the `Usage:` line when there is one.
pub async fn report<W>(err: &ShellError, console: &mut W) -> ShellResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    if err.is_silent() {
        debug!("suppressed: {err}");
        return Ok(());
    }

    debug!("reporting: {err:?}");

    let mut message = format!("Error: {err}\n");
    if let Some(usage) = err.usage() {
        message.push_str(&format!("Usage: {usage}\n"));
    }

    console.write_all(message.as_bytes()).await?;
    console.flush().await?;

    Ok(())
}
