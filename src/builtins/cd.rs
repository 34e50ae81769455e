use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::prelude::*;

#[derive(Default)]
pub struct Cd;

#[async_trait]
impl BuiltinCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "changes the current directory or prints the current directory if none is given"
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        trace!("executing cd builtin: {:?}", ctx.args);

        let Some(path) = ctx.args.first() else {
            let cwd = ctx.session.working_dir().display().to_string();
            return Ok(BuiltinOutput::lines([cwd]));
        };

        ctx.session.change_dir(path).map_err(|err| {
            error!("failed to cd: {}", err);
            err
        })?;

        Ok(BuiltinOutput::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::tests::{run, session_in};

    #[tokio::test]
    async fn no_argument_prints_working_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());

        let out = run(Cd.into(), &[], &mut session).await.unwrap();

        assert_eq!(out.stdout, format!("{}\n", dir.path().display()).into_bytes());
        assert_eq!(session.working_dir(), dir.path());
    }

    #[tokio::test]
    async fn changes_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        let mut session = session_in(dir.path());

        let out = run(Cd.into(), &["sub"], &mut session).await.unwrap();

        assert!(out.stdout.is_empty());
        assert_eq!(
            session.working_dir(),
            dir.path().join("sub").canonicalize().unwrap()
        );
        assert!(session.prompt().ends_with("sub$ "));
    }

    #[tokio::test]
    async fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(dir.path());

        let err = run(Cd.into(), &["nope"], &mut session).await.unwrap_err();

        assert!(matches!(err, ShellError::DirectoryNotFound(_)));
        assert_eq!(session.working_dir(), dir.path());
    }
}
