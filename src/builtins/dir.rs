use std::{io, path::Path};

use async_trait::async_trait;

use super::{BuiltinCommand, BuiltinContext, BuiltinOutput};
use crate::{cmd::execution_plan::InputMode, prelude::*};

#[derive(Default)]
pub struct Dir;

#[async_trait]
impl BuiltinCommand for Dir {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn description(&self) -> &'static str {
        "lists the contents of the given directory or the current directory if none is given"
    }

    fn accepts_input(&self) -> bool {
        true
    }

    async fn execute(&self, ctx: BuiltinContext<'_>) -> ShellResult<BuiltinOutput> {
        let target = match ctx.input {
            InputMode::File(path) => target_from_file(&ctx.session.resolve(path), path).await?,
            InputMode::Inherit => ctx.args.first().cloned(),
        };

        let path = match &target {
            Some(target) => ctx.session.resolve(target),
            None => ctx.session.working_dir().to_path_buf(),
        };

        trace!("dir: {:?}", path);

        let entries = list(&path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound || !path.is_dir() {
                ShellError::DirectoryNotFound(target.unwrap_or_else(|| path.display().to_string()))
            } else {
                err.into()
            }
        })?;

        Ok(BuiltinOutput::lines(entries))
    }
}

/// Entry names of `path`, in the order the filesystem returns them.
pub async fn list(path: &Path) -> io::Result<Vec<String>> {
    let mut read_dir = tokio::fs::read_dir(path).await?;
    let mut names = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

/// The first non-blank line of the input file names the directory to list.
async fn target_from_file(full_path: &Path, typed: &Path) -> ShellResult<Option<String>> {
    let contents = tokio::fs::read_to_string(full_path)
        .await
        .map_err(|_| ShellError::FileNotFound(typed.to_path_buf()))?;

    Ok(contents
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_owned))
}
