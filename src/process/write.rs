use std::path::Path;

use tokio::fs::{File, OpenOptions};

use crate::{cmd::execution_plan::OutputMode, prelude::*};

impl OutputMode {
    /// Opens the redirect target, or `None` when output stays on the console.
    ///
    /// `>` creates or truncates, `>>` creates or appends.
    pub async fn open(&self, working_dir: &Path) -> ShellResult<Option<File>> {
        let (path, append) = match self {
            Self::Inherit => return Ok(None),
            Self::Truncate(path) => (path, false),
            Self::Append(path) => (path, true),
        };

        let full_path = working_dir.join(path);
        trace!(?full_path, append, "opening redirect target");

        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        options
            .open(&full_path)
            .await
            .map(Some)
            .map_err(|source| ShellError::Redirect {
                path: path.clone(),
                source,
            })
    }
}

/// Writes a built-in's output to its sink.
///
/// A redirect file lives only for the duration of this call.
pub async fn deliver<W>(
    stdout: &[u8],
    output: &OutputMode,
    session: &Session,
    console: &mut W,
) -> ShellResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    match output.open(session.working_dir()).await? {
        Some(mut file) => {
            file.write_all(stdout).await?;
            file.flush().await?;
        }
        None => {
            console.write_all(stdout).await?;
            console.flush().await?;
        }
    }

    Ok(())
}
