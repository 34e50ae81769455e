use std::{
    io,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
};

use tokio::process::Command;

use crate::{cmd::execution_plan::Invocation, prelude::*};

pub mod write;

/// How an external program ended up after `launch` returned.
#[derive(Debug)]
pub enum Launched {
    Exited(ExitStatus),
    /// Left running; the shell never waits on it.
    Background(Option<u32>),
}

impl Launched {
    pub fn success(&self) -> bool {
        match self {
            Self::Exited(status) => status.success(),
            Self::Background(_) => true,
        }
    }
}

/// Runs an external program with the invocation's output redirection.
///
/// Standard streams are inherited unless output is redirected, in which case
/// stdout goes to the opened file. The program is located before the file is
/// opened, so a mistyped command leaves the target untouched. Foreground
/// programs are waited on; background programs are spawned and forgotten.
pub async fn launch(invocation: &Invocation, session: &Session) -> ShellResult<Launched> {
    let program = locate(&invocation.command, session)?;
    trace!(?program, "located {}", invocation.command);

    let mut cmd = Command::new(&invocation.command);
    cmd.args(&invocation.args)
        .current_dir(session.working_dir())
        .env_clear()
        .envs(session.environment());

    if let Some(file) = invocation.output.open(session.working_dir()).await? {
        cmd.stdout(Stdio::from(file.into_std().await));
    }

    trace!("spawning command: {:?}", cmd);

    let mut child = cmd
        .spawn()
        .map_err(|err| spawn_error(&invocation.command, err))?;

    if invocation.background {
        let pid = child.id();
        debug!(?pid, "{} running in background", invocation.command);
        return Ok(Launched::Background(pid));
    }

    let status = child.wait().await?;
    debug!(%status, "{} exited", invocation.command);

    Ok(Launched::Exited(status))
}

/// Finds the program the same way `exec` would, against the session's
/// working directory and `PATH`.
///
/// A command containing `/` names a file directly. Otherwise each `PATH` entry
/// is tried in order and the first executable file wins; if only
/// non-executable matches exist the lookup fails with `PermissionDenied`.
pub fn locate(command: &str, session: &Session) -> ShellResult<PathBuf> {
    if command.contains('/') {
        let path = session.resolve(command);
        return match executable(&path) {
            Some(true) => Ok(path),
            Some(false) => Err(ShellError::PermissionDenied(command.to_owned())),
            None => Err(ShellError::CommandNotFound(command.to_owned())),
        };
    }

    let search_paths = session
        .environment()
        .get("PATH")
        .map(String::as_str)
        .unwrap_or_default();

    let mut denied = false;
    for dir in std::env::split_paths(search_paths) {
        let candidate = session.resolve(dir).join(command);
        match executable(&candidate) {
            Some(true) => return Ok(candidate),
            Some(false) => denied = true,
            None => {}
        }
    }

    if denied {
        Err(ShellError::PermissionDenied(command.to_owned()))
    } else {
        Err(ShellError::CommandNotFound(command.to_owned()))
    }
}

/// `None` when `path` is not a regular file.
fn executable(path: &Path) -> Option<bool> {
    let metadata = std::fs::metadata(path).ok().filter(|m| m.is_file())?;
    Some(metadata.permissions().mode() & 0o111 != 0)
}

fn spawn_error(command: &str, err: io::Error) -> ShellError {
    match err.kind() {
        io::ErrorKind::NotFound => ShellError::CommandNotFound(command.to_owned()),
        io::ErrorKind::PermissionDenied => ShellError::PermissionDenied(command.to_owned()),
        _ => err.into(),
    }
}
