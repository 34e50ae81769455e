use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use nix::unistd::{gethostname, getuid, User};

use crate::prelude::*;

/// Working directory, environment snapshot and prompt of the running shell.
///
/// There is one `Session` per process. It is only mutated through the dispatch
/// path, and the process-wide current directory is never touched: relative
/// paths and spawned programs are resolved against `working_dir` instead.
#[derive(Debug)]
pub struct Session {
    working_dir: PathBuf,
    environment: BTreeMap<String, String>,
    user: String,
    host: String,
    prompt: String,
}

impl Session {
    pub fn new(working_dir: PathBuf, environment: BTreeMap<String, String>, host: String) -> Self {
        let user = environment
            .get("USER")
            .or_else(|| environment.get("LOGNAME"))
            .cloned()
            .or_else(|| {
                User::from_uid(getuid())
                    .ok()
                    .flatten()
                    .map(|user| user.name)
            })
            .unwrap_or_default();

        let mut session = Self {
            working_dir,
            environment,
            user,
            host,
            prompt: String::new(),
        };
        session.refresh_prompt();
        session
    }

    /// Snapshots the process environment at startup.
    pub fn from_process() -> std::io::Result<Self> {
        let working_dir = std::env::current_dir()?;

        let mut environment: BTreeMap<String, String> = std::env::vars_os()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.to_string_lossy().into_owned(),
                )
            })
            .collect();

        if let Ok(exe) = std::env::current_exe() {
            environment.insert("SHELL".into(), exe.to_string_lossy().into_owned());
        }

        let host = gethostname()
            .map(|host| host.to_string_lossy().into_owned())
            .unwrap_or_else(|err| {
                warn!("failed to read hostname: {err}");
                String::from("localhost")
            });

        Ok(Self::new(working_dir, environment, host))
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn environment(&self) -> &BTreeMap<String, String> {
        &self.environment
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn home(&self) -> Option<&Path> {
        self.environment
            .get("HOME")
            .filter(|home| !home.is_empty())
            .map(Path::new)
    }

    /// Resolves a user-supplied path against the working directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.working_dir.join(path)
    }

    /// Moves the working directory, leaving everything untouched on failure.
    pub fn change_dir(&mut self, target: &str) -> ShellResult<()> {
        let full_path = self
            .resolve(target)
            .canonicalize()
            .map_err(|_| ShellError::DirectoryNotFound(target.to_owned()))?;

        if !full_path.is_dir() {
            return Err(ShellError::DirectoryNotFound(target.to_owned()));
        }

        trace!("cd: {:?}", full_path);

        self.environment
            .insert("PWD".into(), full_path.to_string_lossy().into_owned());
        self.working_dir = full_path;
        self.refresh_prompt();

        Ok(())
    }

    fn refresh_prompt(&mut self) {
        let display = display_path(&self.working_dir, self.home());
        self.prompt = format!("{}@{} {}$ ", self.user, self.host, display);
    }
}

/// Renders `path` with a leading home directory collapsed to `~`.
pub fn display_path(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => String::from("~"),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}
