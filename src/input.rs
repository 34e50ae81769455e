use std::{
    collections::VecDeque,
    io::{self, stdin, stdout, BufRead, Write},
    path::Path,
};

use termion::input::TermRead;

/// Feeds the read loop one line at a time.
pub enum LineSource {
    Interactive,
    /// Lines of a script file, with a trailing `quit`.
    Script(VecDeque<String>),
}

impl LineSource {
    /// Opens `script` if it can be read, otherwise falls back to stdin.
    pub async fn open(script: Option<&Path>) -> Self {
        let Some(script) = script else {
            return Self::Interactive;
        };

        match tokio::fs::read_to_string(script).await {
            Ok(contents) => Self::from_script(&contents),
            Err(err) => {
                warn!("failed to open script {:?}: {err}", script);
                Self::Interactive
            }
        }
    }

    pub fn from_script(contents: &str) -> Self {
        let mut lines: VecDeque<String> = contents.lines().map(str::to_owned).collect();
        lines.push_back("quit".into());
        Self::Script(lines)
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }

    /// Next line without its terminator, or `None` once the source is exhausted.
    pub async fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        match self {
            Self::Script(lines) => Ok(lines.pop_front()),
            Self::Interactive => {
                let prompt = prompt.to_owned();
                tokio::task::spawn_blocking(move || -> io::Result<Option<String>> {
                    let mut out = stdout().lock();
                    out.write_all(prompt.as_bytes())?;
                    out.flush()?;
                    drop(out);

                    let mut line = String::new();
                    match BufRead::read_line(&mut stdin().lock(), &mut line)? {
                        0 => Ok(None),
                        _ => Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned())),
                    }
                })
                .await?
            }
        }
    }
}

/// Blocks until the user presses enter. Typed characters are not echoed.
pub async fn wait_for_enter() -> io::Result<()> {
    tokio::task::spawn_blocking(|| -> io::Result<()> {
        let tty = termion::is_tty(&io::stdin());
        wait_on(&mut stdin().lock(), &mut stdout().lock(), tty)
    })
    .await?
}

/// Prints the pause prompt to `out` and consumes one line of `input`.
///
/// On a terminal the line is read with echo disabled.
pub fn wait_on<R, W>(input: &mut R, out: &mut W, tty: bool) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(out, "press \"Enter\" to resume shell function")?;
    out.flush()?;

    if tty {
        input.read_passwd(out)?;
    } else {
        BufRead::read_line(input, &mut String::new())?;
    }

    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_consumes_exactly_one_line() {
        let mut input = io::Cursor::new("anything\nnext command\n");
        let mut out = Vec::new();

        wait_on(&mut input, &mut out, false).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "press \"Enter\" to resume shell function\n"
        );
        let mut rest = String::new();
        BufRead::read_line(&mut input, &mut rest).unwrap();
        assert_eq!(rest, "next command\n");
    }

    #[test]
    fn pause_returns_at_end_of_input() {
        let mut out = Vec::new();
        wait_on(&mut io::Cursor::new(""), &mut out, false).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with('\n'));
    }

    #[tokio::test]
    async fn script_lines_end_with_quit() {
        let mut source = LineSource::from_script("echo one\n\ndir > out.txt\n");
        assert!(!source.is_interactive());

        let mut lines = Vec::new();
        while let Some(line) = source.next_line("ignored$ ").await.unwrap() {
            lines.push(line);
        }

        assert_eq!(lines, vec!["echo one", "", "dir > out.txt", "quit"]);
    }

    #[tokio::test]
    async fn unreadable_script_falls_back_to_interactive() {
        let dir = tempfile::tempdir().unwrap();
        let source = LineSource::open(Some(&dir.path().join("missing.sh"))).await;
        assert!(source.is_interactive());
    }

    #[tokio::test]
    async fn readable_script_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.sh");
        std::fs::write(&path, "echo hi\n").unwrap();

        let mut source = LineSource::open(Some(&path)).await;

        assert_eq!(source.next_line("").await.unwrap().as_deref(), Some("echo hi"));
        assert_eq!(source.next_line("").await.unwrap().as_deref(), Some("quit"));
        assert_eq!(source.next_line("").await.unwrap(), None);
    }
}
