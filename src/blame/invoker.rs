//! Spawns the `git blame` subprocess, one file at a time.

use crate::blame::parser::parse_porcelain;
use crate::stats::FileRecord;
use std::io::{BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

/// Marker git prints on stderr when blame cannot run at all (untracked file,
/// not a repository, bad revision).
const FATAL_MARKER: &str = "fatal";

#[derive(Debug, Error)]
pub enum BlameError {
    /// git itself reported a fatal condition; the run must stop.
    #[error("git blame reported a fatal error")]
    Fatal { stderr: String },

    /// Spawning or talking to the subprocess failed (e.g. git not installed).
    #[error("failed to run git blame: {0}")]
    Io(#[from] std::io::Error),
}

/// Blame a single file and tally its per-line authors.
///
/// Runs `git -C <repo_root> blame <file> --line-porcelain -w`; `-w` keeps
/// whitespace-only changes from stealing attribution. Stdout is streamed
/// through the porcelain parser to completion, then stderr is drained and
/// checked for the fatal marker. Strictly sequential: the subprocess is fully
/// reaped before this returns.
pub fn blame_file(repo_root: &Path, file: &Path) -> Result<FileRecord, BlameError> {
    let mut child = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .arg("blame")
        .arg(file)
        .arg("--line-porcelain")
        .arg("-w")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Stdout must be drained before stderr to avoid deadlocking on a full
    // pipe; blame's error output is small, the porcelain stream is not.
    let stdout = child.stdout.take().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "child stdout not captured")
    })?;
    let tally = parse_porcelain(BufReader::new(stdout))?;

    let mut stderr = String::new();
    if let Some(mut pipe) = child.stderr.take() {
        pipe.read_to_string(&mut stderr)?;
    }
    child.wait()?;

    if stderr.contains(FATAL_MARKER) {
        return Err(BlameError::Fatal { stderr });
    }

    tracing::debug!(
        file = %file.display(),
        lines = tally.total_lines(),
        authors = tally.author_count(),
        "blamed file"
    );
    Ok(FileRecord::new(file.to_path_buf(), tally))
}
