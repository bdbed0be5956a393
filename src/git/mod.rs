//! Process-boundary git operations.
//!
//! Every command shells out to the system `git` binary, inheriting the user's
//! existing git config, SSH agent, and credential store. Output is captured
//! for programmatic callers and streamed for passthrough commands.

pub mod diff;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::GitError;

/// How a push reached the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// A plain `git push` to the existing upstream.
    Pushed,
    /// No upstream was configured; pushed with `--set-upstream origin HEAD`.
    UpstreamSet,
}

/// Handle on a working tree, addressed through the system git binary.
#[derive(Debug, Clone)]
pub struct Git {
    dir: PathBuf,
}

impl Git {
    /// Open the repository containing the current directory.
    pub fn open_current() -> Result<Self, GitError> {
        Self::open(Path::new("."))
    }

    /// Open the repository containing `dir`.
    ///
    /// Fails with [`GitError::ToolUnavailable`] when no git binary is on
    /// PATH and [`GitError::NotARepository`] when `dir` is not inside a
    /// working tree.
    pub fn open(dir: &Path) -> Result<Self, GitError> {
        which::which("git").map_err(|_| GitError::ToolUnavailable)?;

        let git = Self {
            dir: dir.to_path_buf(),
        };
        let inside = Command::new("git")
            .current_dir(&git.dir)
            .args(["rev-parse", "--is-inside-work-tree"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| GitError::Spawn {
                operation: "rev-parse".into(),
                source: e,
            })?;
        if !inside.success() {
            return Err(GitError::NotARepository);
        }
        Ok(git)
    }

    /// Run a git command and capture stdout; non-zero exit carries the
    /// captured stderr.
    pub fn run<I, S>(&self, args: I, operation: &str) -> Result<String, GitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new("git")
            .current_dir(&self.dir)
            .args(args)
            .output()
            .map_err(|e| GitError::Spawn {
                operation: operation.into(),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CommandFailed {
                operation: operation.into(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a git subcommand with stdout/stderr streamed to the terminal.
    ///
    /// Used by the passthrough commands; the user sees git's own output, so
    /// the error only carries the exit status.
    pub fn passthrough(&self, subcommand: &str, args: &[String]) -> Result<(), GitError> {
        let status = Command::new("git")
            .current_dir(&self.dir)
            .arg(subcommand)
            .args(args)
            .status()
            .map_err(|e| GitError::Spawn {
                operation: subcommand.into(),
                source: e,
            })?;

        if !status.success() {
            return Err(GitError::CommandFailed {
                operation: subcommand.into(),
                stderr: format!("exited with status {}", status.code().unwrap_or(1)),
            });
        }
        Ok(())
    }

    /// The currently checked-out branch name, empty in detached HEAD state.
    pub fn current_branch(&self) -> Result<String, GitError> {
        Ok(self
            .run(["branch", "--show-current"], "branch")?
            .trim()
            .to_string())
    }

    /// Whether the current branch has a remote-tracking counterpart.
    pub fn has_upstream(&self) -> bool {
        Command::new("git")
            .current_dir(&self.dir)
            .args(["rev-parse", "--abbrev-ref", "--symbolic-full-name", "@{u}"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Stage every pending change, like `git add .`.
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run(["add", "."], "add")?;
        Ok(())
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(["commit", "-m", message], "commit")?;
        Ok(())
    }

    /// Push to the upstream, setting it to `origin HEAD` when missing.
    pub fn push(&self) -> Result<PushOutcome, GitError> {
        if self.has_upstream() {
            self.run(["push"], "push")?;
            Ok(PushOutcome::Pushed)
        } else {
            self.run(["push", "--set-upstream", "origin", "HEAD"], "push")?;
            Ok(PushOutcome::UpstreamSet)
        }
    }
}
