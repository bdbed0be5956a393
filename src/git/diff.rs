//! Diff collection with the staged-first, unstaged-fallback policy.

use tracing::warn;

use crate::error::DiffError;
use crate::git::Git;

/// Which side of the index a payload was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffScope {
    Staged,
    Unstaged,
}

/// Pending changes handed to prompt construction.
///
/// Never holds empty diff text: an empty diff is [`DiffError::NoChanges`],
/// not an empty-but-valid payload.
#[derive(Debug, Clone)]
pub struct DiffPayload {
    text: String,
    scope: DiffScope,
    files: Vec<String>,
}

impl DiffPayload {
    /// Build a payload, rejecting empty diff text.
    pub fn new(text: String, scope: DiffScope, files: Vec<String>) -> Result<Self, DiffError> {
        if text.trim().is_empty() {
            return Err(DiffError::NoChanges);
        }
        Ok(Self { text, scope, files })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scope(&self) -> DiffScope {
        self.scope
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }
}

/// Collect the pending diff.
///
/// The staged diff takes priority; the unstaged diff is consulted only when
/// the staged one is empty. Both empty is the only failure path, so a
/// successful result is never empty.
///
/// The changed-file list is enrichment: a failure there degrades to an empty
/// list instead of failing the collection.
pub fn collect_diff(git: &Git) -> Result<DiffPayload, DiffError> {
    let staged = git.run(["diff", "--staged"], "diff --staged")?;
    let (text, scope) = if staged.trim().is_empty() {
        let unstaged = git.run(["diff"], "diff")?;
        (unstaged, DiffScope::Unstaged)
    } else {
        (staged, DiffScope::Staged)
    };
    if text.trim().is_empty() {
        return Err(DiffError::NoChanges);
    }

    let files = match changed_files(git) {
        Ok(files) => files,
        Err(e) => {
            warn!("couldn't get changed files: {e}");
            Vec::new()
        }
    };

    DiffPayload::new(text, scope, files)
}

/// List the changed file names, mirroring the staged-then-unstaged fallback.
///
/// Independently invocable and independently failing: both lists empty is
/// [`DiffError::NoChanges`].
pub fn changed_files(git: &Git) -> Result<Vec<String>, DiffError> {
    let staged = git.run(["diff", "--staged", "--name-only"], "diff --name-only")?;
    let listing = if staged.trim().is_empty() {
        git.run(["diff", "--name-only"], "diff --name-only")?
    } else {
        staged
    };

    let files: Vec<String> = listing
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    if files.is_empty() {
        return Err(DiffError::NoChanges);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_rejects_empty_text() {
        let err = DiffPayload::new("  \n".into(), DiffScope::Staged, vec![])
            .expect_err("whitespace-only diff must be rejected");
        assert!(matches!(err, DiffError::NoChanges));
    }

    #[test]
    fn payload_keeps_text_scope_and_files() {
        let payload = DiffPayload::new(
            "diff --git a/x b/x".into(),
            DiffScope::Unstaged,
            vec!["x".into()],
        )
        .expect("valid payload");
        assert_eq!(payload.text(), "diff --git a/x b/x");
        assert_eq!(payload.scope(), DiffScope::Unstaged);
        assert_eq!(payload.files(), ["x".to_string()]);
    }
}
