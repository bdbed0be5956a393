//! Sequential stage → commit → push side effects.

use crate::error::ExecError;
use crate::git::{Git, PushOutcome};

/// Run the fail-fast commit sequence.
///
/// Steps, each aborting the rest on failure:
/// 1. stage all changes (only when `add_first` is set)
/// 2. commit with `message`
/// 3. push (only when `push_after` is set)
///
/// A push failure maps to [`ExecError::PushFailed`] and never reverts the
/// local commit created in step 2.
pub fn execute_commit(
    git: &Git,
    message: &str,
    add_first: bool,
    push_after: bool,
) -> Result<Option<PushOutcome>, ExecError> {
    if add_first {
        git.stage_all().map_err(ExecError::StageFailed)?;
    }

    git.commit(message).map_err(ExecError::CommitFailed)?;

    if push_after {
        let outcome = git.push().map_err(ExecError::PushFailed)?;
        return Ok(Some(outcome));
    }
    Ok(None)
}
