//! Integration tests for diff collection and the commit executor against
//! real repositories.

mod common;

use common::TestRepo;
use quill::commit::executor::execute_commit;
use quill::error::{AicError, DiffError, ErrorKind, ExecError};
use quill::git::diff::{DiffScope, changed_files, collect_diff};

#[tokio::test]
async fn missing_api_key_fails_before_any_collection() {
    let config = quill::Config::default();
    let err = quill::commit::run(&config, quill::AicOptions::default())
        .await
        .expect_err("empty api key must fail");
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn staged_diff_takes_priority_over_unstaged() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.write_file("b.txt", "two\n");
    repo.commit_all("initial");

    repo.write_file("a.txt", "one changed\n");
    repo.git(&["add", "a.txt"]);
    repo.write_file("b.txt", "two changed\n");

    let diff = collect_diff(&repo.open()).expect("diff");
    assert_eq!(diff.scope(), DiffScope::Staged);
    assert!(diff.text().contains("a.txt"));
    assert!(!diff.text().contains("b.txt"));
    assert_eq!(diff.files(), ["a.txt".to_string()]);
}

#[test]
fn falls_back_to_unstaged_when_nothing_is_staged() {
    let repo = TestRepo::new();
    repo.write_file("b.txt", "two\n");
    repo.commit_all("initial");

    repo.write_file("b.txt", "two changed\n");

    let diff = collect_diff(&repo.open()).expect("diff");
    assert_eq!(diff.scope(), DiffScope::Unstaged);
    assert!(diff.text().contains("b.txt"));
}

#[test]
fn clean_tree_fails_with_no_changes_never_empty_success() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.commit_all("initial");

    let git = repo.open();
    let err = collect_diff(&git).expect_err("clean tree must fail");
    assert!(matches!(err, DiffError::NoChanges));
    assert_eq!(AicError::from(err).kind(), ErrorKind::Collection);

    let err = changed_files(&git).expect_err("clean tree must fail");
    assert!(matches!(err, DiffError::NoChanges));
}

#[test]
fn changed_files_mirrors_the_staged_fallback() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.write_file("b.txt", "two\n");
    repo.commit_all("initial");

    repo.write_file("a.txt", "one changed\n");
    repo.write_file("b.txt", "two changed\n");

    // Nothing staged: both modified files are listed.
    let files = changed_files(&repo.open()).expect("files");
    assert_eq!(files, ["a.txt".to_string(), "b.txt".to_string()]);

    // Staging narrows the list to the staged side.
    repo.git(&["add", "a.txt"]);
    let files = changed_files(&repo.open()).expect("files");
    assert_eq!(files, ["a.txt".to_string()]);
}

#[test]
fn add_first_stages_then_commits() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.commit_all("initial");

    repo.write_file("new.txt", "fresh\n");
    let outcome = execute_commit(&repo.open(), "feat: add new file", true, false)
        .expect("commit should succeed");
    assert!(outcome.is_none());
    assert_eq!(repo.commit_count(), 2);
    assert_eq!(repo.last_commit_message(), "feat: add new file");
    // The untracked file only made it into the commit because staging ran first.
    assert_eq!(repo.git(&["status", "--porcelain"]).trim(), "");
}

#[test]
fn commit_failure_aborts_before_push() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.commit_all("initial");

    // Nothing to commit: step 2 fails, so step 3 (which would also fail,
    // there is no remote) is never reached.
    let err = execute_commit(&repo.open(), "chore: nothing", false, true)
        .expect_err("empty commit must fail");
    assert!(matches!(err, ExecError::CommitFailed(_)));
    assert_eq!(AicError::from(err).kind(), ErrorKind::SideEffect);
    assert_eq!(repo.commit_count(), 1);
}

#[test]
fn commit_survives_a_failed_push() {
    let repo = TestRepo::new();
    repo.write_file("a.txt", "one\n");
    repo.commit_all("initial");
    repo.git(&["remote", "add", "origin", "/nonexistent/remote.git"]);

    repo.write_file("a.txt", "one changed\n");
    let err = execute_commit(&repo.open(), "fix: update a", true, true)
        .expect_err("push to a broken remote must fail");
    assert!(matches!(err, ExecError::PushFailed(_)));

    // The local commit is never reverted by the failed push.
    assert_eq!(repo.commit_count(), 2);
    assert_eq!(repo.last_commit_message(), "fix: update a");
}
