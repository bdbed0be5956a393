//! Error types for quill modules using thiserror.

use thiserror::Error;

/// Errors from the git process boundary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git is not installed or not on PATH")]
    ToolUnavailable,

    #[error("current directory is not a git repository")]
    NotARepository,

    #[error("failed to run git {operation}: {source}")]
    Spawn {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },
}

/// Errors from diff collection.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("no changes detected in the repository")]
    NoChanges,

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Errors from the chat-completion call.
///
/// A missing API key never reaches the generator; it is a config
/// precondition checked before any collection happens.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("API key contains characters that cannot be sent in an HTTP header")]
    InvalidApiKey,

    #[error("request to the model endpoint failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("model endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("no response from the AI model")]
    NoChoices,

    #[error("the AI model returned an empty message")]
    EmptyResponse,
}

/// Errors from the stage/commit/push sequence.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to stage changes: {0}")]
    StageFailed(#[source] GitError),

    #[error("failed to create commit: {0}")]
    CommitFailed(#[source] GitError),

    /// The local commit already exists when this is raised; a failed push
    /// never reverts it.
    #[error("commit created, but push failed: {0}")]
    PushFailed(#[source] GitError),
}

/// Errors from config loading and persistence.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key not set. Run 'quill key-set' to configure it")]
    MissingApiKey,

    #[error("could not determine the config directory")]
    NoConfigDir,

    #[error("unknown config key '{0}' (expected base_url or default_model)")]
    UnknownKey(String),

    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),
}

/// Broad failure classes for the aic workflow.
///
/// Tests assert on these instead of matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or not-a-repository; raised before any side effect.
    Precondition,
    /// Diff or input gathering failed.
    Collection,
    /// The model call failed or returned nothing usable.
    Generation,
    /// Stage, commit, or push failed.
    SideEffect,
}

/// Roll-up error for the aic workflow.
#[derive(Error, Debug)]
pub enum AicError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("failed to read input: {0}")]
    Interaction(#[from] dialoguer::Error),
}

impl AicError {
    /// Machine-checkable failure class, independent of message text.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AicError::Config(_) => ErrorKind::Precondition,
            // A bare GitError only surfaces from opening the repository,
            // which happens before any collection or side effect.
            AicError::Git(_) => ErrorKind::Precondition,
            AicError::Diff(_) => ErrorKind::Collection,
            AicError::Generate(GenerateError::InvalidApiKey) => ErrorKind::Precondition,
            AicError::Generate(_) => ErrorKind::Generation,
            AicError::Exec(_) => ErrorKind::SideEffect,
            AicError::Interaction(_) => ErrorKind::Collection,
        }
    }
}
