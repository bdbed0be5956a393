//! quill - a styled git helper with AI-assisted commit messages.
//!
//! # Overview
//!
//! quill wraps everyday git operations with styled terminal output and adds
//! an AI-assisted commit workflow: it collects the pending diff, enriches it
//! with best-effort project context, asks an OpenAI-compatible model for a
//! conventional commit message, and refines the result interactively before
//! committing and optionally pushing.

pub mod cli;
pub mod commands;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod progress;

// Re-export commonly used types
pub use commit::AicOptions;
pub use commit::generate::{MessageGenerator, MessageSource};
pub use commit::prompt::{PromptVariant, build_prompt};
pub use commit::refine::{Decision, Effect, GeneratedMessage, RefinementSession, SessionState};
pub use config::Config;
pub use error::{AicError, ConfigError, DiffError, ErrorKind, ExecError, GenerateError, GitError};
pub use git::diff::{DiffPayload, DiffScope};
pub use git::{Git, PushOutcome};
