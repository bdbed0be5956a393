//! Command-line interface definitions.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "A styled git helper with AI-assisted commit messages")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an AI-powered commit message from the pending changes
    #[command(aliases = ["ai-commit", "ai", "ac"])]
    Aic {
        /// Create the commit immediately, skipping the refinement menu
        #[arg(short = 'c', long = "commit")]
        commit: bool,
        /// Stage all changes before committing
        #[arg(short = 'a', long = "add")]
        add: bool,
        /// Push after a successful commit
        #[arg(short = 'p', long = "push")]
        push: bool,
        /// Model to use for generation (overrides default_model)
        #[arg(short = 'm', long = "model")]
        model: Option<String>,
    },

    /// Generate an AI commit message, commit, and push in one step
    #[command(aliases = ["aip", "aicommitpush"])]
    Ap {
        /// Model to use for generation (overrides default_model)
        #[arg(short = 'm', long = "model")]
        model: Option<String>,
    },

    /// Commit changes with an interactive message prompt
    #[command(alias = "c")]
    Commit {
        /// Commit message (prompted when omitted)
        #[arg(short, long)]
        message: Option<String>,
        /// Stage all changes first
        #[arg(short, long)]
        add: bool,
        /// Push after committing
        #[arg(short, long)]
        push: bool,
    },

    /// Stage files for commit
    Add {
        /// Stage all changes
        #[arg(long)]
        all: bool,
        /// Paths to stage
        paths: Vec<String>,
    },

    /// Show the working tree status
    #[command(alias = "s")]
    Status,

    /// Push changes, setting the upstream when missing
    #[command(alias = "p")]
    Push,

    /// Pull changes from the remote
    Pull {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show the commit log
    #[command(alias = "l")]
    Log {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show changes between commits or the working tree
    #[command(alias = "d")]
    Diff {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Manage branches
    #[command(alias = "b")]
    Branch {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Stash changes
    #[command(alias = "st")]
    Stash {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Manage tags
    Tag {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Set the API key for AI commit messages
    KeySet,

    /// Show the configured API key (redacted)
    KeyGet,

    /// Read or write persisted settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print a setting
    Get { key: String },
    /// Update a setting
    Set { key: String, value: String },
}
