//! quill - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use quill::cli::{Cli, Commands, ConfigAction};
use quill::commands;
use quill::commit::{self, AicOptions};
use quill::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Aic {
            commit,
            add,
            push,
            model,
        } => {
            let config = Config::load().context("Failed to load configuration")?;
            commit::run(
                &config,
                AicOptions {
                    auto_commit: commit,
                    add_first: add,
                    push_after: push,
                    model_override: model,
                },
            )
            .await?;
        }
        Commands::Ap { model } => {
            let config = Config::load().context("Failed to load configuration")?;
            commit::run(
                &config,
                AicOptions {
                    auto_commit: true,
                    add_first: true,
                    push_after: true,
                    model_override: model,
                },
            )
            .await?;
        }
        Commands::Commit { message, add, push } => {
            commands::commit::handle(message, add, push).await?
        }
        Commands::Add { all, paths } => commands::add::handle(all, paths).await?,
        Commands::Status => commands::status::handle()?,
        Commands::Push => commands::push::handle().await?,
        Commands::Pull { args } => commands::passthrough::handle("pull", &args)?,
        Commands::Log { args } => commands::passthrough::handle("log", &args)?,
        Commands::Diff { args } => commands::passthrough::handle("diff", &args)?,
        Commands::Branch { args } => commands::passthrough::handle("branch", &args)?,
        Commands::Stash { args } => commands::passthrough::handle("stash", &args)?,
        Commands::Tag { args } => commands::passthrough::handle("tag", &args)?,
        Commands::KeySet => commands::settings::handle_key_set()?,
        Commands::KeyGet => commands::settings::handle_key_get()?,
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => commands::settings::handle_config_get(&key)?,
            ConfigAction::Set { key, value } => commands::settings::handle_config_set(&key, value)?,
        },
    }

    Ok(())
}
