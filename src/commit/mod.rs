//! The AI-assisted commit pipeline: collect, enrich, generate, refine, commit.
//!
//! The flow is single-threaded and synchronous end to end; the only
//! concurrency is the cosmetic spinner overlapped with blocking steps.

pub mod context;
pub mod executor;
pub mod generate;
pub mod prompt;
pub mod refine;

use std::path::Path;

use console::style;
use dialoguer::{Input, Select};

use crate::config::Config;
use crate::error::AicError;
use crate::git::diff::collect_diff;
use crate::git::{Git, PushOutcome};
use crate::progress::{with_spinner, with_spinner_blocking};

use self::executor::execute_commit;
use self::generate::{MessageGenerator, MessageSource};
use self::prompt::{PromptVariant, build_prompt};
use self::refine::{Decision, Effect, RefinementSession, SessionState};

/// Workflow options, decoupled from argument parsing.
#[derive(Debug, Clone, Default)]
pub struct AicOptions {
    /// Skip the refinement menu and commit the first generation.
    pub auto_commit: bool,
    /// Stage all changes before committing.
    pub add_first: bool,
    /// Push after a successful commit.
    pub push_after: bool,
    /// Model for this run, overriding `default_model` from config.
    pub model_override: Option<String>,
}

const MENU_ITEMS: &[&str] = &[
    "commit - create the commit with this message",
    "cancel - discard the message",
    "detailed - regenerate with more detail",
    "retry - regenerate from scratch",
    "summarize - compress the current message",
    "feedback - steer the next generation",
];

/// Run the aic workflow end to end.
pub async fn run(config: &Config, options: AicOptions) -> Result<(), AicError> {
    // Preconditions, checked before any collection or side effect.
    let api_key = config.require_api_key()?;
    let git = Git::open_current()?;

    let model = options
        .model_override
        .as_deref()
        .unwrap_or(&config.default_model);
    let generator = MessageGenerator::new(api_key, &config.base_url, model)?;

    println!("{}", style("AI Commit").bold().underlined());
    println!();

    let diff = {
        let git = git.clone();
        with_spinner_blocking("Analyzing changes...", move || collect_diff(&git)).await?
    };
    println!("{} Changes analyzed", style("✓").green().bold());
    println!(
        "{} Using model: {}",
        style("ℹ").blue().bold(),
        style(generator.model()).cyan()
    );

    // Enrichment never blocks generation; a probe failure yields an empty
    // context inside probe() itself.
    let project = context::probe(Path::new("."));

    let first_prompt = build_prompt(
        PromptVariant::Standard,
        diff.text(),
        &project.describe(),
        diff.files(),
        None,
    );
    let first = with_spinner(
        "Generating commit message...",
        generator.generate(&first_prompt),
    )
    .await?;

    let mut session = RefinementSession::new(diff, project, first);
    display_message("Generated Commit Message", &session.current().text);

    if options.auto_commit {
        finalize(&git, session.current().text.clone(), &options).await?;
        return Ok(());
    }

    refine_interactively(&git, &generator, &mut session, &options).await
}

/// Drive the refinement state machine with terminal I/O.
///
/// Each iteration blocks on one user selection, applies the pure transition,
/// and performs the resulting effect. A generation failure during
/// regeneration aborts the whole session; there is no fallback to the prior
/// message.
async fn refine_interactively(
    git: &Git,
    generator: &impl MessageSource,
    session: &mut RefinementSession,
    options: &AicOptions,
) -> Result<(), AicError> {
    while !session.state().is_terminal() {
        debug_assert_eq!(session.state(), SessionState::AwaitingDecision);

        let decision = prompt_decision()?;
        match session.apply(&decision) {
            Some(Effect::Commit) => {
                finalize(git, session.current().text.clone(), options).await?;
                session.mark_committed();
            }
            Some(Effect::Regenerate(variant)) => {
                let feedback = match &decision {
                    Decision::Feedback(text) => Some(text.as_str()),
                    _ => None,
                };
                let prompt_text = build_prompt(
                    variant,
                    session.source_for(variant),
                    &session.context().describe(),
                    session.diff().files(),
                    feedback,
                );
                let text =
                    with_spinner(regeneration_label(variant), generator.generate(&prompt_text))
                        .await?;
                session.complete_regeneration(text, variant);
                display_message(regeneration_title(variant), &session.current().text);
            }
            None => {}
        }
    }

    if session.state() == SessionState::Cancelled {
        println!("{} Commit canceled", style("ℹ").blue().bold());
    }
    Ok(())
}

fn prompt_decision() -> Result<Decision, AicError> {
    let choice = Select::new()
        .with_prompt("Create commit with this message?")
        .items(MENU_ITEMS)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Decision::Confirm,
        1 => Decision::Cancel,
        2 => Decision::Detailed,
        3 => Decision::Retry,
        4 => Decision::Summarize,
        _ => {
            let text: String = Input::new()
                .with_prompt("Enter your feedback for the commit message")
                .validate_with(|input: &String| {
                    if input.trim().is_empty() {
                        Err("feedback cannot be empty")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            Decision::Feedback(text)
        }
    })
}

async fn finalize(git: &Git, message: String, options: &AicOptions) -> Result<(), AicError> {
    let outcome = {
        let git = git.clone();
        let add_first = options.add_first;
        let push_after = options.push_after;
        with_spinner_blocking("Creating commit...", move || {
            execute_commit(&git, &message, add_first, push_after)
        })
        .await?
    };

    println!(
        "{} Commit created successfully",
        style("✓").green().bold()
    );
    match outcome {
        Some(PushOutcome::Pushed) => {
            println!("{} Changes pushed", style("✓").green().bold());
        }
        Some(PushOutcome::UpstreamSet) => {
            println!(
                "{} Upstream set and changes pushed",
                style("✓").green().bold()
            );
        }
        None => {}
    }
    Ok(())
}

fn display_message(title: &str, text: &str) {
    println!();
    println!("{}", style(title).green().bold());
    println!("{}", style(text).cyan());
    println!();
}

fn regeneration_label(variant: PromptVariant) -> &'static str {
    match variant {
        PromptVariant::Standard => "Retrying with a new generation...",
        PromptVariant::Detailed => "Generating a more detailed commit message...",
        PromptVariant::Summarize => "Summarizing the commit message...",
        PromptVariant::FeedbackGuided => "Generating commit message from your feedback...",
    }
}

fn regeneration_title(variant: PromptVariant) -> &'static str {
    match variant {
        PromptVariant::Standard => "Regenerated Commit Message",
        PromptVariant::Detailed => "Generated Detailed Commit Message",
        PromptVariant::Summarize => "Summarized Commit Message",
        PromptVariant::FeedbackGuided => "Feedback-Based Commit Message",
    }
}
