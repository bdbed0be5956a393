//! Manual commit with an interactive message prompt.

use anyhow::Result;
use console::style;
use dialoguer::Input;

use crate::git::{Git, PushOutcome};
use crate::progress::with_spinner_blocking;

pub async fn handle(message: Option<String>, add: bool, push: bool) -> Result<()> {
    let git = Git::open_current()?;

    println!("{}", style("Git Commit").bold().underlined());
    println!();

    if add {
        let staged = git.clone();
        with_spinner_blocking("Staging all files...", move || staged.stage_all()).await?;
        println!("{} Files staged", style("✓").green().bold());
    }

    let message = match message {
        Some(message) => message,
        None => {
            if let Ok(status) = git.run(["status", "--porcelain"], "status")
                && !status.trim().is_empty()
            {
                println!("{}", style("Files to be committed:").bold());
                for line in status.lines() {
                    println!("  {line}");
                }
                println!();
            }

            Input::new()
                .with_prompt("Commit message")
                .validate_with(|input: &String| {
                    if input.trim().len() < 3 {
                        Err("commit message too short")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?
        }
    };

    {
        let git = git.clone();
        let message = message.clone();
        with_spinner_blocking("Creating commit...", move || git.commit(&message)).await?;
    }
    println!("{} Commit created successfully", style("✓").green().bold());

    if push {
        let pushed = {
            let git = git.clone();
            with_spinner_blocking("Pushing changes to remote...", move || git.push()).await?
        };
        match pushed {
            PushOutcome::Pushed => println!("{} Changes pushed", style("✓").green().bold()),
            PushOutcome::UpstreamSet => println!(
                "{} Upstream set and changes pushed",
                style("✓").green().bold()
            ),
        }
    }
    Ok(())
}
