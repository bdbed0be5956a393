//! Upstream-aware push.

use anyhow::Result;
use console::style;

use crate::git::{Git, PushOutcome};
use crate::progress::with_spinner_blocking;

pub async fn handle() -> Result<()> {
    let git = Git::open_current()?;

    println!("{}", style("Git Push").bold().underlined());
    println!();

    if !git.has_upstream() {
        println!(
            "{} No upstream branch configured",
            style("ℹ").blue().bold()
        );
    }

    let outcome = {
        let git = git.clone();
        with_spinner_blocking("Pushing changes to remote...", move || git.push()).await?
    };

    match outcome {
        PushOutcome::Pushed => println!("{} Changes pushed", style("✓").green().bold()),
        PushOutcome::UpstreamSet => println!(
            "{} Upstream set and changes pushed",
            style("✓").green().bold()
        ),
    }
    Ok(())
}
