//! Stage files, spinner-wrapped.

use anyhow::{Result, bail};
use console::style;

use crate::git::Git;
use crate::progress::with_spinner_blocking;

pub async fn handle(all: bool, paths: Vec<String>) -> Result<()> {
    let git = Git::open_current()?;

    if !all && paths.is_empty() {
        bail!("no files specified; use --all or provide paths");
    }

    let targets: Vec<String> = if all { vec![".".into()] } else { paths };
    {
        let git = git.clone();
        with_spinner_blocking("Adding files...", move || {
            let mut args: Vec<String> = vec!["add".into()];
            args.extend(targets);
            git.run(args, "add")
        })
        .await?;
    }

    println!("{} Files staged", style("✓").green().bold());
    Ok(())
}
