//! Direct passthrough to git subcommands with streamed output.

use anyhow::Result;

use crate::git::Git;

pub fn handle(subcommand: &str, args: &[String]) -> Result<()> {
    let git = Git::open_current()?;
    git.passthrough(subcommand, args)?;
    Ok(())
}
