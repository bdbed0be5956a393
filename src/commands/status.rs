//! Styled working-tree status from `git status --porcelain`.

use anyhow::Result;
use console::style;

use crate::git::Git;

pub fn handle() -> Result<()> {
    let git = Git::open_current()?;

    println!("{}", style("Git Status").bold().underlined());
    println!();

    if let Ok(branch) = git.current_branch()
        && !branch.is_empty()
    {
        println!(
            "{} On branch {}",
            style("ℹ").blue().bold(),
            style(&branch).cyan()
        );
        println!();
    }

    let output = git.run(["status", "--porcelain"], "status")?;
    if output.trim().is_empty() {
        println!("{} Working tree clean", style("✓").green().bold());
        println!("No changes to commit.");
        return Ok(());
    }

    let mut staged = Vec::new();
    let mut unstaged = Vec::new();
    let mut untracked = Vec::new();

    for line in output.lines() {
        if line.len() < 3 {
            continue;
        }
        // Porcelain format: XY <path>, X = index status, Y = worktree status.
        let (code, name) = line.split_at(2);
        let name = name.trim_start();
        if code == "??" {
            untracked.push(name);
            continue;
        }
        let mut flags = code.chars();
        let index_flag = flags.next().unwrap_or(' ');
        let worktree_flag = flags.next().unwrap_or(' ');
        if index_flag != ' ' {
            staged.push(name);
        }
        if worktree_flag != ' ' {
            unstaged.push(name);
        }
    }

    print_section("Staged changes", &staged);
    print_section("Unstaged changes", &unstaged);
    print_section("Untracked files", &untracked);

    Ok(())
}

fn print_section(title: &str, files: &[&str]) {
    if files.is_empty() {
        return;
    }
    println!("{}", style(title).bold());
    for file in files {
        println!("  {file}");
    }
    println!();
}
