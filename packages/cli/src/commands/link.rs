use super::open_registry;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Id of the live instance
    pub instance_id: String,
}

pub fn link(args: LinkArgs, cwd: &str) -> Result<()> {
    let mut registry = open_registry(cwd)?;

    if registry.mark_linked(&args.instance_id) {
        println!("{} Linked {}", "✓".green(), args.instance_id.cyan());
    } else {
        println!("{} {} is already linked", "•".dimmed(), args.instance_id.cyan());
    }

    registry.flush()?;
    Ok(())
}

pub fn unlink(args: LinkArgs, cwd: &str) -> Result<()> {
    let mut registry = open_registry(cwd)?;

    if registry.unmark_linked(&args.instance_id) {
        println!("{} Unlinked {}", "✓".green(), args.instance_id.cyan());
    } else {
        println!("{} {} was not linked", "•".dimmed(), args.instance_id.cyan());
    }

    registry.flush()?;
    Ok(())
}

pub fn status(args: LinkArgs, cwd: &str) -> Result<()> {
    let registry = open_registry(cwd)?;

    if registry.is_linked(&args.instance_id) {
        println!("{} {} is linked", "✓".green(), args.instance_id.cyan());
        for record in registry.records_for_instance(&args.instance_id) {
            println!("   {} {}", record.id().dimmed(), record.name());
        }
    } else {
        println!("{} {} is not linked", "✗".red(), args.instance_id.cyan());
    }

    Ok(())
}
