use super::open_registry;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_prebuilt::PrebuiltRecord;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Id of the prebuilt component
    pub record_id: String,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let registry = open_registry(cwd)?;

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(registry.records())?);
        }
        "text" => {
            if registry.is_empty() {
                println!("{}", "No prebuilt components yet".yellow());
                return Ok(());
            }

            println!("{}", "📦 Prebuilt components".bright_blue().bold());
            for record in registry.records() {
                println!("  {}", summary(record));
            }
            println!();
            println!("  Linked instances: {}", registry.linked_instance_ids().len());
        }
        other => return Err(anyhow!("Unknown format: {}. Use: text or json", other)),
    }

    Ok(())
}

pub fn show(args: ShowArgs, cwd: &str) -> Result<()> {
    let registry = open_registry(cwd)?;
    let record = registry
        .get(&args.record_id)
        .ok_or_else(|| anyhow!("No prebuilt component with id {}", args.record_id))?;

    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn summary(record: &PrebuiltRecord) -> String {
    let name = if record.name().is_empty() {
        "(unnamed)".dimmed().to_string()
    } else {
        record.name().bright_white().bold().to_string()
    };

    format!(
        "{} {} ← {} · {} styles · {}",
        record.id().dimmed(),
        name,
        record.instance_id().cyan(),
        record.styles().len(),
        record.created_at().format("%Y-%m-%d %H:%M")
    )
}
