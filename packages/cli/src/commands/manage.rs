use super::open_registry;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagekit_common::KeyValueStorage;
use pagekit_prebuilt::{PrebuiltRecord, PrebuiltRegistry};

#[derive(Debug, Args)]
pub struct RenameArgs {
    /// Id of the prebuilt component
    pub record_id: String,

    /// New display name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Id of the prebuilt component
    pub record_id: String,
}

pub fn rename(args: RenameArgs, cwd: &str) -> Result<()> {
    let mut registry = open_registry(cwd)?;

    if registry.rename(&args.record_id, args.name.as_str()) {
        println!("{} Renamed {} to {:?}", "✓".green(), args.record_id, args.name);
    } else {
        println!("{} No prebuilt component with id {}", "⚠️".yellow(), args.record_id);
    }

    registry.flush()?;
    Ok(())
}

pub fn remove(args: RemoveArgs, cwd: &str) -> Result<()> {
    let mut registry = open_registry(cwd)?;

    match remove_record(&mut registry, &args.record_id) {
        Some((record, unlinked)) => {
            println!(
                "{} Removed {} ({})",
                "✓".green(),
                record.name().bright_white(),
                record.id()
            );
            if unlinked {
                println!("   Unlinked instance {}", record.instance_id().cyan());
            }
        }
        None => {
            println!("{} No prebuilt component with id {}", "⚠️".yellow(), args.record_id);
        }
    }

    registry.flush()?;
    Ok(())
}

/// Remove a record, reporting whether its instance lost its link as a result
fn remove_record<S: KeyValueStorage>(
    registry: &mut PrebuiltRegistry<S>,
    record_id: &str,
) -> Option<(PrebuiltRecord, bool)> {
    let was_linked = registry
        .get(record_id)
        .map(|record| registry.is_linked(record.instance_id()))?;

    let record = registry.remove(record_id)?;
    let unlinked = was_linked && !registry.is_linked(record.instance_id());
    Some((record, unlinked))
}
