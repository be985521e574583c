use super::open_registry;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_common::find_instance;
use pagekit_model::Document;

#[derive(Debug, Args)]
pub struct CaptureArgs {
    /// Id of the instance to capture
    pub instance_id: String,

    /// Display name for the prebuilt component
    #[arg(short, long)]
    pub name: String,

    /// Page document to read (overrides config)
    #[arg(short, long)]
    pub document: Option<String>,
}

pub fn capture(args: CaptureArgs, cwd: &str) -> Result<()> {
    let name = validate_name(&args.name)?;

    let config = Config::load(cwd)?;
    let document_path = config
        .get_document(cwd, args.document.as_deref())
        .ok_or_else(|| {
            anyhow!(
                "No document given. Pass --document or set \"document\" in {}",
                DEFAULT_CONFIG_NAME
            )
        })?;

    let doc = Document::load(&document_path)
        .map_err(|e| anyhow!("Cannot read {}: {}", document_path.display(), e))?;

    let instance = find_instance(&doc.root, &args.instance_id).ok_or_else(|| {
        anyhow!(
            "Instance {} not found in {}",
            args.instance_id,
            document_path.display()
        )
    })?;

    let mut registry = open_registry(cwd)?;
    let record = registry.add(name, instance, &doc.styles);

    println!(
        "{} Captured {} as {}",
        "✓".green(),
        instance.display_name().cyan(),
        name.bright_white().bold()
    );
    println!("   Id:     {}", record.id());
    println!("   Styles: {}", record.styles().len());

    registry.flush()?;
    Ok(())
}

/// A display name must contain something other than whitespace
fn validate_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(anyhow!("Please enter a name for the component"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::{init, InitArgs};

    #[test]
    fn test_rejects_blank_names() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert_eq!(validate_name(" Card ").unwrap(), " Card ");
    }

    #[test]
    fn test_capture_from_initialized_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        init(
            InitArgs {
                storage_dir: ".pagekit".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        capture(
            CaptureArgs {
                instance_id: "card".to_string(),
                name: "Card".to_string(),
                document: None,
            },
            &cwd,
        )
        .unwrap();

        let registry = open_registry(&cwd).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.records()[0].name(), "Card");
        assert_eq!(registry.records()[0].styles().len(), 2);
        assert!(registry.is_linked("card"));
    }

    #[test]
    fn test_capture_unknown_instance_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        init(
            InitArgs {
                storage_dir: ".pagekit".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let result = capture(
            CaptureArgs {
                instance_id: "nope".to_string(),
                name: "Card".to_string(),
                document: None,
            },
            &cwd,
        );

        assert!(result.is_err());
        assert!(open_registry(&cwd).unwrap().is_empty());
    }
}
