use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagekit_model::{ComponentInstance, Document, StyleSource};
use std::fs;
use std::path::PathBuf;

const EXAMPLE_DOCUMENT: &str = "page.json";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory for persisted editor state
    #[arg(short, long, default_value = ".pagekit")]
    pub storage_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagekit project...".bright_blue().bold());

    let document_path = PathBuf::from(cwd).join(EXAMPLE_DOCUMENT);
    if !document_path.exists() {
        fs::write(&document_path, example_document().to_json()?)?;
        println!("  {} Created {}", "✓".green(), EXAMPLE_DOCUMENT);
    }

    let config = Config {
        storage_dir: args.storage_dir,
        document: Some(EXAMPLE_DOCUMENT.to_string()),
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} pagekit capture card --name Card", "$".dimmed());
    println!("  {} pagekit list", "$".dimmed());

    Ok(())
}

fn example_document() -> Document {
    let root = ComponentInstance::new("body", "Body").with_child(
        ComponentInstance::new("card", "Box")
            .with_label("Card")
            .with_style_source("card-local")
            .with_style_source("brand")
            .with_child(
                ComponentInstance::new("card-title", "Heading")
                    .with_style_source("brand"),
            ),
    );

    let mut doc = Document::new(root);
    doc.styles.insert_source("card-local", StyleSource::local());
    doc.styles.insert_source("brand", StyleSource::token("Brand"));
    doc.styles.set_style("card-local", "padding", "16px");
    doc.styles.set_style("card-local", "borderRadius", "8px");
    doc.styles.set_style("brand", "color", "#3366FF");
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_config_and_document() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        init(
            InitArgs {
                storage_dir: "state".to_string(),
                force: false,
            },
            &cwd,
        )
        .unwrap();

        let config = Config::load(&cwd).unwrap();
        assert_eq!(config.storage_dir, "state");
        assert_eq!(config.document.as_deref(), Some(EXAMPLE_DOCUMENT));

        let doc = Document::load(&dir.path().join(EXAMPLE_DOCUMENT)).unwrap();
        assert_eq!(doc, example_document());
    }
}
