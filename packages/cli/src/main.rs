mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    capture, init, link, list, remove, rename, show, status, unlink, CaptureArgs, InitArgs,
    LinkArgs, ListArgs, RemoveArgs, RenameArgs, ShowArgs,
};

/// Pagekit CLI - capture and manage prebuilt components
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log registry and storage activity
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new Pagekit project
    Init(InitArgs),

    /// Capture an instance and its styles as a prebuilt component
    Capture(CaptureArgs),

    /// List prebuilt components
    List(ListArgs),

    /// Print one prebuilt component as JSON
    Show(ShowArgs),

    /// Rename a prebuilt component
    Rename(RenameArgs),

    /// Remove a prebuilt component
    Remove(RemoveArgs),

    /// Flag an instance as derived from a prebuilt component
    Link(LinkArgs),

    /// Clear the prebuilt flag of an instance
    Unlink(LinkArgs),

    /// Check whether an instance is flagged as prebuilt
    Status(LinkArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Capture(args) => capture(args, &cwd),
        Command::List(args) => list(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::Rename(args) => rename(args, &cwd),
        Command::Remove(args) => remove(args, &cwd),
        Command::Link(args) => link(args, &cwd),
        Command::Unlink(args) => unlink(args, &cwd),
        Command::Status(args) => status(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
