//! Tarefas - Main Entry Point
//!
//! Loads a task list file and prints the tasks selected by a filter.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use tarefas::formatting;
use tarefas::{Filter, Format, TaskFile};
use tracing_subscriber::EnvFilter;

/// Tarefas - list the tasks of a todo file by filter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task list file (.toml or .json)
    file: PathBuf,

    /// Filter to apply: Todas, Pendentes or Encerradas
    #[arg(long, env = "TAREFAS_FILTER", default_value_t = Filter::All)]
    filter: Filter,

    /// File format (toml or json); inferred from the extension when omitted
    #[arg(long)]
    format: Option<Format>,

    /// Print the number of tasks per filter instead of the list
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    // RUST_LOG when set, warn otherwise
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let mut file = TaskFile::new(&args.file);
    if let Some(format) = args.format {
        file = file.with_format(format);
    }

    let list = file
        .load()
        .with_context(|| format!("Failed to load {}", file.path().display()))?;

    if args.summary {
        print!("{}", formatting::format_summary(&list));
    } else {
        let tasks = list.filtered(args.filter);
        println!("{}", formatting::format_tasks(&tasks, args.filter));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_filter() {
        let args = Args::try_parse_from(["tarefas", "tasks.toml"]).unwrap();
        assert_eq!(args.filter, Filter::All);
        assert_eq!(args.format, None);
        assert!(!args.summary);
    }

    #[test]
    fn test_args_accepts_labels() {
        let args =
            Args::try_parse_from(["tarefas", "tasks.json", "--filter", "Encerradas"]).unwrap();
        assert_eq!(args.filter, Filter::Completed);
    }

    #[test]
    fn test_args_rejects_unknown_filter() {
        let err = Args::try_parse_from(["tarefas", "tasks.toml", "--filter", "Done"]).unwrap_err();
        assert!(err.to_string().contains("Valid filters: Todas, Pendentes, Encerradas"));
    }

    #[test]
    fn test_args_format_override() {
        let args = Args::try_parse_from(["tarefas", "tasks.txt", "--format", "json"]).unwrap();
        assert_eq!(args.format, Some(Format::Json));
    }
}
