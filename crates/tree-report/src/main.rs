use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use reportree_render::BorderStyle;
use tracing_subscriber::EnvFilter;

use tree_report::commands::{self, DirOptions};
use tree_report::config::Config;

/// Project trees into box-drawn reports, and read such reports back.
#[derive(Parser)]
#[command(name = "tree-report", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Border style: ascii, light, heavy, double or rounded
    #[arg(long, global = true)]
    style: Option<BorderStyle>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report a directory tree
    Dir(DirArgs),

    /// Parse a rendered report and print it as JSON
    Parse {
        /// Report file, or - for stdin
        file: PathBuf,
    },

    /// Check that a rendered report renders back to the same text
    Check {
        /// Report file, or - for stdin
        file: PathBuf,
    },
}

#[derive(Args)]
struct DirArgs {
    /// Directory to report on
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Nesting levels to show
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Only show entries whose name passes <op>:<value>, e.g. ends-with:.rs
    #[arg(long, value_name = "OP:VALUE")]
    filter: Option<String>,

    /// Omit the header row
    #[arg(long)]
    no_header: bool,

    /// Print the report as JSON instead of a grid
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(style) = cli.style {
        config.style = style;
    }
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        Command::Dir(args) => {
            let options = DirOptions {
                max_depth: args.max_depth.unwrap_or(config.max_depth),
                header: config.header && !args.no_header,
                filter: args.filter.as_deref().map(commands::name_filter).transpose()?,
            };
            let column = commands::dir_report(&args.path, &options)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&column)?);
            } else {
                println!("{}", commands::render(&column, config.style));
            }
        }
        Command::Parse { file } => {
            let text = read_input(&file)?;
            println!("{}", commands::to_json(&text)?);
        }
        Command::Check { file } => {
            let text = read_input(&file)?;
            let outcome = commands::check(&text, config.style)?;
            if !outcome.fixed_point {
                println!("{}: parses, but renders differently in {} style", file.display(), outcome.style);
                return Ok(ExitCode::FAILURE);
            }
            println!("{}: ok", file.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
