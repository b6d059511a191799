//! Finch Control
//!
//! Command-line front end for Finch command programs: record a program,
//! inspect saved programs, replay one against the robot, or run a talent
//! show routine.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod echo;
mod error;
mod logging;
mod storage;

use commands::Context;
use config::ControlConfig;
use error::Result;

#[derive(Debug, Parser)]
#[command(name = "finch-control")]
#[command(about = "Author, store and replay Finch robot programs", long_about = None)]
struct Cli {
    /// Config file (default: ./finch.toml, then built-in defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Program directory, overrides data_dir from the config
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Author a program and save it
    Record(commands::record::RecordArgs),
    /// Print a saved program
    Show(commands::show::ShowArgs),
    /// List saved programs
    List,
    /// Execute a saved program
    Run(commands::run::RunArgs),
    /// Run a talent show routine
    Talent(commands::talent::TalentArgs),
    /// Read temperature and light sensors once
    Sense,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = ControlConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let ctx = Context::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Record(args) => commands::record::execute(&ctx, args, &mut out),
        Commands::Show(args) => commands::show::execute(&ctx, args, &mut out),
        Commands::List => commands::list::execute(&ctx, &mut out),
        Commands::Run(args) => commands::run::execute(&ctx, args, &mut out),
        Commands::Talent(args) => commands::talent::execute(&ctx, args, &mut out),
        Commands::Sense => commands::sense::execute(&ctx, &mut out),
    }
}
