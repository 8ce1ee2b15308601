//! webcc CLI - compile WebC components to framework components.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use commands::compile::{CompileArgs, Outcome};

#[derive(Parser)]
#[command(name = "webcc")]
#[command(about = "CLI to compile WebC components to framework components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to webcc.toml config file
    #[arg(short, long, default_value = "webcc.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile WebC components to a target framework
    Compile(CompileArgs),

    /// List supported target frameworks
    Targets,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Compile(args) => match commands::compile::run(args, &config).await? {
            Outcome::UnsupportedTarget => Ok(ExitCode::from(2)),
            Outcome::Compiled(_) | Outcome::DryRun(_) => Ok(ExitCode::SUCCESS),
        },
        Commands::Targets => {
            commands::targets::run();
            Ok(ExitCode::SUCCESS)
        }
    }
}
