//! Stratus CLI
//!
//! Developer tool for compiling and inspecting service manifests.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Stratus - declarative gateway deployment compiler
#[derive(Parser)]
#[command(name = "stratus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service manifest path
    #[arg(short, long, default_value = "stratus.yaml")]
    manifest: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile the manifest into a stack template
    Compile {
        /// Write the template JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Target stage
        #[arg(long, default_value = "dev")]
        stage: String,

        /// Target region
        #[arg(long, default_value = "us-east-1")]
        region: String,
    },

    /// Validate the manifest without emitting a template
    Validate {
        /// Target stage
        #[arg(long, default_value = "dev")]
        stage: String,

        /// Target region
        #[arg(long, default_value = "us-east-1")]
        region: String,
    },

    /// Show the service's functions and declared endpoints
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Compile {
            output,
            stage,
            region,
        } => {
            commands::compile::run(&cli.manifest, &stage, &region, output.as_deref())?;
        }
        Commands::Validate { stage, region } => {
            commands::validate::run(&cli.manifest, &stage, &region)?;
        }
        Commands::Info => {
            commands::info::run(&cli.manifest)?;
        }
    }

    Ok(())
}
