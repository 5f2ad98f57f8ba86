//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// LLM-assisted script breakdown and shot-list authoring.
#[derive(Debug, Parser)]
#[command(name = "slate", version, about)]
pub struct Cli {
    /// Gemini model to use.
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Break a script down into production element categories.
    Breakdown {
        /// Script file (plain text or Fountain).
        script: PathBuf,
        /// Write the breakdown sheet to this CSV file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Generate a shot list from a script.
    Shots {
        /// Script file (plain text or Fountain).
        script: PathBuf,
        /// Scene label for shots the model leaves unlabeled.
        #[arg(long)]
        scene: Option<String>,
        /// Write the shot list to this CSV file.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Analyze the tone of a script.
    Tone {
        /// Script file (plain text or Fountain).
        script: PathBuf,
    },
    /// Summarize a script.
    Summarize {
        /// Script file (plain text or Fountain).
        script: PathBuf,
        /// Summary length: short, medium, or long.
        #[arg(long, default_value = "medium")]
        length: String,
    },
}
