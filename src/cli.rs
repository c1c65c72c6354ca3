use crate::services::config_store::parse_pair;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textkit", version, about = "Line-oriented file utilities")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Log progress to stderr (-v info, -vv debug); RUST_LOG overrides"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sum `<token> <integer>` lines per token into a sorted report
    Sales { input: PathBuf, output: PathBuf },
    /// Count indented task lines under each project header
    Outline { input: PathBuf, output: PathBuf },
    /// Write a grid of sequential integers starting at 1
    Grid {
        output: PathBuf,
        #[arg(long)]
        rows: usize,
        #[arg(long)]
        cols: usize,
    },
    /// Append a timestamped line to a log file
    Log { file: PathBuf, message: String },
    /// Replace every literal occurrence of OLD with NEW
    Replace {
        input: PathBuf,
        output: PathBuf,
        old: String,
        new: String,
    },
    /// Read and edit flat key=value config files
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print every key=value pair in file order
    Show {
        file: PathBuf,
    },
    /// Print the value stored under KEY
    Get {
        file: PathBuf,
        key: String,
    },
    /// Add or overwrite pairs, creating the file if needed
    Set {
        file: PathBuf,
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
    },
}
