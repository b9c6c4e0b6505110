use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "src/resources";
pub const DEFAULT_OUTPUT: &str = "src/resources/output/result.txt";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_CONFIG_FILE: &str = "stitch.toml";

#[derive(Parser, Debug)]
#[command(
    name = "stitch",
    version,
    about = "Assemble one document from fragments ordered by their require directives"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (defaults to ./stitch.toml when present)"
    )]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Fragment root directory")]
    pub root: Option<PathBuf>,
    #[arg(
        long = "ext",
        global = true,
        help = "Fragment file extension (repeatable)"
    )]
    pub extensions: Vec<String>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "More log output")]
    pub verbose: u8,
    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write every fragment, dependencies first, into the output file
    Build {
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the fragment order without writing anything
    Order,
    /// Print each fragment with the fragments it requires
    Graph,
    /// Validate directives and look for cycles
    Check {
        #[arg(long, default_value_t = false, help = "Fail on unresolved directives")]
        strict: bool,
    },
}
