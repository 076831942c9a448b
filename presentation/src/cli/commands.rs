//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for quizcheck
#[derive(Parser, Debug)]
#[command(name = "quizcheck")]
#[command(author, version, about = "Answer-key validation service for generated quiz questions")]
#[command(long_about = r#"
quizcheck serves two endpoints over HTTP:

  POST /api/questions   Generate a batch of questions and keep only those
                        whose answer key a delegate solve confirms
  POST /api/check       Decide whether a user's pick is the correct choice

Configuration files are loaded from (in priority order):
1. QUIZCHECK_* environment variables
2. --config <path>     Explicit config file
3. ./quizcheck.toml    Project-level config
4. ~/.config/quizcheck/config.toml   Global config

The delegate API key is read from OPENAI_API_KEY unless configured otherwise.

Example:
  quizcheck --bind 0.0.0.0:8787 -v
  quizcheck --config ./staging.toml
"#)]
pub struct Cli {
    /// Address to listen on (overrides [server] bind)
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
