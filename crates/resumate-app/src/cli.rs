use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use resumate_config::Config;
use resumate_types::Role;

#[derive(Parser)]
#[command(name = "resumate", version)]
#[command(about = "Send a resume to the analysis service and see how it matches a job", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Analysis endpoint (overrides ANALYZER_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Request timeout in seconds, 0 waits forever
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in the form interactively (default)
    Form,

    /// Submit once and print the result
    Analyze(AnalyzeArgs),

    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Resume file to upload
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Job requirements, comma-separated
    #[arg(short, long, default_value = "")]
    pub requirements: String,

    /// general, teacher, admin or it_support
    #[arg(long, default_value = "general")]
    pub role: Role,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Flags win over environment values
    pub fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.url {
            config.service.url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.timeout_seconds = timeout;
        }
        if self.verbose {
            config.log_filter = "debug".to_string();
        }
    }
}
