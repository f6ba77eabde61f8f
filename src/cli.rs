//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  weather-chat                        Launch the interactive chat TUI
  weather-chat -p \"rain in Oslo?\"     Single prompt, print the reply
  weather-chat -p -                   Read the prompt from stdin
  weather-chat -e http://host/agent   Override WEATHER_AGENT_URL
  weather-chat config                 Show endpoint and env status
  weather-chat completions bash       Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    version,
    about = "Terminal chat client for a weather agent endpoint",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Send a single prompt then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Provide a prompt to get an immediate reply (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Override the agent endpoint URL (takes precedence over WEATHER_AGENT_URL)
    #[arg(short = 'e', long, value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// In prompt mode, print the raw response body instead of the normalized text
    #[arg(long)]
    pub raw: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the configured endpoint and env status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_from_flags() {
        let base = Args::parse_from(["weather-chat"]);
        assert_eq!(base.log_level(), "warn");
        let verbose = Args::parse_from(["weather-chat", "-v"]);
        assert_eq!(verbose.log_level(), "info");
        let debug = Args::parse_from(["weather-chat", "-vv"]);
        assert_eq!(debug.log_level(), "debug");
        let quiet = Args::parse_from(["weather-chat", "-q"]);
        assert_eq!(quiet.log_level(), "error");
    }

    #[test]
    fn prompt_and_endpoint_parse() {
        let args = Args::parse_from(["weather-chat", "-p", "hi", "-e", "http://x/y"]);
        assert_eq!(args.prompt.as_deref(), Some("hi"));
        assert_eq!(args.endpoint.as_deref(), Some("http://x/y"));
        assert!(!args.raw);
    }
}
