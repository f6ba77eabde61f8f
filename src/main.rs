//! # weather-chat
//!
//! Terminal chat client for a remote weather agent endpoint.
//!
//! ## Features
//! - Single prompt mode with `-p` or `--prompt`
//! - Interactive terminal UI (TUI) with delivery status, search, and export
//! - Connectivity indicator gating sends while the endpoint is unreachable

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Completions { shell }) => {
            cli::generate(
                shell,
                &mut Args::command(),
                core::app::NAME,
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        Some(Commands::Config) => {
            print_config(args.endpoint.as_deref());
            return Ok(());
        }
        None => {}
    }

    // User-friendly message on config errors; exit uses Display not Debug.
    let config = core::config::load(args.endpoint.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    if args.prompt.is_some() {
        return run::run_single_prompt(&args, &config).await;
    }

    run::launch_tui(config).await
}

/// `config` subcommand: endpoint and env status, without requiring a valid
/// configuration.
fn print_config(endpoint_override: Option<&str>) {
    println!("{} {}", core::app::NAME, core::app::VERSION);
    match core::config::load(endpoint_override) {
        Ok(config) => {
            println!("endpoint:   {}", config.endpoint);
            println!("bell:       {}", if config.bell { "on" } else { "off" });
            println!(
                "timestamps: {}",
                if config.show_timestamps { "on" } else { "off" }
            );
            println!(
                "theme:      {}",
                if config.light_theme { "light" } else { "dark" }
            );
        }
        Err(e) => {
            println!("endpoint:   (unconfigured: {})", e);
        }
    }
    match core::paths::cache_dir() {
        Some(dir) => println!("log file:   {}", dir.join("weather-chat.log").display()),
        None => println!("log file:   (no cache directory)"),
    }
}
