//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod assets;
mod config_cmd;
mod render;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};
use crate::server::Page;

#[derive(Parser)]
#[command(name = "b3x")]
#[command(about = "Benchmark3x landing and sign-in pages")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory containing the site images (overrides config file)
    #[arg(short, long, global = true, env = "BENCHMARK3X_ASSETS")]
    assets: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: port, host, or host:port (defaults to config, then 127.0.0.1:3030)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Render a page to a standalone HTML file
    Render {
        /// Page to render
        #[arg(short, long, value_enum, default_value_t = Page::Landing)]
        page: Page,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which images are inlined and which fall back to placeholders
    Assets,

    /// Show the effective configuration
    Config,
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        assets_dir: cli.assets,
    };
    let (settings, config) = load_settings_with_options(options).await;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| settings.bind.clone());
            serve::cmd_serve(&settings, &bind).await
        }
        Commands::Render { page, output } => render::cmd_render(&settings, page, output.as_deref()),
        Commands::Assets => assets::cmd_assets(&settings),
        Commands::Config => config_cmd::cmd_config_show(&settings, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_page_argument() {
        let cli = Cli::try_parse_from(["b3x", "render", "--page", "login"]).unwrap();
        match cli.command {
            Commands::Render { page, output } => {
                assert_eq!(page, Page::Login);
                assert!(output.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_defaults_to_landing() {
        let cli = Cli::try_parse_from(["b3x", "render"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Render {
                page: Page::Landing,
                ..
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["b3x", "serve", "--bind", "8080", "-v", "--assets", "img"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.assets, Some(PathBuf::from("img")));
        assert!(matches!(cli.command, Commands::Serve { bind: Some(ref b) } if b == "8080"));
    }
}
