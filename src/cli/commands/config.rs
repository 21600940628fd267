//! `pokedex config` command - Inspect effective configuration

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::load_config;
use crate::cli::{GlobalOpts, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (defaults, file, environment, flags)
    Show,

    /// Print the path of the global config file
    Path,
}

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(global),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show(global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&config).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            let timeout = config
                .timeout_secs
                .map(|s| format!("{}s", s))
                .unwrap_or_else(|| "none".to_string());
            println!("{}: {}", style("api_url").bold(), config.api_url());
            println!("{}: {}", style("artwork_url").bold(), config.artwork_url());
            println!("{}: {}", style("limit").bold(), config.limit());
            println!("{}: {}", style("language").bold(), config.language());
            println!("{}: {}", style("timeout").bold(), timeout);
            println!(
                "{}: {}",
                style("default_format").bold(),
                config.default_format.as_deref().unwrap_or("auto")
            );
        }
    }

    Ok(())
}

fn run_path() -> Result<()> {
    let path = crate::core::Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine a config directory"))?;
    println!("{}", path.display());
    Ok(())
}
