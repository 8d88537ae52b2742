//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the configuration as a TOML document
    #[arg(long)]
    pub toml: bool,
}

/// Execute the config command
///
/// Takes the configuration rather than services so it works before the
/// corpus has been loaded.
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  corpus:");
            println!("    path: {}", config.corpus.path.display());
            println!("  search:");
            println!("    default_k: {}", config.search.default_k);
            println!("    max_k: {}", config.search.max_k);
            println!("  server:");
            println!("    bind: {}", config.bind_addr());
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }

    Ok(())
}
