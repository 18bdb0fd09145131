//! Glossa - turn a plain-text glossary into cross-linked HTML pages.

mod build;
mod cli;
mod config;
mod glossary;
mod render;
mod utils;

use anyhow::{Result, bail};
use build::generate;
use clap::Parser;
use cli::Cli;
use config::GlossaryConfig;
use std::path::Path;

/// Config file picked up from the working directory when `-C` is not given
const DEFAULT_CONFIG: &str = "glossa.toml";

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let (input, output) = config.paths()?;

    let summary = generate(input, output, &config)?;
    log!(
        "done";
        "{} terms, {} files written to {}",
        summary.terms,
        summary.files,
        summary.output.display()
    );

    Ok(())
}

/// Load configuration, apply CLI overrides and ask for missing paths
fn load_config(cli: &Cli) -> Result<GlossaryConfig> {
    let mut config = match &cli.config {
        Some(path) if !path.exists() => bail!("Config file `{}` not found.", path.display()),
        Some(path) => GlossaryConfig::from_path(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => {
            GlossaryConfig::from_path(Path::new(DEFAULT_CONFIG))?
        }
        None => GlossaryConfig::default(),
    };

    if !config.config_path.as_os_str().is_empty() {
        log!("config"; "using {}", config.config_path.display());
    }

    config.update_with_cli(cli);
    config.validate()?;
    config.fill_missing_paths(cli::prompt)?;

    Ok(config)
}
