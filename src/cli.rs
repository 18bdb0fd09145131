//! Command-line interface definitions.
//!
//! Defines the CLI arguments using clap, and the stdin prompt used when a
//! path is given neither on the command line nor in the config file.

use crate::config::SlugMode;
use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

/// Glossa glossary generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Glossary source file (asked for when omitted)
    pub input: Option<PathBuf>,

    /// Existing directory the pages are written into (asked for when omitted)
    pub output: Option<PathBuf>,

    /// Config file (default: glossa.toml, if present)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub minify: Option<bool>,

    /// How terms are turned into page file names
    #[arg(long, value_enum)]
    pub slug: Option<SlugMode>,

    /// Directory label placed in front of every generated link
    #[arg(long = "link-prefix")]
    pub link_prefix: Option<String>,
}

/// Print `question` and read one line from stdin, without its line ending.
pub fn prompt(question: &str) -> Result<String> {
    let mut stdout = io::stdout().lock();
    write!(stdout, "{question}")?;
    stdout.flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    Ok(answer.trim_end_matches(['\r', '\n']).to_owned())
}
