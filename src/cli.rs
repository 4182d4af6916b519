//! Command-line interface implementation for readeck-shortcuts.
//! Provides argument parsing and help text formatting using clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::{load_options, Options};
use crate::constants::{
    DEFAULT_LABEL, DEFAULT_OUTPUT_PATH, DEFAULT_SERVER_URL, DEFAULT_TEMPLATE_PATH,
};
use crate::error::{default_error_handler, Error, Result};

const AFTER_HELP: &str = r#"Examples:
  # Using a configuration file
  readeck-shortcuts --config my-config.json

  # Using command line options
  readeck-shortcuts --auth-token "your-token-here" --labels "Work,Tech,Personal"

Configuration file format:
{
  "authToken": "your-auth-token-here",
  "serverUrl": "http://your-server:8090",
  "defaultLabel": "inbox",
  "customLabels": [
    {
      "label": "Work",
      "name": "💼 Work",
      "iconName": "flat_color_briefcase_2",
      "description": "Save article with work-related label"
    },
    {
      "label": "Tech",
      "name": "💻 Tech",
      "iconName": "flat_color_computer_2"
    }
  ]
}"#;

/// Command-line arguments structure for readeck-shortcuts.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate Readeck shortcuts configuration from template",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Path to JSON (or YAML) configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to template file
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Readeck API authentication token
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Readeck server URL
    #[arg(long, default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Default label for articles
    #[arg(long, default_value = DEFAULT_LABEL)]
    pub default_label: String,

    /// Comma-separated list of custom labels
    #[arg(long)]
    pub labels: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the options for this run.
    ///
    /// A configuration file takes precedence; inline values are only used
    /// when no file is given.
    pub fn resolve_options(&self) -> Result<Options> {
        match &self.config {
            Some(path) => load_options(path),
            None => Options::from_inline(
                self.auth_token.clone(),
                Some(self.server_url.clone()),
                Some(self.default_label.clone()),
                self.labels.as_deref(),
            ),
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 after printing help if no arguments were given
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    if std::env::args_os().len() <= 1 {
        if let Err(err) = Args::command().print_help() {
            default_error_handler(Error::IoError(err));
        }
        std::process::exit(0);
    }

    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
