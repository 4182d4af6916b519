//! Error handling for readeck-shortcuts.
//! Defines the error taxonomy shared by the driver and the synthesizer.

use std::io;
use thiserror::Error;

/// Errors that can occur while generating a shortcuts configuration.
///
/// Every variant is terminal for a run: the driver reports it and stops
/// without writing an output file.
#[derive(Error, Debug)]
pub enum Error {
    /// The template path does not exist.
    #[error("Template file '{path}' not found.")]
    TemplateNotFound { path: String },

    /// The template exists but could not be read as UTF-8 text.
    #[error("Error reading template file '{path}': {source}.")]
    TemplateReadError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template, after placeholder substitution, is not valid JSON.
    #[error("Error parsing generated JSON: {0}.")]
    TemplateParseError(#[source] serde_json::Error),

    /// The parsed template lacks the structure shortcuts are appended to.
    #[error("Template structure error: {0}.")]
    StructureError(String),

    /// The options file is missing, unreadable or malformed.
    #[error("Error loading configuration file '{path}': {reason}.")]
    ConfigFileError { path: String, reason: String },

    #[error("Auth token is required (use --auth-token or the config file).")]
    MissingAuthToken,

    /// A label spec reached the synthesizer with a blank `label`.
    #[error("Custom label #{position} has an empty label.")]
    EmptyLabel { position: usize },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
