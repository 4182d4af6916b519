//! readeck-shortcuts builds HTTP Shortcuts configurations for saving
//! articles to a Readeck server.
//! A JSON template is filled with generated identifiers and user options,
//! then one extra shortcut is appended per requested label.

/// Command-line interface module
pub mod cli;

/// Options loading (JSON/YAML files or inline flags) and label specs
pub mod config;

/// Fixed values shared by the generator and the CLI
pub mod constants;

/// Error types and handling
pub mod error;

/// Identifier generation
pub mod ids;

/// Template file loading
pub mod loader;

/// Placeholder token table and text substitution
pub mod placeholder;

/// Typed shortcut records and label defaulting
pub mod shortcut;

/// Core transformation from template text to configuration
pub mod synthesizer;

/// Pretty-printed output
pub mod writer;
