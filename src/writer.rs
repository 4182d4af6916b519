//! Serialization of generated configurations to disk.

use crate::error::{Error, Result};
use crate::synthesizer::GeneratedConfig;
use log::debug;
use std::path::Path;

/// Renders the configuration as two-space indented JSON.
///
/// Non-ASCII characters such as the label emoji are kept as-is.
pub fn render_config(config: &GeneratedConfig) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(config.as_value())?;
    rendered.push('\n');
    Ok(rendered)
}

/// Writes the configuration to `dest_path`, creating parent directories.
///
/// The document is rendered before anything touches the filesystem, so a
/// failure leaves no partial file behind.
pub fn write_config<P: AsRef<Path>>(config: &GeneratedConfig, dest_path: P) -> Result<()> {
    let content = render_config(config)?;
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing '{}'.", dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
