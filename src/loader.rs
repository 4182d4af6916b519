//! Template loading for readeck-shortcuts.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Trait for loading template text from different sources.
pub trait TemplateLoader {
    /// Returns the raw template text.
    fn load(&self) -> Result<String>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    /// Creates a new LocalLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// Reads the template as UTF-8 text.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the path doesn't exist
    /// * `Error::TemplateReadError` for any other read failure, including
    ///   invalid UTF-8 and the path being a directory
    fn load(&self) -> Result<String> {
        let path = self.path.as_ref();
        debug!("Reading template from '{}'.", path.display());

        let display = path.display().to_string();
        fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => Error::TemplateNotFound { path: display },
            _ => Error::TemplateReadError {
                path: display,
                source,
            },
        })
    }
}

/// Reads the template at `path`.
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<String> {
    LocalLoader::new(path).load()
}
