//! Options handling for readeck-shortcuts.
//! Options come either from a JSON/YAML file or from inline command-line
//! values combined with defaults.

use crate::constants::{DEFAULT_LABEL, DEFAULT_SERVER_URL};
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fully resolved inputs for one synthesis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Readeck API token. Required and non-empty.
    #[serde(default)]
    pub auth_token: String,

    #[serde(default = "default_server_url")]
    pub server_url: String,

    #[serde(default = "default_label")]
    pub default_label: String,

    /// Labels to synthesize shortcuts for, in output order.
    #[serde(default)]
    pub custom_labels: Vec<LabelSpec>,
}

/// One requested custom label.
///
/// Every field except `label` is optional; absent or empty values fall back
/// to label-derived defaults when the shortcut is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_message: Option<String>,
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

impl LabelSpec {
    /// Whether `label` is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.label.trim().is_empty()
    }

    /// Creates a spec with only the label set.
    pub fn new<S: Into<String>>(label: S) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

impl Options {
    /// Creates options with the given token and every other field defaulted.
    pub fn new<S: Into<String>>(auth_token: S) -> Self {
        Self {
            auth_token: auth_token.into(),
            server_url: default_server_url(),
            default_label: default_label(),
            custom_labels: Vec::new(),
        }
    }

    /// Assembles options from inline command-line values.
    ///
    /// `labels` is the raw comma-separated list, see [`parse_labels`].
    ///
    /// # Errors
    /// * `Error::MissingAuthToken` if no token (or an empty one) was given
    pub fn from_inline(
        auth_token: Option<String>,
        server_url: Option<String>,
        default_label: Option<String>,
        labels: Option<&str>,
    ) -> Result<Self> {
        let auth_token = auth_token
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingAuthToken)?;

        Ok(Self {
            auth_token,
            server_url: server_url.unwrap_or_else(default_server_url),
            default_label: default_label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
            custom_labels: labels.map(parse_labels).unwrap_or_default(),
        })
    }

    /// Checks the invariants serde can't express.
    ///
    /// # Errors
    /// * `Error::MissingAuthToken` if the token is empty
    /// * `Error::ConfigFileError` if a custom label entry has an empty label
    pub fn validate(&self, source: &str) -> Result<()> {
        if self.auth_token.is_empty() {
            return Err(Error::MissingAuthToken);
        }
        if let Some(pos) = self.custom_labels.iter().position(LabelSpec::is_blank) {
            return Err(Error::ConfigFileError {
                path: source.to_string(),
                reason: format!("customLabels[{pos}] has an empty label"),
            });
        }
        Ok(())
    }
}

/// Splits a comma-separated label list into specs.
///
/// Entries are trimmed and empty entries are dropped, so `" Work, ,Tech "`
/// yields two labels.
pub fn parse_labels(labels: &str) -> Vec<LabelSpec> {
    labels
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(LabelSpec::new)
        .collect()
}

fn is_yaml<P: AsRef<Path>>(path: P) -> bool {
    matches!(
        path.as_ref().extension().and_then(|ext| ext.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Parses options file content. YAML is used when `yaml` is set, JSON otherwise.
pub fn parse_options(content: &str, source: &str, yaml: bool) -> Result<Options> {
    let parsed = if yaml {
        serde_yaml::from_str::<Options>(content)
            .map_err(|e| e.to_string())
    } else {
        serde_json::from_str::<Options>(content)
            .map_err(|e| e.to_string())
    };

    let options = parsed.map_err(|reason| Error::ConfigFileError {
        path: source.to_string(),
        reason,
    })?;
    options.validate(source)?;
    Ok(options)
}

/// Loads options from a file.
///
/// Files ending in `.yml` or `.yaml` are read as YAML, anything else as JSON.
///
/// # Errors
/// * `Error::ConfigFileError` if the file is missing, unreadable or malformed
/// * `Error::MissingAuthToken` if the file has no usable `authToken`
pub fn load_options<P: AsRef<Path>>(path: P) -> Result<Options> {
    let path = path.as_ref();
    let source = path.display().to_string();
    if !path.is_file() {
        return Err(Error::ConfigFileError {
            path: source,
            reason: "file not found".to_string(),
        });
    }

    debug!("Loading options from {}", source);
    let content = std::fs::read_to_string(path).map_err(|e| Error::ConfigFileError {
        path: source.clone(),
        reason: e.to_string(),
    })?;

    parse_options(&content, &source, is_yaml(path))
}
