//! Typed shortcut records as understood by the HTTP Shortcuts app.

use crate::config::LabelSpec;
use crate::constants::{
    BOOKMARKS_API_PATH, DEFAULT_ICON_NAME, FAILURE_EMOJI, LABEL_EMOJI, REQUEST_TIMEOUT_MS,
};
use crate::error::Result;
use crate::placeholder::variable_ref;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum HttpMethod {
    #[serde(rename = "POST")]
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Authentication {
    Bearer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UiType {
    Toast,
}

/// Which part of the HTTP response is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseOutput {
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHandling {
    pub success_message: String,
    pub success_output: ResponseOutput,
    pub ui_type: UiType,
    pub failure_output: ResponseOutput,
    pub failure_message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repetitions {
    pub count: u32,
    pub interval: u64,
}

/// One HTTP shortcut entry.
///
/// Field order follows the app's own export format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutRecord {
    pub auth_token: String,
    pub authentication: Authentication,
    pub body_content: String,
    pub content_type: String,
    pub description: String,
    pub icon_name: String,
    pub id: String,
    pub method: HttpMethod,
    pub name: String,
    pub response_handling: ResponseHandling,
    pub url: String,
    pub timeout: u64,
    pub follow_redirects: bool,
    pub accept_all_certificates: bool,
    pub accept_cookies: bool,
    pub require_confirmation: bool,
    pub launcher_shortcut: bool,
    pub secondary_launcher_shortcut: bool,
    pub quick_settings_tile_shortcut: bool,
    pub wifi_ssid: String,
    pub delay: u64,
    pub repetitions: Repetitions,
}

/// Identifiers of the template variables a label shortcut refers to.
#[derive(Debug, Clone, Copy)]
pub struct VariableIds<'a> {
    pub server_url: &'a str,
    pub article_title: &'a str,
    pub article_url: &'a str,
}

/// JSON payload posted to the bookmarks endpoint.
#[derive(Debug, Serialize)]
struct BookmarkRequest<'a> {
    labels: [&'a str; 1],
    title: String,
    url: String,
}

fn or_default(value: &Option<String>, fallback: impl FnOnce() -> String) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback(),
    }
}

impl LabelSpec {
    pub fn display_name(&self) -> String {
        or_default(&self.name, || format!("{LABEL_EMOJI} {}", self.label))
    }

    pub fn display_icon(&self) -> String {
        or_default(&self.icon_name, || DEFAULT_ICON_NAME.to_string())
    }

    pub fn display_description(&self) -> String {
        or_default(&self.description, || {
            format!("Save article with {} label", self.label)
        })
    }

    pub fn display_success_message(&self) -> String {
        or_default(&self.success_message, || {
            format!("{LABEL_EMOJI} Article saved with {} label!", self.label)
        })
    }

    pub fn display_failure_message(&self) -> String {
        or_default(&self.failure_message, || {
            format!(
                "{FAILURE_EMOJI} Failed to save article with {} label.",
                self.label
            )
        })
    }
}

impl ShortcutRecord {
    /// Builds the shortcut that saves the shared article under `spec.label`.
    ///
    /// Optional fields of `spec` that are absent or empty fall back to
    /// label-derived defaults. The request body and target URL reference
    /// the template variables in `vars`.
    pub fn for_label(
        spec: &LabelSpec,
        id: String,
        auth_token: &str,
        vars: VariableIds<'_>,
    ) -> Result<Self> {
        let body = BookmarkRequest {
            labels: [spec.label.as_str()],
            title: variable_ref(vars.article_title),
            url: variable_ref(vars.article_url),
        };

        Ok(Self {
            auth_token: auth_token.to_string(),
            authentication: Authentication::Bearer,
            body_content: serde_json::to_string_pretty(&body)?,
            content_type: "application/json".to_string(),
            description: spec.display_description(),
            icon_name: spec.display_icon(),
            id,
            method: HttpMethod::Post,
            name: spec.display_name(),
            response_handling: ResponseHandling {
                success_message: spec.display_success_message(),
                success_output: ResponseOutput::Message,
                ui_type: UiType::Toast,
                failure_output: ResponseOutput::Message,
                failure_message: spec.display_failure_message(),
            },
            url: format!("{}{BOOKMARKS_API_PATH}", variable_ref(vars.server_url)),
            timeout: REQUEST_TIMEOUT_MS,
            follow_redirects: true,
            accept_all_certificates: false,
            accept_cookies: true,
            require_confirmation: false,
            launcher_shortcut: true,
            secondary_launcher_shortcut: false,
            quick_settings_tile_shortcut: false,
            wifi_ssid: String::new(),
            delay: 0,
            repetitions: Repetitions {
                count: 1,
                interval: 0,
            },
        })
    }
}
