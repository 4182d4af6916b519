//! Config synthesis: placeholder substitution followed by label shortcut
//! generation.
//!
//! The synthesizer is a pure transformation. It reads nothing from disk,
//! writes nothing and doesn't log; the driver owns all of that.

use crate::config::{LabelSpec, Options};
use crate::error::{Error, Result};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::placeholder::{Placeholder, PlaceholderMap};
use crate::shortcut::{ShortcutRecord, VariableIds};
use serde_json::Value;

/// Result of one synthesis run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedConfig {
    document: Value,
    placeholders: PlaceholderMap,
}

impl GeneratedConfig {
    /// Shortcuts of the first category.
    pub fn shortcuts(&self) -> &[Value] {
        self.document
            .pointer("/categories/0/shortcuts")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn shortcut_count(&self) -> usize {
        self.shortcuts().len()
    }

    /// Values the template placeholders were resolved to.
    pub fn placeholders(&self) -> &PlaceholderMap {
        &self.placeholders
    }

    pub fn as_value(&self) -> &Value {
        &self.document
    }

    pub fn into_value(self) -> Value {
        self.document
    }
}

/// Builds shortcut configurations from template text.
///
/// Owns the identifier source so tests can swap in a deterministic one.
#[derive(Debug, Default)]
pub struct Synthesizer<G: IdGenerator = UuidGenerator> {
    ids: G,
}

impl Synthesizer<UuidGenerator> {
    pub fn new() -> Self {
        Self {
            ids: UuidGenerator::new(),
        }
    }
}

impl<G: IdGenerator> Synthesizer<G> {
    pub fn with_generator(ids: G) -> Self {
        Self { ids }
    }

    /// Substitutes placeholders in `template_text`, parses the result and
    /// appends one shortcut per entry of `options.custom_labels`.
    ///
    /// # Errors
    /// * `Error::EmptyLabel` if a custom label has a blank `label`
    /// * `Error::TemplateParseError` if the substituted text isn't valid JSON
    /// * `Error::StructureError` if labels were requested and the document
    ///   has no `categories[0].shortcuts` list
    pub fn synthesize(
        &mut self,
        template_text: &str,
        options: &Options,
    ) -> Result<GeneratedConfig> {
        if let Some(position) = options.custom_labels.iter().position(LabelSpec::is_blank) {
            return Err(Error::EmptyLabel { position });
        }

        let placeholders = PlaceholderMap::new(&mut self.ids, options);
        let substituted = placeholders.apply(template_text);
        let mut document: Value = serde_json::from_str(&substituted)
            .map_err(Error::TemplateParseError)?;

        if !options.custom_labels.is_empty() {
            let mut records = Vec::with_capacity(options.custom_labels.len());
            for spec in &options.custom_labels {
                let record = self.synthesize_shortcut(
                    spec,
                    &options.auth_token,
                    placeholders.get(Placeholder::ServerUrlVarId),
                    placeholders.get(Placeholder::ArticleTitleVarId),
                    placeholders.get(Placeholder::ArticleUrlVarId),
                )?;
                records.push(serde_json::to_value(record)?);
            }
            shortcut_list_mut(&mut document)?.extend(records);
        }

        Ok(GeneratedConfig {
            document,
            placeholders,
        })
    }

    /// Builds the shortcut for one label under a freshly generated id.
    ///
    /// `spec.label` is expected to be non-empty; [`Synthesizer::synthesize`]
    /// checks that before calling this.
    pub fn synthesize_shortcut(
        &mut self,
        spec: &LabelSpec,
        auth_token: &str,
        server_url_var_id: &str,
        title_var_id: &str,
        url_var_id: &str,
    ) -> Result<ShortcutRecord> {
        let vars = VariableIds {
            server_url: server_url_var_id,
            article_title: title_var_id,
            article_url: url_var_id,
        };
        ShortcutRecord::for_label(spec, self.ids.generate(), auth_token, vars)
    }
}

fn structure_error(message: &str) -> Error {
    Error::StructureError(message.to_string())
}

fn shortcut_list_mut(document: &mut Value) -> Result<&mut Vec<Value>> {
    let categories = document
        .get_mut("categories")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| structure_error("missing 'categories' list"))?;
    let first = categories
        .first_mut()
        .ok_or_else(|| structure_error("'categories' list is empty"))?;
    first
        .get_mut("shortcuts")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| structure_error("missing 'categories[0].shortcuts' list"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shortcut_list_mut_reports_missing_levels() {
        let mut bare = json!({});
        let mut empty = json!({"categories": []});
        let mut no_shortcuts = json!({"categories": [{"id": "x"}]});

        for doc in [&mut bare, &mut empty, &mut no_shortcuts] {
            let result = shortcut_list_mut(doc);
            assert!(matches!(result, Err(Error::StructureError(_))));
        }
    }
}
