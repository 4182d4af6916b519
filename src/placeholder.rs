//! Placeholder tokens and their substitution into template text.
//!
//! The template is plain JSON text with `{{NAME}}` markers. Substitution
//! happens on the raw text before the document is parsed.

use crate::config::Options;
use crate::ids::IdGenerator;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Alternation of every escaped token, matched leftmost-first.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = Placeholder::ALL
        .iter()
        .map(|slot| regex::escape(slot.token()))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern)
        .expect("escaped placeholder tokens form a valid pattern")
});

/// One substitution slot of the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    CategoryId,
    AuthToken,
    ServerUrlVarId,
    DefaultLabelVarId,
    ArticleTitleVarId,
    ArticleUrlVarId,
    ShortcutIdSaveArticle,
    ServerUrl,
    DefaultLabel,
}

impl Placeholder {
    /// Every slot, in substitution table order.
    pub const ALL: [Placeholder; 9] = [
        Placeholder::CategoryId,
        Placeholder::AuthToken,
        Placeholder::ServerUrlVarId,
        Placeholder::DefaultLabelVarId,
        Placeholder::ArticleTitleVarId,
        Placeholder::ArticleUrlVarId,
        Placeholder::ShortcutIdSaveArticle,
        Placeholder::ServerUrl,
        Placeholder::DefaultLabel,
    ];

    /// The literal marker as it appears in template text.
    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::CategoryId => "{{CATEGORY_ID}}",
            Placeholder::AuthToken => "{{AUTH_TOKEN}}",
            Placeholder::ServerUrlVarId => "{{SERVER_URL_VAR_ID}}",
            Placeholder::DefaultLabelVarId => "{{DEFAULT_LABEL_VAR_ID}}",
            Placeholder::ArticleTitleVarId => "{{ARTICLE_TITLE_VAR_ID}}",
            Placeholder::ArticleUrlVarId => "{{ARTICLE_URL_VAR_ID}}",
            Placeholder::ShortcutIdSaveArticle => "{{SHORTCUT_ID_SAVE_ARTICLE}}",
            Placeholder::ServerUrl => "{{SERVER_URL}}",
            Placeholder::DefaultLabel => "{{DEFAULT_LABEL}}",
        }
    }

    /// Whether the slot is filled with a fresh identifier rather than an option value.
    pub const fn is_generated(self) -> bool {
        !matches!(
            self,
            Placeholder::AuthToken | Placeholder::ServerUrl | Placeholder::DefaultLabel
        )
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.token() == token)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Resolved value for every placeholder slot of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMap {
    values: [String; 9],
}

impl PlaceholderMap {
    /// Generates one identifier per generated slot and takes the remaining
    /// values from `options`.
    pub fn new(ids: &mut dyn IdGenerator, options: &Options) -> Self {
        let values = Placeholder::ALL.map(|slot| match slot {
            Placeholder::AuthToken => options.auth_token.clone(),
            Placeholder::ServerUrl => options.server_url.clone(),
            Placeholder::DefaultLabel => options.default_label.clone(),
            _ => ids.generate(),
        });
        Self { values }
    }

    /// Raw (unescaped) value of a slot.
    pub fn get(&self, slot: Placeholder) -> &str {
        &self.values[slot.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        Placeholder::ALL
            .into_iter()
            .map(move |slot| (slot, self.get(slot)))
    }

    /// Identifiers of the generated slots, in table order.
    pub fn generated_ids(&self) -> Vec<&str> {
        self.iter()
            .filter(|(slot, _)| slot.is_generated())
            .map(|(_, id)| id)
            .collect()
    }

    /// Replaces every known token in `text` in a single left-to-right pass.
    ///
    /// Values are escaped for a JSON string context. Replaced text is never
    /// rescanned, so a value containing a token stays literal. Tokens absent
    /// from `text` are ignored.
    pub fn apply(&self, text: &str) -> String {
        let substituted = TOKEN_PATTERN.replace_all(text, |caps: &Captures| {
            match Placeholder::from_token(&caps[0]) {
                Some(slot) => escape_json_str(self.get(slot)),
                None => caps[0].to_string(),
            }
        });
        substituted.into_owned()
    }
}

/// Escapes `value` for embedding between the quotes of a JSON string.
pub fn escape_json_str(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_string()).to_string();
    quoted[1..quoted.len() - 1].to_string()
}

/// Renders a reference to an HTTP Shortcuts variable, resolved by the app at runtime.
pub fn variable_ref(var_id: &str) -> String {
    format!("{{{{{var_id}}}}}")
}
