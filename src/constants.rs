//! Common constants used throughout readeck-shortcuts.

/// Server URL used when none is supplied
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8090";

/// Label applied by the template's own save-article shortcut
pub const DEFAULT_LABEL: &str = "inbox";

pub const DEFAULT_TEMPLATE_PATH: &str = "templates/shortcuts-template.json";

pub const DEFAULT_OUTPUT_PATH: &str = "shortcuts-generated.json";

/// Prefix for generated label shortcut names and success messages
pub const LABEL_EMOJI: &str = "🏷️";

pub const FAILURE_EMOJI: &str = "❌";

/// Icon shown for label shortcuts that don't set `iconName`
pub const DEFAULT_ICON_NAME: &str = "flat_color_tag_2";

/// Readeck endpoint that creates a bookmark
pub const BOOKMARKS_API_PATH: &str = "/api/bookmarks";

pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
