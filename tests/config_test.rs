use std::fs;

use readeck_shortcuts::config::{load_options, parse_labels, LabelSpec, Options};
use readeck_shortcuts::error::Error;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_json_options() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "config.json",
        r#"{
            "authToken": "tok",
            "serverUrl": "http://srv:8090",
            "customLabels": [
                {"label": "Work", "name": "💼 Work", "iconName": "flat_color_briefcase_2"},
                {"label": "Tech"}
            ]
        }"#,
    );

    let options = load_options(&path).unwrap();

    assert_eq!(options.auth_token, "tok");
    assert_eq!(options.server_url, "http://srv:8090");
    assert_eq!(options.default_label, "inbox");
    assert_eq!(options.custom_labels.len(), 2);
    assert_eq!(options.custom_labels[0].name.as_deref(), Some("💼 Work"));
    assert_eq!(
        options.custom_labels[0].icon_name.as_deref(),
        Some("flat_color_briefcase_2")
    );
    assert_eq!(options.custom_labels[1], LabelSpec::new("Tech"));
}

#[test]
fn test_load_yaml_options() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(
        &temp_dir,
        "config.yaml",
        concat!(
            "authToken: tok\n",
            "defaultLabel: later\n",
            "customLabels:\n",
            "  - label: Work\n",
            "    description: Work stuff\n",
        ),
    );

    let options = load_options(&path).unwrap();

    assert_eq!(options.default_label, "later");
    assert_eq!(options.server_url, "http://localhost:8090");
    assert_eq!(
        options.custom_labels[0].description.as_deref(),
        Some("Work stuff")
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = load_options(temp_dir.path().join("nope.json"));

    assert!(matches!(result, Err(Error::ConfigFileError { .. })));
}

#[test]
fn test_malformed_file_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write(&temp_dir, "config.json", r#"{"authToken": "tok""#);

    let result = load_options(&path);
    assert!(matches!(result, Err(Error::ConfigFileError { .. })));
}

#[test]
fn test_file_without_token_is_missing_token() {
    let temp_dir = TempDir::new().unwrap();
    let missing = write(&temp_dir, "missing.json", r#"{"serverUrl": "http://srv"}"#);
    let empty = write(&temp_dir, "empty.json", r#"{"authToken": ""}"#);

    for path in [missing, empty] {
        let result = load_options(&path);
        assert!(matches!(result, Err(Error::MissingAuthToken)));
    }
}

#[test]
fn test_label_entry_requires_label() {
    let temp_dir = TempDir::new().unwrap();
    let blank = write(
        &temp_dir,
        "blank.json",
        r#"{"authToken": "t", "customLabels": [{"label": " "}]}"#,
    );
    let absent = write(
        &temp_dir,
        "absent.json",
        r#"{"authToken": "t", "customLabels": [{"name": "x"}]}"#,
    );

    for path in [blank, absent] {
        let result = load_options(&path);
        assert!(matches!(result, Err(Error::ConfigFileError { .. })));
    }
}

#[test]
fn test_parse_labels() {
    let labels = parse_labels(" Work, ,Tech ,,Personal ");
    let names: Vec<&str> = labels.iter().map(|l| l.label.as_str()).collect();

    assert_eq!(names, ["Work", "Tech", "Personal"]);
    assert!(labels
        .iter()
        .all(|l| l.name.is_none() && l.icon_name.is_none()));
    assert!(parse_labels("").is_empty());
    assert!(parse_labels(" , ").is_empty());
}

#[test]
fn test_from_inline() {
    let options = Options::from_inline(
        Some("tok".to_string()),
        None,
        Some("later".to_string()),
        Some("Work,Tech"),
    )
    .unwrap();

    assert_eq!(options.server_url, "http://localhost:8090");
    assert_eq!(options.default_label, "later");
    assert_eq!(
        options.custom_labels,
        vec![LabelSpec::new("Work"), LabelSpec::new("Tech")]
    );
}

#[test]
fn test_from_inline_requires_token() {
    assert!(matches!(
        Options::from_inline(None, None, None, None),
        Err(Error::MissingAuthToken)
    ));
    assert!(matches!(
        Options::from_inline(Some(String::new()), None, None, None),
        Err(Error::MissingAuthToken)
    ));
}

#[test]
fn test_duplicate_labels_are_kept() {
    let labels = parse_labels("Work,Work");
    assert_eq!(labels.len(), 2);
}
