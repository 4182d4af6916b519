use readeck_shortcuts::config::{LabelSpec, Options};
use readeck_shortcuts::ids::SequenceGenerator;
use readeck_shortcuts::synthesizer::{GeneratedConfig, Synthesizer};
use readeck_shortcuts::writer::{render_config, write_config};
use tempfile::TempDir;

fn generated() -> GeneratedConfig {
    let mut options = Options::new("tok");
    options.custom_labels.push(LabelSpec::new("Work"));
    let template = r#"{"categories": [{"id": "{{CATEGORY_ID}}", "shortcuts": []}]}"#;
    Synthesizer::with_generator(SequenceGenerator::default())
        .synthesize(template, &options)
        .unwrap()
}

#[test]
fn test_render_is_indented_and_keeps_unicode() {
    let rendered = render_config(&generated()).unwrap();

    assert!(rendered.starts_with("{\n  \"categories\": [\n    {\n"));
    assert!(rendered.contains("🏷️ Work"));
    assert!(!rendered.contains("\\u"));
    assert!(rendered.ends_with("}\n"));
}

#[test_log::test]
fn test_write_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let dest = temp_dir.path().join("nested/dir/shortcuts.json");
    let config = generated();

    write_config(&config, &dest).unwrap();

    let written = std::fs::read_to_string(&dest).unwrap();
    assert_eq!(written, render_config(&config).unwrap());
    let reparsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(&reparsed, config.as_value());
}
