use std::io;

use readeck_shortcuts::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFound {
        path: "templates/x.json".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Template file 'templates/x.json' not found."
    );

    let err = Error::StructureError("missing 'categories' list".to_string());
    assert_eq!(
        err.to_string(),
        "Template structure error: missing 'categories' list."
    );

    let err = Error::ConfigFileError {
        path: "c.json".to_string(),
        reason: "file not found".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Error loading configuration file 'c.json': file not found."
    );

    let err = Error::EmptyLabel { position: 2 };
    assert_eq!(err.to_string(), "Custom label #2 has an empty label.");

    assert_eq!(
        Error::MissingAuthToken.to_string(),
        "Auth token is required (use --auth-token or the config file)."
    );
}

#[test]
fn test_parse_error_keeps_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = Error::TemplateParseError(json_err);

    assert!(std::error::Error::source(&err).is_some());

    let message = err.to_string();
    assert!(message.starts_with("Error parsing generated JSON: "));
}
