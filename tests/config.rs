use std::io::Write;

use http_status_codes::config::MatcherConfig;
use http_status_codes::{ConfigError, StatusClass, StatusMatcher, Strictness};
use pretty_assertions::assert_eq;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_matcher_from_file() {
    let file = write_config(
        r#"
        strictness = "loose"
        classes = ["5xx"]
        "#,
    );

    let cfg = MatcherConfig::from_file(file.path()).unwrap();
    let matcher = StatusMatcher::from_config(&cfg);

    assert_eq!(matcher.strictness(), Strictness::Loose);
    assert_eq!(matcher.classes(), &[StatusClass::ServerError]);
    assert!(matcher.matches(&520));
    assert!(!matcher.matches(&404));
}

#[test]
fn partial_file_keeps_defaults() {
    let file = write_config(r#"classes = ["2xx", "3xx"]"#);
    let cfg = MatcherConfig::from_file(file.path()).unwrap();

    assert_eq!(cfg.strictness, Strictness::Strict);
    let matcher = StatusMatcher::from_config(&cfg);
    assert!(matcher.matches(&308));
    assert!(!matcher.matches(&309));
}

#[test]
fn broken_file_falls_back_to_default() {
    let file = write_config("strictness = \"sometimes\"");

    assert!(matches!(
        MatcherConfig::from_file(file.path()),
        Err(ConfigError::Parse { .. })
    ));
    assert_eq!(
        MatcherConfig::from_file_or_default(file.path()),
        MatcherConfig::default()
    );
}
