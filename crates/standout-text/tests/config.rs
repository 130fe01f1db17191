//! The public enums deserialize from the names used in renderer configuration.

use serde::Deserialize;
use standout_text::{cursor_escape, Align, CursorDirection, Kind};

#[derive(Debug, Deserialize)]
struct ColumnDefaults {
    number: Align,
    string: Align,
    #[serde(default)]
    other: Align,
}

#[derive(Debug, Deserialize)]
struct RedrawConfig {
    steps: Vec<CursorDirection>,
}

#[test]
fn align_from_yaml() {
    let defaults: ColumnDefaults = serde_yaml::from_str(
        r#"
number: right
string: center
"#,
    )
    .unwrap();
    assert_eq!(defaults.number, Align::Right);
    assert_eq!(defaults.string, Align::Center);
    assert_eq!(defaults.other, Align::Left);
}

#[test]
fn cursor_directions_from_yaml() {
    let config: RedrawConfig = serde_yaml::from_str(
        r#"
steps: [up, erase-line, down]
"#,
    )
    .unwrap();
    let rendered: String = config
        .steps
        .iter()
        .map(|d| cursor_escape(*d, Some(2)))
        .collect();
    assert_eq!(rendered, "\x1b[2A\x1b[K\x1b[2B");
}

#[test]
fn unknown_direction_is_rejected() {
    let result: Result<RedrawConfig, _> = serde_yaml::from_str("steps: [sideways]");
    assert!(result.is_err());
}

#[test]
fn kind_json_names() {
    assert_eq!(serde_json::to_string(&Kind::Number).unwrap(), "\"number\"");
    let kind: Kind = serde_json::from_str("\"string\"").unwrap();
    assert_eq!(kind, Kind::String);
    assert_eq!(
        serde_json::to_string(&CursorDirection::EraseLine).unwrap(),
        "\"erase-line\""
    );
}
