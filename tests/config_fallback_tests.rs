//! Composing two capture boundaries over a configuration lookup.
//!
//! Reads a JSON file, parses it, and extracts the `port` field, with
//! every failure path collapsing to a fallback value. Each fallible step
//! is lifted through `Either::try_catch`; composing them through `map`
//! yields a nested `Either` that is folded outside-in, since the
//! container deliberately offers no flattening operation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use boxkit::control::Either;
use serde_json::Value;

const FALLBACK_PORT: u64 = 3000;

fn read_port(path: &Path) -> u64 {
    Either::try_catch(|| fs::read_to_string(path))
        .map(|contents| Either::try_catch(move || serde_json::from_str::<Value>(&contents)))
        .fold(
            |_: io::Error| FALLBACK_PORT,
            |parsed| {
                parsed.fold(
                    |_: serde_json::Error| FALLBACK_PORT,
                    |config| {
                        config
                            .get("port")
                            .and_then(Value::as_u64)
                            .unwrap_or(FALLBACK_PORT)
                    },
                )
            },
        )
}

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn present_port_is_read() {
    let path = temp_config("boxkit_port_present.json", r#"{"port": 8888}"#);
    assert_eq!(read_port(&path), 8888);
    let _ = fs::remove_file(path);
}

#[test]
fn missing_file_falls_back() {
    let path = std::env::temp_dir().join("boxkit_port_no_such_file.json");
    assert_eq!(read_port(&path), FALLBACK_PORT);
}

#[test]
fn unparsable_contents_fall_back() {
    let path = temp_config("boxkit_port_invalid.json", "{port: 8888");
    assert_eq!(read_port(&path), FALLBACK_PORT);
    let _ = fs::remove_file(path);
}

#[test]
fn absent_field_falls_back() {
    let path = temp_config("boxkit_port_absent_field.json", r#"{"host": "localhost"}"#);
    assert_eq!(read_port(&path), FALLBACK_PORT);
    let _ = fs::remove_file(path);
}

#[test]
fn non_numeric_field_falls_back() {
    let path = temp_config("boxkit_port_non_numeric.json", r#"{"port": "eight"}"#);
    assert_eq!(read_port(&path), FALLBACK_PORT);
    let _ = fs::remove_file(path);
}
