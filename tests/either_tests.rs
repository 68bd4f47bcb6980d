//! Integration tests for the branching container.

use std::collections::HashMap;

use boxkit::control::Either;
use rstest::rstest;

fn palette() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("red", "#ff4444"),
        ("blue", "#3b5998"),
        ("yellow", "#fff68f"),
    ])
}

/// Looks up a color by name, returning its uppercased hex digits or a
/// placeholder when the name is unknown.
fn find_color(name: &str) -> String {
    Either::from_nullable(palette().get(name).copied())
        .map(|hex| &hex[1..])
        .fold(|()| String::from("no color"), str::to_uppercase)
}

#[rstest]
fn right_chain_applies_every_map() {
    let result = Either::<String, i32>::Right(3)
        .map(|x| x + 1)
        .map(|x| x / 2)
        .fold(|_| String::from("error"), |x| x.to_string());
    assert_eq!(result, "2");
}

#[rstest]
fn left_chain_short_circuits_to_the_error_handler() {
    let result = Either::<i32, i32>::Left(3)
        .map(|x| x + 1)
        .map(|x| x / 2)
        .fold(|_| String::from("error"), |x| x.to_string());
    assert_eq!(result, "error");
}

#[rstest]
#[case("green", "no color")]
#[case("purple", "no color")]
#[case("red", "FF4444")]
#[case("blue", "3B5998")]
#[case("yellow", "FFF68F")]
fn find_color_defaults_on_unknown_names(#[case] name: &str, #[case] expected: &str) {
    assert_eq!(find_color(name), expected);
}

#[rstest]
fn from_nullable_absent_reaches_left_handler() {
    let result = Either::from_nullable(None::<i32>).fold(|()| -1, |v| v);
    assert_eq!(result, -1);
}

#[rstest]
fn from_nullable_present_reaches_right_handler() {
    let result = Either::from_nullable(Some(5)).fold(|()| -1, |v| v);
    assert_eq!(result, 5);
}

#[rstest]
fn try_catch_error_message_survives_to_fold() {
    let result = Either::<String, i32>::try_catch(|| Err(String::from("x")))
        .fold(|e| e, |v| v.to_string());
    assert_eq!(result, "x");
}

#[rstest]
fn try_catch_success_survives_to_fold() {
    let result = Either::<String, i32>::try_catch(|| Ok(42)).fold(|_| -1, |v| v);
    assert_eq!(result, 42);
}

#[rstest]
fn try_catch_lifts_a_parse_failure() {
    let result = Either::try_catch(|| "oops".parse::<i32>())
        .map(|n| n + 1)
        .fold(|e| e.to_string(), |n| n.to_string());
    assert!(result.contains("invalid digit"));
}

#[rstest]
fn error_value_is_carried_unchanged_through_maps() {
    let original: Either<&str, i32> = Either::Left("unchanged");
    let threaded = original.map(|x| x * 2).map(|x| x - 1).map(|x| x + 10);
    assert_eq!(threaded.left(), Some("unchanged"));
}
