//! Tests for geometry asset loading and validation
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]

use test_case::test_case;
use webgl_triangle::geometry::{COMPONENTS, VERTEX_COUNT};
use webgl_triangle::{Geometry, TriangleError};

fn floats(n: usize) -> String {
    let values: Vec<String> = (0..n).map(|i| format!("{i}.0")).collect();
    format!("[{}]", values.join(","))
}

#[test]
fn test_builtin_first_vertex_is_apex() {
    let geometry = Geometry::builtin().unwrap();
    assert_eq!(&geometry.vertices[..4], &[0.0, 0.5, 0.0, 1.0]);
}

#[test]
fn test_from_json_accepts_twelve_and_twelve() {
    let json = format!(r#"{{"vertices":{},"colors":{}}}"#, floats(12), floats(12));
    let geometry = Geometry::from_json(&json).unwrap();
    assert_eq!(geometry.vertex_count(), VERTEX_COUNT);
    assert_eq!(geometry.colors.len(), VERTEX_COUNT * COMPONENTS);
}

#[test_case(9, 12 ; "three component positions")]
#[test_case(12, 9 ; "three component colors")]
#[test_case(16, 16 ; "four vertices")]
#[test_case(0, 0 ; "empty")]
fn test_from_json_rejects_wrong_lengths(vertices: usize, colors: usize) {
    let json = format!(
        r#"{{"vertices":{},"colors":{}}}"#,
        floats(vertices),
        floats(colors)
    );
    assert!(matches!(
        Geometry::from_json(&json),
        Err(TriangleError::Geometry(_))
    ));
}

#[test_case(r#"{"vertices":[]}"# ; "missing colors")]
#[test_case(r#"{"vertices":"nope","colors":[]}"# ; "string instead of array")]
#[test_case("[1, 2, 3]" ; "not an object")]
fn test_from_json_rejects_malformed(json: &str) {
    assert!(matches!(
        Geometry::from_json(json),
        Err(TriangleError::Json(_))
    ));
}

#[test]
fn test_error_names_offending_field() {
    let json = format!(r#"{{"vertices":{},"colors":{}}}"#, floats(12), floats(8));
    let err = Geometry::from_json(&json).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid geometry: `colors` has 8 values, expected 12"
    );
}
