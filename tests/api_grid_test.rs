//! Integration tests for POST /api/grid

mod common;

use axum::http::StatusCode;
use common::fixtures::{red_blue_png, solid_png, RED};
use common::{assert_json_error, assert_ok, TestApp};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_explicit_grid_matches_picture() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?grid_size=2&max_colors=2", red_blue_png(40, 40))
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["grid_size"], 2);
    assert_eq!(json["max_colors"], 2);
    assert!(json.get("analysis").is_none(), "explicit size skips analysis");

    let cells = json["cells"].as_array().unwrap();
    let summary: Vec<(u64, u64, u64, String)> = cells
        .iter()
        .map(|c| {
            (
                c["x"].as_u64().unwrap(),
                c["y"].as_u64().unwrap(),
                c["number"].as_u64().unwrap(),
                c["color"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, 0, 1, "#e53935".to_string()),
            (1, 0, 2, "#1e63d6".to_string()),
            (0, 1, 1, "#e53935".to_string()),
            (1, 1, 2, "#1e63d6".to_string()),
        ]
    );

    let legend = json["legend"].as_array().unwrap();
    assert_eq!(legend.len(), 2);
    assert_eq!(legend[0]["number"], 1);
    assert_eq!(legend[0]["cell_count"], 2);
    assert_eq!(legend[1]["number"], 2);
    assert_eq!(legend[1]["cell_count"], 2);
}

#[tokio::test]
async fn test_default_grid_uses_suggested_size() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/grid", red_blue_png(100, 100)).await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let grid_size = json["grid_size"].as_u64().unwrap();
    assert_eq!(json["analysis"]["suggested_grid_size"].as_u64(), Some(grid_size));
    assert_eq!(json["max_colors"], 12);
    assert_eq!(
        json["cells"].as_array().unwrap().len() as u64,
        grid_size * grid_size
    );
}

#[tokio::test]
async fn test_numbers_do_not_depend_on_color_count() {
    let app = TestApp::new();

    for max_colors in [2, 12, 24] {
        let response = app
            .post_bytes(
                &format!("/api/grid?grid_size=3&max_colors={max_colors}"),
                solid_png(30, 30, RED),
            )
            .await;
        assert_ok(&response);

        let json: serde_json::Value = response.json();
        for cell in json["cells"].as_array().unwrap() {
            assert_eq!(cell["number"], 1, "red is paint 1 with {max_colors} colors");
        }
    }
}

#[tokio::test]
async fn test_legend_lists_only_used_paints() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?grid_size=4&max_colors=24", solid_png(16, 16, RED))
        .await;
    assert_ok(&response);

    let json: serde_json::Value = response.json();
    let legend = json["legend"].as_array().unwrap();
    assert_eq!(legend.len(), 1);
    assert_eq!(legend[0]["name"], "Red");
    assert_eq!(legend[0]["cell_count"], 16);
}

#[tokio::test]
async fn test_invalid_parameters_are_bad_requests() {
    let app = TestApp::new();

    for query in [
        "grid_size=0",
        "max_colors=0",
        "max_colors=25",
        "grid_size=101",
        "grid_size=50",
        "grid_size=abc",
        "max_colors=-3",
    ] {
        let response = app
            .post_bytes(&format!("/api/grid?{query}"), red_blue_png(20, 20))
            .await;
        assert_json_error(&response, StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_undecodable_upload_is_unprocessable() {
    let app = TestApp::new();

    let response = app
        .post_bytes("/api/grid?grid_size=2", b"GIF89a but not really".to_vec())
        .await;
    assert_json_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}
