//! The HTTP route table through the facade.

use featureboard::server::http::{handle, HttpRequest};
use featureboard::Board;
use serde_json::json;

#[test]
fn full_lifecycle_over_http() {
    let board = Board::in_memory();
    let ex = board.executor();
    let send = |method: &str, path: String, body| handle(ex, &HttpRequest::new(method, path, body));

    let created = send(
        "POST",
        "/api/features".into(),
        Some(json!({"title": "GPT-5", "date": "August 7th", "tags": ["AI"]})),
    );
    assert_eq!(created.status, 201);
    assert_eq!(created.body["ratingCount"], 0);
    let id = created.body["id"].as_str().unwrap().to_string();

    let rated = send(
        "PUT",
        format!("/api/features/{}/rating", id),
        Some(json!({"rating": 4, "previousRating": 0})),
    );
    assert_eq!(rated.body["rating"], 4.0);

    let listed = send("GET", "/api/features".into(), None);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let deleted = send("DELETE", format!("/api/features/{}", id), None);
    assert_eq!(deleted.body, json!({"message": "Feature deleted successfully"}));

    let missing = send("GET", format!("/api/features/{}", id), None);
    assert_eq!(missing.status, 404);
}

#[test]
fn wrong_method_and_unknown_path() {
    let board = Board::in_memory();
    let resp = handle(board.executor(), &HttpRequest::new("DELETE", "/features", None));
    assert_eq!(resp.status, 405);
    let resp = handle(board.executor(), &HttpRequest::new("GET", "/nowhere", None));
    assert_eq!(resp.status, 404);
    assert!(resp.body["error"].is_string());
}
