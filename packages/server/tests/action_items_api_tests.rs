//! Integration tests for the action item endpoints.

mod common;

use axum::http::StatusCode;
use common::*;
use extraction::{GenerationError, MockGenerator};
use serde_json::json;

const NARRATIVE: &str = "We had a meeting today. Gabriel should update the documentation \
                         by Friday and we need to schedule a follow-up.";

#[tokio::test]
async fn extract_uses_heuristics_and_saves_note() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, body) = ctx
        .post_json(
            "/action-items/extract",
            json!({
                "text": "Notes:\n- [ ] Send the email\n- Book the room\n* send the email",
                "save_note": true
            }),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "heuristic");
    assert!(body.get("llm_error").is_none());

    let texts: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["Send the email", "Book the room"]);
    assert_eq!(ctx.generator.call_count(), 0);

    // Items are attached to the saved note
    let note_id = body["note_id"].as_i64().unwrap();
    let (_, note) = ctx.get(&format!("/notes/{}", note_id)).await.unwrap();
    assert_eq!(note["action_items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn extract_without_saving_has_no_note() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/action-items/extract", json!({ "text": "todo: buy milk" }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(body["note_id"].is_null());
    assert_eq!(body["items"][0]["text"], "todo: buy milk");

    let (_, notes) = ctx.get("/notes").await.unwrap();
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn extract_rejects_blank_text() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, body) = ctx
        .post_json(
            "/action-items/extract",
            json!({ "text": "  \n ", "save_note": true }),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "detail": "text is required" }));
    assert_eq!(ctx.generator.call_count(), 0);

    let (_, notes) = ctx.get("/notes").await.unwrap();
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn extract_falls_back_to_llm_once() {
    let ctx = TestHarness::with_generator(
        MockGenerator::new().with_items(["Update the documentation by Friday", "Schedule a follow-up"]),
    )
    .await
    .unwrap();

    let (status, body) = ctx
        .post_json("/action-items/extract", json!({ "text": NARRATIVE }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "llm");
    assert_eq!(body["items"][0]["text"], "Update the documentation by Friday");
    assert_eq!(body["items"][1]["text"], "Schedule a follow-up");
    assert_eq!(ctx.generator.call_count(), 1);

    let prompt = &ctx.generator.prompts()[0];
    assert!(prompt.user_message.ends_with(NARRATIVE));
}

#[tokio::test]
async fn extract_reports_llm_failure_as_empty_success() {
    let ctx = TestHarness::with_generator(
        MockGenerator::new()
            .with_fallback(Err(GenerationError::Unavailable("connection refused".into()))),
    )
    .await
    .unwrap();

    let (status, body) = ctx
        .post_json("/action-items/extract", json!({ "text": NARRATIVE }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], json!([]));
    assert_eq!(body["source"], "llm");
    assert!(body["llm_error"].as_str().is_some());
}

#[tokio::test]
async fn extract_can_skip_heuristics() {
    let ctx = TestHarness::with_generator(MockGenerator::new().with_items(["Ship it"]))
        .await
        .unwrap();

    let (status, body) = ctx
        .post_json(
            "/action-items/extract",
            json!({ "text": "- Send the email", "prefer_heuristic": false }),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "llm");
    assert_eq!(body["items"][0]["text"], "Ship it");
    assert_eq!(ctx.generator.call_count(), 1);
}

#[tokio::test]
async fn extract_llm_endpoint_always_calls_llm() {
    let ctx = TestHarness::with_generator(MockGenerator::new().with_items(["Send the email"]))
        .await
        .unwrap();

    let (status, body) = ctx
        .post_json(
            "/action-items/extract-llm",
            json!({ "text": "- Send the email", "save_note": true }),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "llm");
    assert!(body["note_id"].as_i64().is_some());
    assert_eq!(body["items"][0]["text"], "Send the email");
    assert_eq!(ctx.generator.call_count(), 1);
}

#[tokio::test]
async fn extract_llm_endpoint_rejects_blank_text() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/action-items/extract-llm", json!({ "text": "" }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "text is required");
    assert_eq!(ctx.generator.call_count(), 0);
}

#[tokio::test]
async fn list_action_items_filters_by_note() {
    let ctx = TestHarness::new().await.unwrap();
    let note = create_test_note(&ctx.db_pool, "note").await.unwrap();
    create_test_items(&ctx.db_pool, &["one", "two"], Some(note.id))
        .await
        .unwrap();
    create_test_items(&ctx.db_pool, &["loose"], None).await.unwrap();

    let (status, all) = ctx.get("/action-items").await.unwrap();
    assert_eq!(status, StatusCode::OK);
    let texts: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["loose", "two", "one"]);

    let (status, filtered) = ctx
        .get(&format!("/action-items?note_id={}", note.id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered.as_array().unwrap().len(), 2);
    assert_eq!(filtered[0]["text"], "two");
    assert_eq!(filtered[0]["note_id"], note.id);
}

#[tokio::test]
async fn list_action_items_rejects_bad_query() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, _) = ctx.get("/action-items?note_id=abc").await.unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mark_done_toggles_flag() {
    let ctx = TestHarness::new().await.unwrap();
    let items = create_test_items(&ctx.db_pool, &["Send the email"], None)
        .await
        .unwrap();
    let id = items[0].id;

    let (status, body) = ctx
        .post_json(&format!("/action-items/{}/done", id), json!({ "done": true }))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id, "done": true }));

    let (_, listed) = ctx.get("/action-items").await.unwrap();
    assert_eq!(listed[0]["done"], true);

    let (status, body) = ctx
        .post_json(&format!("/action-items/{}/done", id), json!({ "done": false }))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], false);

    let (_, listed) = ctx.get("/action-items").await.unwrap();
    assert_eq!(listed[0]["done"], false);
}

#[tokio::test]
async fn mark_done_defaults_to_true() {
    let ctx = TestHarness::new().await.unwrap();
    let items = create_test_items(&ctx.db_pool, &["Send the email"], None)
        .await
        .unwrap();
    let id = items[0].id;

    let (status, body) = ctx
        .post_json(&format!("/action-items/{}/done", id), json!({}))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], true);

    let (status, body) = ctx
        .post_empty(&format!("/action-items/{}/done", id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], true);
}

#[tokio::test]
async fn mark_done_rejects_invalid_body() {
    let ctx = TestHarness::new().await.unwrap();
    let items = create_test_items(&ctx.db_pool, &["Send the email"], None)
        .await
        .unwrap();
    let uri = format!("/action-items/{}/done", items[0].id);

    let (status, body) = ctx.post_json(&uri, json!({ "done": "no" })).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().is_some());

    let (status, _) = ctx.post_raw(&uri, "{done: false").await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, listed) = ctx.get("/action-items").await.unwrap();
    assert_eq!(listed[0]["done"], false);
}

#[tokio::test]
async fn mark_done_honors_body_without_content_type() {
    let ctx = TestHarness::new().await.unwrap();
    let items = create_test_items(&ctx.db_pool, &["Send the email"], None)
        .await
        .unwrap();
    let uri = format!("/action-items/{}/done", items[0].id);

    ctx.post_empty(&uri).await.unwrap();
    let (status, body) = ctx.post_raw(&uri, r#"{"done": false}"#).await.unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["done"], false);

    let (_, listed) = ctx.get("/action-items").await.unwrap();
    assert_eq!(listed[0]["done"], false);
}

#[tokio::test]
async fn mark_done_unknown_item_is_not_found() {
    let ctx = TestHarness::new().await.unwrap();

    let (status, body) = ctx
        .post_json("/action-items/42/done", json!({ "done": true }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "action item not found" }));
}

#[tokio::test]
async fn database_failure_is_internal_error() {
    let ctx = TestHarness::new().await.unwrap();
    sqlx::query("DROP TABLE action_items")
        .execute(&ctx.db_pool)
        .await
        .unwrap();

    let (status, body) = ctx
        .post_json("/action-items/extract", json!({ "text": "- Send the email" }))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "An unexpected error occurred.");
    assert!(body["detail"].as_str().is_some());
}

#[tokio::test]
async fn failed_item_insert_does_not_leave_saved_note() {
    let ctx = TestHarness::new().await.unwrap();
    sqlx::query("DROP TABLE action_items")
        .execute(&ctx.db_pool)
        .await
        .unwrap();

    let (status, _) = ctx
        .post_json(
            "/action-items/extract",
            json!({ "text": "- Send the email", "save_note": true }),
        )
        .await
        .unwrap();
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let notes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(notes, 0);
}
