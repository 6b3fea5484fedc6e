// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, seed_category, seed_website};
use axum::http::StatusCode;
use navhub::domain::models::category::Category;
use navhub::domain::models::website::Website;
use serde_json::{json, Value};
use uuid::Uuid;

#[tokio::test]
async fn test_category_crud() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "name": "Cursor Rules", "slug": "cursor-rules", "icon": "📐" }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Category = response.json();
    assert_eq!(created.order, 1);

    let fetched: Category = app
        .server
        .get(&format!("/api/categories/{}", created.id))
        .await
        .json();
    assert_eq!(fetched, created);

    let response = app
        .server
        .put(&format!("/api/categories/{}", created.id))
        .json(&json!({ "description": "Rules for the editor" }))
        .await;
    response.assert_status_ok();
    let updated: Category = response.json();
    assert_eq!(updated.description.as_deref(), Some("Rules for the editor"));
    assert_eq!(updated.slug, "cursor-rules");

    let listed: Vec<Category> = app.server.get("/api/categories").await.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_category_validation_errors() {
    let app = create_test_app().await;
    seed_category(&app.categories, "taken").await;

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "name": "Dup", "slug": "taken" }))
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("slug"));

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "slug": "no-name" }))
        .await;
    response.assert_status_bad_request();

    let response = app
        .server
        .post("/api/categories")
        .json(&json!({ "name": "Spaces", "slug": "has spaces" }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_missing_records_are_404() {
    let app = create_test_app().await;
    let id = Uuid::new_v4();

    app.server
        .get(&format!("/api/categories/{}", id))
        .await
        .assert_status_not_found();
    app.server
        .delete(&format!("/api/categories/{}", id))
        .await
        .assert_status_not_found();
    app.server
        .get(&format!("/api/websites/{}", id))
        .await
        .assert_status_not_found();
    app.server
        .post(&format!("/api/websites/{}/move", id))
        .json(&json!({ "direction": "up" }))
        .await
        .assert_status_not_found();

    let response = app
        .server
        .put(&format!("/api/websites/{}", id))
        .json(&json!({ "name": "ghost" }))
        .await;
    response.assert_status_not_found();
    let body: Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_category_move_endpoint() {
    let app = create_test_app().await;
    let a = seed_category(&app.categories, "a").await;
    let b = seed_category(&app.categories, "b").await;

    let response = app
        .server
        .post(&format!("/api/categories/{}/move", b.id))
        .json(&json!({ "direction": "up" }))
        .await;
    response.assert_status_ok();
    let reordered: Vec<Category> = response.json();
    let ids: Vec<Uuid> = reordered.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    app.server
        .post(&format!("/api/categories/{}/move", b.id))
        .json(&json!({ "direction": "sideways" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_delete_category_reports_removed_websites() {
    let app = create_test_app().await;
    let category = seed_category(&app.categories, "gone").await;
    seed_website(&app.websites, &category, "https://one.com").await;

    let response = app
        .server
        .delete(&format!("/api/categories/{}", category.id))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["deletedWebsites"], 1);
    assert!(body["message"].is_string());

    let websites: Vec<Website> = app.server.get("/api/websites").await.json();
    assert!(websites.is_empty());
}

#[tokio::test]
async fn test_website_endpoints() {
    let app = create_test_app().await;
    let category = seed_category(&app.categories, "dev").await;

    let response = app
        .server
        .post("/api/websites")
        .json(&json!({
            "name": "GitHub",
            "url": "github.com",
            "description": "Code hosting",
            "categoryId": category.id,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["url"], "https://github.com/");
    assert_eq!(created["icon"], "/icons/placeholder.svg");
    assert_eq!(created["categoryId"], category.id.to_string());

    let response = app
        .server
        .post("/api/websites")
        .json(&json!({
            "name": "GitHub again",
            "url": "https://github.com",
            "description": "Duplicate",
            "categoryId": category.id,
        }))
        .await;
    response.assert_status_bad_request();

    let response = app
        .server
        .post("/api/websites")
        .json(&json!({
            "name": "Nowhere",
            "url": "https://nowhere.com",
            "description": "Unknown category",
            "categoryId": Uuid::new_v4(),
        }))
        .await;
    response.assert_status_bad_request();

    let response = app
        .server
        .post("/api/websites")
        .json(&json!({ "name": "No category", "url": "https://x.com", "description": "x" }))
        .await;
    response.assert_status_bad_request();

    let filtered: Vec<Website> = app
        .server
        .get("/api/websites")
        .add_query_param("categoryId", category.id)
        .await
        .json();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "GitHub");
}
