// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use navhub::domain::models::website_info::WebsiteInfo;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_blank_url_is_bad_request() {
    let app = create_test_app().await;

    for body in [json!({}), json!({ "url": "" }), json!({ "url": "   " })] {
        let response = app.server.post("/api/scrape").json(&body).await;
        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "url is required");
    }
}

#[tokio::test]
async fn test_scrape_returns_page_metadata() {
    let app = create_test_app().await;
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html lang="zh-CN"><head>
                 <title>Mock Site</title>
                 <meta name="description" content="Mock description">
                 <link rel="shortcut icon" href="/assets/icon.png">
               </head></html>"#,
            "text/html; charset=utf-8",
        ))
        .mount(&site)
        .await;

    let response = app
        .server
        .post("/api/scrape")
        .json(&json!({ "url": site.uri() }))
        .await;
    response.assert_status_ok();

    let info: WebsiteInfo = response.json();
    assert_eq!(info.title, "Mock Site");
    assert_eq!(info.description, "Mock description");
    assert_eq!(info.icon, format!("{}/assets/icon.png", site.uri()));
    assert_eq!(info.metadata.language.as_deref(), Some("zh-CN"));
}

#[tokio::test]
async fn test_unreachable_site_still_returns_200() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/scrape")
        .json(&json!({ "url": "https://www.nonexistent-site.invalid/path", "timeoutMs": 3000 }))
        .await;
    response.assert_status_ok();

    let info: WebsiteInfo = response.json();
    assert_eq!(info.title, "Nonexistent-site");
    assert_eq!(info.description, "Nonexistent-site 网站");
    assert_eq!(info.icon, "/icons/placeholder.svg");
    assert_eq!(info.url, "https://www.nonexistent-site.invalid/path");
}

#[tokio::test]
async fn test_out_of_range_timeout_is_clamped_not_rejected() {
    let app = create_test_app().await;
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<title>Clamped</title>", "text/html"),
        )
        .mount(&site)
        .await;

    for timeout_ms in [json!(1), json!(-20), json!(10_000_000)] {
        let response = app
            .server
            .post("/api/scrape")
            .json(&json!({ "url": site.uri(), "timeoutMs": timeout_ms }))
            .await;
        response.assert_status_ok();

        let info: WebsiteInfo = response.json();
        assert!(!info.title.is_empty());
        assert!(!info.icon.is_empty());
    }
}
