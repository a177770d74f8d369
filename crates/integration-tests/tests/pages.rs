//! Integration tests for the list and detail pages.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use zorglog_integration_tests::TestContext;

#[tokio::test]
async fn test_root_redirects_to_overview() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/overview");
}

#[tokio::test]
async fn test_overview_lists_dossiers() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/overview")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Jan de Vries"));
    assert!(body.contains("Day"));
    assert!(body.contains("Nora Visser"));
}

#[tokio::test]
async fn test_client_list() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/clients")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Jan de Vries"));
    assert!(body.contains("jan@zorg.example"));
}

#[tokio::test]
async fn test_dossier_detail() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/dossiers/1")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Slept well after breakfast"));
    assert!(body.contains("1948-05-12"));
}

#[tokio::test]
async fn test_unknown_dossier_is_not_found() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/dossiers/999")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_dossier_flow() {
    let ctx = TestContext::new().await;

    // Form page lists the clients to pick from.
    let resp = ctx.client.get(ctx.url("/dossiers/new")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("Jan de Vries"));

    // Submission lands on the new dossier's detail route.
    let resp = ctx
        .client
        .post(ctx.url("/dossiers/new"))
        .form(&[
            ("shift", "night"),
            ("client_id", "1"),
            ("description", "Restless around midnight"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("location").unwrap(), "/dossiers/99");
}

#[tokio::test]
async fn test_create_dossier_rejects_unknown_shift() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/dossiers/new"))
        .form(&[
            ("shift", "weekend"),
            ("client_id", "1"),
            ("description", "Out of range"),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
