//! Integration tests for the admin session gate.
//!
//! Drives the real router, session layer, and stub upstream over HTTP with
//! a cookie-holding client. Covers the fresh-login, wrong-login, persisted
//! re-authorization, and logout-revocation scenarios.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;

use zorglog_integration_tests::{ADMIN_PASSWORD, ADMIN_USER, TestContext};

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_direct_admin_navigation_redirects_to_overview() {
    let ctx = TestContext::new().await;

    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();

    // The guard never offers the challenge on direct navigation.
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/overview");
}

#[tokio::test]
async fn test_access_request_without_credential_offers_challenge() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/admin/access"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/login");
}

#[tokio::test]
async fn test_fresh_session_correct_login() {
    let ctx = TestContext::new().await;

    let resp = ctx.submit_login(ADMIN_USER, ADMIN_PASSWORD).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    // The stored pair now passes the guard.
    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.unwrap();
    assert!(body.contains("Create client"));
    assert!(body.contains("Nora Visser"));
    assert!(body.contains("Jan de Vries"));
}

#[tokio::test]
async fn test_fresh_session_wrong_login() {
    let ctx = TestContext::new().await;

    let resp = ctx.submit_login(ADMIN_USER, "0000").await;

    // Back to the challenge form, which stays open with the error surfaced.
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin/login");

    let resp = ctx.client.get(ctx.url("/admin/login")).send().await.unwrap();
    let body = resp.text().await.unwrap();
    assert!(body.contains("Invalid credentials or insufficient access"));

    // Nothing was stored: the guard still bounces this browser.
    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/overview");
}

#[tokio::test]
async fn test_stored_credential_skips_challenge() {
    let ctx = TestContext::new().await;

    ctx.submit_login(ADMIN_USER, ADMIN_PASSWORD).await;

    // Authorization is re-derived from the stored pair on every check, so
    // the next access request goes straight to the panel.
    let resp = ctx
        .client
        .post(ctx.url("/admin/access"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");
}

#[tokio::test]
async fn test_logout_revokes_admin_access() {
    let ctx = TestContext::new().await;

    ctx.submit_login(ADMIN_USER, ADMIN_PASSWORD).await;

    let resp = ctx.client.post(ctx.url("/logout")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/");

    // The success notification shows on the next rendered page.
    let resp = ctx.client.get(ctx.url("/overview")).send().await.unwrap();
    let body = resp.text().await.unwrap();
    assert!(body.contains("Logged out successfully"));

    // Logout cleared the stored pair: both the guard and a fresh access
    // request treat this browser as anonymous again.
    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/overview");

    let resp = ctx
        .client
        .post(ctx.url("/admin/access"))
        .send()
        .await
        .unwrap();
    assert_eq!(location(&resp), "/admin/login");
}

#[tokio::test]
async fn test_guarded_mutations_reject_anonymous_browsers() {
    let ctx = TestContext::new().await;

    let resp = ctx
        .client
        .post(ctx.url("/admin/clients"))
        .form(&[("name", "New Client"), ("email", "new@zorg.example")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/overview");
}

#[tokio::test]
async fn test_admin_can_create_client() {
    let ctx = TestContext::new().await;

    ctx.submit_login(ADMIN_USER, ADMIN_PASSWORD).await;

    let resp = ctx
        .client
        .post(ctx.url("/admin/clients"))
        .form(&[("name", "New Client"), ("email", "new@zorg.example")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();
    let body = resp.text().await.unwrap();
    assert!(body.contains("Client created"));
}

#[tokio::test]
async fn test_admin_create_client_rejects_invalid_email() {
    let ctx = TestContext::new().await;

    ctx.submit_login(ADMIN_USER, ADMIN_PASSWORD).await;

    let resp = ctx
        .client
        .post(ctx.url("/admin/clients"))
        .form(&[("name", "New Client"), ("email", "not-an-email")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/admin");

    let resp = ctx.client.get(ctx.url("/admin")).send().await.unwrap();
    let body = resp.text().await.unwrap();
    assert!(body.contains("Invalid email address"));
}
