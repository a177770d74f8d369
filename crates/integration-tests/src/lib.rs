//! Integration test harness for Zorglog.
//!
//! Spins up the real application router (session layer included) on an
//! ephemeral port, together with a stub upstream care API that answers the
//! GraphQL operations the front-end issues.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p zorglog-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Json, Router, routing::post};
use secrecy::SecretString;
use serde_json::{Value, json};
use url::Url;

use zorglog_web::config::{ApiConfig, ExpectedCredential, WebConfig};
use zorglog_web::state::AppState;

/// Expected admin username configured for the test app.
pub const ADMIN_USER: &str = "admin";

/// Expected admin password configured for the test app.
pub const ADMIN_PASSWORD: &str = "1234";

/// A running test application with a cookie-holding HTTP client.
pub struct TestContext {
    /// Client with a cookie store and redirect-following disabled, so tests
    /// can assert on redirect statuses and Location headers.
    pub client: reqwest::Client,
    /// Base URL of the running app (ephemeral port).
    pub base_url: String,
}

impl TestContext {
    /// Start the stub upstream and the application.
    ///
    /// # Panics
    ///
    /// Panics when a listener cannot be bound or the client cannot be built;
    /// both abort the test run.
    pub async fn new() -> Self {
        let api_url = spawn_stub_api().await;

        let config = WebConfig {
            host: "127.0.0.1".parse().expect("valid host"),
            port: 0,
            base_url: "http://localhost".to_string(),
            api: ApiConfig { endpoint: api_url },
            admin: ExpectedCredential {
                username: ADMIN_USER.to_string(),
                password: SecretString::from(ADMIN_PASSWORD),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        let app = zorglog_web::app(AppState::new(config));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind app listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("App server error");
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a path on the test app.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Submit the login challenge with the given pair.
    ///
    /// # Panics
    ///
    /// Panics when the request itself fails.
    pub async fn submit_login(&self, user: &str, password: &str) -> reqwest::Response {
        self.client
            .post(self.url("/admin/login"))
            .form(&[("user", user), ("password", password)])
            .send()
            .await
            .expect("Failed to submit login form")
    }
}

/// Start the stub care API, returning its GraphQL endpoint.
async fn spawn_stub_api() -> Url {
    let router = Router::new().route("/graphql", post(graphql));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub API listener");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub API error");
    });

    Url::parse(&format!("http://{addr}/graphql")).expect("valid stub URL")
}

/// Answer the GraphQL operations the front-end issues with canned data.
async fn graphql(Json(body): Json<Value>) -> Json<Value> {
    let operation = body
        .get("operationName")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let variables = body.get("variables").cloned().unwrap_or_else(|| json!({}));

    let data = match operation {
        "GetUsers" => json!({
            "getUsers": [
                {
                    "id": "1",
                    "name": "Nora Visser",
                    "email": "nora@zorg.example",
                    "job_title": "Nurse"
                }
            ]
        }),
        "GetClients" => json!({
            "getClients": [
                {
                    "id": "1",
                    "name": "Jan de Vries",
                    "email": "jan@zorg.example"
                }
            ]
        }),
        "GetObservationFiles" => json!({
            "getObservationFiles": [stub_dossier()]
        }),
        "GetObservationFile" => {
            let id = variables.get("id").and_then(Value::as_str).unwrap_or_default();
            if id == "1" {
                json!({ "getObservationFile": stub_dossier() })
            } else {
                json!({ "getObservationFile": null })
            }
        }
        "CreateClient" => {
            let input = variables.get("input").cloned().unwrap_or_else(|| json!({}));
            json!({
                "createClient": {
                    "id": "2",
                    "name": input.get("name").and_then(Value::as_str).unwrap_or_default(),
                    "email": input.get("email").and_then(Value::as_str).unwrap_or_default()
                }
            })
        }
        "CreateUser" => {
            let input = variables.get("input").cloned().unwrap_or_else(|| json!({}));
            json!({
                "createUser": {
                    "id": "2",
                    "name": input.get("name").and_then(Value::as_str).unwrap_or_default(),
                    "email": input.get("email").and_then(Value::as_str).unwrap_or_default(),
                    "job_title": input.get("job_title").and_then(Value::as_str).unwrap_or_default()
                }
            })
        }
        "CreateObservationFile" => json!({
            "createObservationFile": { "id": "99" }
        }),
        _ => {
            return Json(json!({
                "errors": [{ "message": format!("unknown operation: {operation}") }]
            }));
        }
    };

    Json(json!({ "data": data }))
}

/// The canned observation dossier served by the stub.
fn stub_dossier() -> Value {
    json!({
        "id": "1",
        "shift": "day",
        "observations": [
            { "id": "10", "description": "Slept well after breakfast" }
        ],
        "client": {
            "first_name": "Jan",
            "last_name": "de Vries",
            "birthday": "1948-05-12",
            "contact_person": "M. de Vries"
        },
        "user": { "name": "Nora Visser" },
        "createdAt": "2026-08-06T08:30:00Z"
    })
}
