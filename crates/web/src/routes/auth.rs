//! Session gate route handlers.
//!
//! The drawer's "Administration" action, the login challenge, and logout.

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use zorglog_core::Credential;

use crate::filters;
use crate::middleware::{set_flash, take_flash};
use crate::services::auth::{
    AccessDecision, Notification, SessionCredentialStore, SessionGate,
};
use crate::state::AppState;

use super::paths;

/// Login challenge template.
#[derive(Template)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
}

/// Form payload of the login challenge.
///
/// Field names match the original challenge dialog. No `Debug` derive: the
/// payload carries the password.
#[derive(Deserialize)]
pub struct LoginForm {
    pub user: String,
    pub password: String,
}

/// Build the auth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::ADMIN_ACCESS_PATH, post(request_access))
        .route(paths::ADMIN_LOGIN_PATH, get(login_page).post(submit))
        .route(paths::LOGOUT_PATH, post(logout))
}

/// Construct the session gate for a request.
fn gate(state: &AppState, session: Session) -> SessionGate<SessionCredentialStore> {
    SessionGate::new(
        state.config().admin.clone(),
        SessionCredentialStore::new(session),
    )
}

/// The drawer's "Administration" action.
///
/// POST /admin/access
///
/// A browser holding a previously stored pair goes straight to the admin
/// panel; anyone else is sent to the login challenge.
#[instrument(skip(state, session))]
async fn request_access(State(state): State<AppState>, session: Session) -> Redirect {
    match gate(&state, session).request_admin_access().await {
        AccessDecision::Allow => Redirect::to(paths::ADMIN_PATH),
        AccessDecision::Challenge => Redirect::to(paths::ADMIN_LOGIN_PATH),
    }
}

/// Render the login challenge.
///
/// GET /admin/login
async fn login_page(session: Session) -> impl IntoResponse {
    let template = LoginTemplate {
        current_path: paths::ADMIN_LOGIN_PATH.to_string(),
        flash: take_flash(&session).await,
    };

    Html(
        template
            .render()
            .unwrap_or_else(|_| String::from("Error rendering template")),
    )
}

/// Submit the login challenge.
///
/// POST /admin/login
///
/// A matching pair is persisted and the browser continues to the admin
/// panel. A mismatch leaves the store untouched and re-opens the form with
/// an error notification.
#[instrument(skip(state, session, form))]
async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Redirect {
    let candidate = Credential::new(form.user, form.password);

    match gate(&state, session.clone()).submit_credential(&candidate).await {
        Ok(()) => Redirect::to(paths::ADMIN_PATH),
        Err(error) => {
            set_flash(&session, &error.notification()).await;
            Redirect::to(paths::ADMIN_LOGIN_PATH)
        }
    }
}

/// Log out and clear the stored pair.
///
/// POST /logout
#[instrument(skip(state, session))]
async fn logout(State(state): State<AppState>, session: Session) -> Redirect {
    let notification = gate(&state, session.clone()).log_out().await;
    set_flash(&session, &notification).await;

    Redirect::to(paths::ROOT)
}
