//! Admin panel route handlers (guarded).

use askama::Template;
use axum::{
    Form, Router,
    extract::State,
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use zorglog_core::Email;

use crate::api::{Client, User};
use crate::error::AppError;
use crate::filters;
use crate::middleware::{RequireAdminAccess, set_flash, take_flash};
use crate::services::auth::Notification;
use crate::state::AppState;

use super::paths;

/// Admin panel template.
#[derive(Template)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub clients: Vec<Client>,
    pub users: Vec<User>,
}

/// Form payload for client creation.
#[derive(Debug, Deserialize)]
pub struct NewClientForm {
    pub name: String,
    pub email: String,
}

/// Form payload for user creation.
#[derive(Debug, Deserialize)]
pub struct NewUserForm {
    pub name: String,
    pub email: String,
    pub job_title: String,
}

/// Build the admin router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::ADMIN_PATH, get(index))
        .route("/admin/clients", post(create_client))
        .route("/admin/users", post(create_user))
}

/// Admin panel page handler.
///
/// GET /admin
#[instrument(skip(_guard, state, session))]
pub async fn index(
    _guard: RequireAdminAccess,
    State(state): State<AppState>,
    session: Session,
) -> Html<String> {
    // Fetch both listings from the care API in parallel
    let (clients_result, users_result) =
        tokio::join!(state.api().get_clients(), state.api().get_users());

    let clients = match clients_result {
        Ok(clients) => clients,
        Err(e) => {
            tracing::error!("Failed to fetch clients: {e}");
            vec![]
        }
    };

    let users = match users_result {
        Ok(users) => users,
        Err(e) => {
            tracing::error!("Failed to fetch users: {e}");
            vec![]
        }
    };

    let template = AdminTemplate {
        current_path: paths::ADMIN_PATH.to_string(),
        flash: take_flash(&session).await,
        clients,
        users,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Client creation handler.
///
/// POST /admin/clients
#[instrument(skip(_guard, state, session, form))]
pub async fn create_client(
    _guard: RequireAdminAccess,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewClientForm>,
) -> Result<Redirect, AppError> {
    let Ok(email) = Email::parse(form.email.trim()) else {
        set_flash(&session, &Notification::error("Invalid email address")).await;
        return Ok(Redirect::to(paths::ADMIN_PATH));
    };

    state.api().create_client(form.name.trim(), email.as_str()).await?;

    set_flash(&session, &Notification::success("Client created")).await;
    Ok(Redirect::to(paths::ADMIN_PATH))
}

/// User creation handler.
///
/// POST /admin/users
#[instrument(skip(_guard, state, session, form))]
pub async fn create_user(
    _guard: RequireAdminAccess,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewUserForm>,
) -> Result<Redirect, AppError> {
    let Ok(email) = Email::parse(form.email.trim()) else {
        set_flash(&session, &Notification::error("Invalid email address")).await;
        return Ok(Redirect::to(paths::ADMIN_PATH));
    };

    state
        .api()
        .create_user(form.name.trim(), email.as_str(), form.job_title.trim())
        .await?;

    set_flash(&session, &Notification::success("User created")).await;
    Ok(Redirect::to(paths::ADMIN_PATH))
}
