//! Client list route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::Client;
use crate::filters;
use crate::middleware::take_flash;
use crate::services::auth::Notification;
use crate::state::AppState;

use super::paths;

/// Client list template.
#[derive(Template)]
#[template(path = "clients/index.html")]
pub struct ClientsIndexTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub clients: Vec<Client>,
}

/// Client list page handler.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Html<String> {
    let clients = match state.api().get_clients().await {
        Ok(clients) => clients,
        Err(e) => {
            tracing::error!("Failed to fetch clients: {e}");
            vec![]
        }
    };

    let template = ClientsIndexTemplate {
        current_path: paths::CLIENT_LIST_PATH.to_string(),
        flash: take_flash(&session).await,
        clients,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
