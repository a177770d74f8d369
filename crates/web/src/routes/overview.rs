//! Day overview route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::Dossier;
use crate::filters;
use crate::middleware::take_flash;
use crate::services::auth::Notification;
use crate::state::AppState;

use super::paths;

/// Dossier summary view for list templates.
#[derive(Debug, Clone)]
pub struct DossierSummaryView {
    pub id: String,
    pub shift: String,
    pub client_name: String,
    pub contact_person: String,
    pub observation_count: usize,
    pub author: String,
    pub created_at: String,
}

impl From<&Dossier> for DossierSummaryView {
    fn from(dossier: &Dossier) -> Self {
        Self {
            id: dossier.id.to_string(),
            shift: dossier.shift.label().to_string(),
            client_name: dossier.client.full_name(),
            contact_person: dossier
                .client
                .contact_person
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            observation_count: dossier.observations.len(),
            author: dossier.author.clone(),
            created_at: dossier.created_at.clone(),
        }
    }
}

/// Day overview template.
#[derive(Template)]
#[template(path = "overview.html")]
pub struct OverviewTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub dossiers: Vec<DossierSummaryView>,
}

/// Day overview page handler.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Html<String> {
    let dossiers = match state.api().get_observation_files().await {
        Ok(dossiers) => dossiers.iter().map(DossierSummaryView::from).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch observation dossiers: {e}");
            vec![]
        }
    };

    let template = OverviewTemplate {
        current_path: paths::OVERVIEW_PATH.to_string(),
        flash: take_flash(&session).await,
        dossiers,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}
