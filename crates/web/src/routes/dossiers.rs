//! Dossier list, detail, and creation route handlers.

use askama::Template;
use axum::{
    Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use zorglog_core::{ClientId, DossierId, Shift};

use crate::api::{Client, Dossier};
use crate::error::AppError;
use crate::filters;
use crate::middleware::{set_flash, take_flash};
use crate::services::auth::Notification;
use crate::state::AppState;

use super::overview::DossierSummaryView;
use super::paths;

/// Observation view for the detail template.
#[derive(Debug, Clone)]
pub struct ObservationView {
    pub description: String,
}

/// Dossier detail view.
#[derive(Debug, Clone)]
pub struct DossierDetailView {
    pub id: String,
    pub shift: String,
    pub client_name: String,
    pub birthday: String,
    pub observations: Vec<ObservationView>,
    pub author: String,
    pub created_at: String,
}

impl From<&Dossier> for DossierDetailView {
    fn from(dossier: &Dossier) -> Self {
        Self {
            id: dossier.id.to_string(),
            shift: dossier.shift.label().to_string(),
            client_name: dossier.client.full_name(),
            birthday: dossier
                .client
                .birthday
                .clone()
                .unwrap_or_else(|| "—".to_string()),
            observations: dossier
                .observations
                .iter()
                .map(|observation| ObservationView {
                    description: observation.description.clone(),
                })
                .collect(),
            author: dossier.author.clone(),
            created_at: dossier.created_at.clone(),
        }
    }
}

/// Dossier list template.
#[derive(Template)]
#[template(path = "dossiers/index.html")]
pub struct DossiersIndexTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub dossiers: Vec<DossierSummaryView>,
}

/// Dossier detail template.
#[derive(Template)]
#[template(path = "dossiers/detail.html")]
pub struct DossierDetailTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub dossier: DossierDetailView,
}

/// New dossier form template.
#[derive(Template)]
#[template(path = "dossiers/new.html")]
pub struct NewDossierTemplate {
    pub current_path: String,
    pub flash: Option<Notification>,
    pub clients: Vec<Client>,
}

/// Form payload for dossier creation.
#[derive(Debug, Deserialize)]
pub struct NewDossierForm {
    pub shift: String,
    pub client_id: i32,
    pub description: String,
}

/// Dossier list page handler.
#[instrument(skip(state, session))]
pub async fn index(State(state): State<AppState>, session: Session) -> Html<String> {
    let dossiers = match state.api().get_observation_files().await {
        Ok(dossiers) => dossiers.iter().map(DossierSummaryView::from).collect(),
        Err(e) => {
            tracing::error!("Failed to fetch observation dossiers: {e}");
            vec![]
        }
    };

    let template = DossiersIndexTemplate {
        current_path: paths::DOSSIER_LIST_PATH.to_string(),
        flash: take_flash(&session).await,
        dossiers,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Dossier detail page handler.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let dossier = state
        .api()
        .get_observation_file(DossierId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("dossier {id}")))?;

    let template = DossierDetailTemplate {
        current_path: paths::DOSSIER_LIST_PATH.to_string(),
        flash: take_flash(&session).await,
        dossier: DossierDetailView::from(&dossier),
    };

    Ok(Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    })))
}

/// New dossier form handler.
#[instrument(skip(state, session))]
pub async fn new_form(State(state): State<AppState>, session: Session) -> Html<String> {
    let clients = match state.api().get_clients().await {
        Ok(clients) => clients,
        Err(e) => {
            tracing::error!("Failed to fetch clients: {e}");
            vec![]
        }
    };

    let template = NewDossierTemplate {
        current_path: paths::CREATE_DOSSIER_PATH.to_string(),
        flash: take_flash(&session).await,
        clients,
    };

    Html(template.render().unwrap_or_else(|e| {
        tracing::error!("Template render error: {}", e);
        "Internal Server Error".to_string()
    }))
}

/// Dossier creation handler.
#[instrument(skip(state, session, form))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewDossierForm>,
) -> Result<Redirect, AppError> {
    let shift: Shift = form
        .shift
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown shift: {}", form.shift)))?;

    let description = form.description.trim();
    if description.is_empty() {
        set_flash(&session, &Notification::error("Observation cannot be empty")).await;
        return Ok(Redirect::to(paths::CREATE_DOSSIER_PATH));
    }

    let id = state
        .api()
        .create_observation_file(
            shift,
            ClientId::new(form.client_id),
            vec![description.to_string()],
        )
        .await?;

    set_flash(&session, &Notification::success("Observation dossier created")).await;
    Ok(Redirect::to(&format!("{}/{id}", paths::DOSSIER_LIST_PATH)))
}
