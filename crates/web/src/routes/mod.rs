//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to the day overview
//! GET  /overview               - Day overview (observation dossiers)
//!
//! # Dossiers
//! GET  /dossiers               - Dossier listing
//! GET  /dossiers/new           - New dossier form
//! POST /dossiers/new           - Create dossier
//! GET  /dossiers/{id}          - Dossier detail
//!
//! # Clients
//! GET  /clients                - Client listing
//!
//! # Admin access (session gate)
//! POST /admin/access           - Drawer's "Administration" action
//! GET  /admin/login            - Login challenge form
//! POST /admin/login            - Submit challenge
//! POST /logout                 - Log out
//!
//! # Admin panel (guarded)
//! GET  /admin                  - Client/user listings and create forms
//! POST /admin/clients          - Create client
//! POST /admin/users            - Create user
//! ```

pub mod admin;
pub mod auth;
pub mod clients;
pub mod dossiers;
pub mod overview;
pub mod paths;

use axum::{
    Router,
    response::Redirect,
    routing::get,
};

use crate::state::AppState;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(paths::ROOT, get(root))
        .route(paths::OVERVIEW_PATH, get(overview::index))
        .route(paths::DOSSIER_LIST_PATH, get(dossiers::index))
        .route(
            paths::CREATE_DOSSIER_PATH,
            get(dossiers::new_form).post(dossiers::create),
        )
        .route("/dossiers/{id}", get(dossiers::show))
        .route(paths::CLIENT_LIST_PATH, get(clients::index))
        .merge(auth::router())
        .merge(admin::router())
}

/// The root lands on the day overview.
async fn root() -> Redirect {
    Redirect::to(paths::OVERVIEW_PATH)
}
