//! Admin-access guard and flash helpers.
//!
//! Provides the extractor that guards admin route handlers. The guard runs
//! on every request into a guarded route, re-deriving authorization from the
//! credential store; a failed check redirects to the overview route without
//! offering the challenge (only the drawer's "Administration" action does).

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::routes::paths;
use crate::services::auth::{Notification, SessionCredentialStore, SessionGate};
use crate::state::AppState;

/// Session key for the pending flash notification.
const FLASH_KEY: &str = "flash";

/// Extractor that requires a stored pair passing the session gate.
///
/// If the browser is not authorized, redirects to the overview route.
///
/// # Example
///
/// ```rust,ignore
/// async fn admin_handler(
///     _guard: RequireAdminAccess,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reached when the gate passes
/// }
/// ```
pub struct RequireAdminAccess;

/// Error returned when the admin guard fails.
pub enum AdminAccessRejection {
    /// Redirect to the overview route (for HTML requests).
    RedirectToOverview,
    /// Unauthorized response (when no session is present at all).
    Unauthorized,
}

impl IntoResponse for AdminAccessRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToOverview => Redirect::to(paths::OVERVIEW_PATH).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for RequireAdminAccess {
    type Rejection = AdminAccessRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AdminAccessRejection::Unauthorized)?;

        let gate = SessionGate::new(
            state.config().admin.clone(),
            SessionCredentialStore::new(session),
        );

        if gate.is_authorized().await {
            Ok(Self)
        } else {
            Err(AdminAccessRejection::RedirectToOverview)
        }
    }
}

/// Queue a notification to be shown on the next rendered page.
pub async fn set_flash(session: &Session, notification: &Notification) {
    if let Err(error) = session.insert(FLASH_KEY, notification).await {
        tracing::warn!(%error, "failed to store flash notification");
    }
}

/// Take the pending notification, if any, clearing it from the session.
pub async fn take_flash(session: &Session) -> Option<Notification> {
    session
        .remove::<Notification>(FLASH_KEY)
        .await
        .ok()
        .flatten()
}
