//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layers (capture errors, outermost)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with in-memory store)
//! 4. Admin guard (extractor on guarded routes)

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAccess, set_flash, take_flash};
pub use session::create_session_layer;
