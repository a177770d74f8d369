//! Route tokens.
//!
//! Navigation targets are signalled with these constants rather than string
//! literals in handlers and templates.

/// Root route; logout navigates here.
pub const ROOT: &str = "/";

/// Day overview; the guard's redirect target for unauthorized admin visits.
pub const OVERVIEW_PATH: &str = "/overview";

/// Dossier creation form.
pub const CREATE_DOSSIER_PATH: &str = "/dossiers/new";

/// Dossier list.
pub const DOSSIER_LIST_PATH: &str = "/dossiers";

/// Client list.
pub const CLIENT_LIST_PATH: &str = "/clients";

/// The gated admin panel.
pub const ADMIN_PATH: &str = "/admin";

/// The login challenge form.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// The drawer's "Administration" action.
pub const ADMIN_ACCESS_PATH: &str = "/admin/access";

/// The drawer's "Log out" action.
pub const LOGOUT_PATH: &str = "/logout";
