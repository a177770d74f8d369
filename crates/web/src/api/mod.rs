//! Upstream care API client.
//!
//! # Architecture
//!
//! - Uses `graphql-client` crate for type-safe GraphQL queries
//! - Direct API calls to the care service (no local database)
//! - The upstream is treated as reliable; list pages render empty on a
//!   failed read and the error is logged
//!
//! # Example
//!
//! ```rust,ignore
//! use zorglog_web::api::ApiClient;
//!
//! let client = ApiClient::new(&config.api);
//!
//! // Get clients
//! let clients = client.get_clients().await?;
//!
//! // Get a specific observation dossier
//! let dossier = client.get_observation_file(DossierId::new(12)).await?;
//! ```

mod client;
mod conversions;
pub mod queries;
pub mod types;

pub use client::ApiClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when interacting with the care API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// Response data did not have the expected shape.
    #[error("Unexpected response data: {0}")]
    Data(String),
}

/// A GraphQL error returned by the care API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
