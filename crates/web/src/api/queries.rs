//! GraphQL query definitions for the care API.
//!
//! Uses `graphql_client` to generate type-safe Rust code from GraphQL queries.

use graphql_client::GraphQLQuery;

// =============================================================================
// Custom scalar type aliases (used by graphql_client)
// =============================================================================

/// ISO 8601 date-time string.
type DateTime = String;

/// Date string (YYYY-MM-DD format).
type Date = String;

// =============================================================================
// User queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetUsers;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/users.graphql",
    response_derives = "Debug, Clone"
)]
pub struct CreateUser;

// =============================================================================
// Client queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/clients.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetClients;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/clients.graphql",
    response_derives = "Debug, Clone"
)]
pub struct CreateClient;

// =============================================================================
// Observation dossier queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/dossiers.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetObservationFiles;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/dossiers.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetObservationFile;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/dossiers.graphql",
    response_derives = "Debug, Clone"
)]
pub struct CreateObservationFile;
