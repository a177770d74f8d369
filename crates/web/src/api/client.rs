//! Care API GraphQL client.

use std::sync::Arc;

use graphql_client::GraphQLQuery;
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use zorglog_core::{ClientId, DossierId, Shift};

use crate::config::ApiConfig;

use super::conversions::{
    convert_client, convert_created_client, convert_created_user, convert_dossier,
    convert_dossier_detail, convert_user,
};
use super::queries::{
    CreateClient, CreateObservationFile, CreateUser, GetClients, GetObservationFile,
    GetObservationFiles, GetUsers, create_client, create_observation_file, create_user,
    get_clients, get_observation_file, get_observation_files, get_users,
};
use super::types::{Client, Dossier, User};
use super::{ApiError, GraphQLError, GraphQLErrorLocation};

/// Care API GraphQL client.
///
/// Provides type-safe access to the upstream dossier service for reading
/// users, clients, and observation dossiers, and for the admin panel's
/// create mutations.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl From<GraphQLErrorResponse> for GraphQLError {
    fn from(error: GraphQLErrorResponse) -> Self {
        Self {
            message: error.message,
            locations: error
                .locations
                .into_iter()
                .map(|location| GraphQLErrorLocation {
                    line: location.line,
                    column: location.column,
                })
                .collect(),
            path: error.path,
        }
    }
}

impl ApiClient {
    /// Create a new care API client.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                endpoint: config.endpoint.clone(),
            }),
        }
    }

    /// Execute a GraphQL operation and unwrap its data.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, ApiError> {
        let body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(self.inner.endpoint.as_str())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GraphQLResponse<Q::ResponseData> = response.json().await?;

        if let Some(errors) = payload.errors
            && !errors.is_empty()
        {
            return Err(ApiError::GraphQL(
                errors.into_iter().map(GraphQLError::from).collect(),
            ));
        }

        payload
            .data
            .ok_or_else(|| ApiError::Data("response contained no data".to_string()))
    }

    /// Fetch all users.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>, ApiError> {
        let data = self.execute::<GetUsers>(get_users::Variables {}).await?;
        data.get_users.into_iter().map(convert_user).collect()
    }

    /// Fetch all clients.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_clients(&self) -> Result<Vec<Client>, ApiError> {
        let data = self.execute::<GetClients>(get_clients::Variables {}).await?;
        data.get_clients.into_iter().map(convert_client).collect()
    }

    /// Fetch all observation dossiers.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_observation_files(&self) -> Result<Vec<Dossier>, ApiError> {
        let data = self
            .execute::<GetObservationFiles>(get_observation_files::Variables {})
            .await?;
        data.get_observation_files
            .into_iter()
            .map(convert_dossier)
            .collect()
    }

    /// Fetch a single observation dossier by ID.
    ///
    /// Returns `None` when the upstream does not know the ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn get_observation_file(&self, id: DossierId) -> Result<Option<Dossier>, ApiError> {
        let data = self
            .execute::<GetObservationFile>(get_observation_file::Variables { id: id.to_string() })
            .await?;
        data.get_observation_file
            .map(convert_dossier_detail)
            .transpose()
    }

    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn create_client(&self, name: &str, email: &str) -> Result<Client, ApiError> {
        let input = create_client::ClientInput {
            name: name.to_string(),
            email: email.to_string(),
        };
        let data = self
            .execute::<CreateClient>(create_client::Variables { input })
            .await?;
        convert_created_client(data.create_client)
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self))]
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        job_title: &str,
    ) -> Result<User, ApiError> {
        let input = create_user::UserInput {
            name: name.to_string(),
            email: email.to_string(),
            job_title: job_title.to_string(),
        };
        let data = self
            .execute::<CreateUser>(create_user::Variables { input })
            .await?;
        convert_created_user(data.create_user)
    }

    /// Create an observation dossier, returning its new ID.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the response is malformed.
    #[instrument(skip(self, descriptions))]
    pub async fn create_observation_file(
        &self,
        shift: Shift,
        client_id: ClientId,
        descriptions: Vec<String>,
    ) -> Result<DossierId, ApiError> {
        let input = create_observation_file::ObservationFileInput {
            shift: shift.to_string(),
            client_id: client_id.to_string(),
            observations: descriptions
                .into_iter()
                .map(|description| create_observation_file::ObservationInput { description })
                .collect(),
        };
        let data = self
            .execute::<CreateObservationFile>(create_observation_file::Variables { input })
            .await?;

        let raw = data.create_observation_file.id;
        raw.parse()
            .map(DossierId::new)
            .map_err(|_| ApiError::Data(format!("non-numeric id in response: {raw}")))
    }
}
