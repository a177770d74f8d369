//! Conversions from generated GraphQL response types to domain types.

use zorglog_core::{ClientId, DossierId, ObservationId, Shift, UserId};

use super::queries::{
    create_client, create_user, get_clients, get_observation_file, get_observation_files,
    get_users,
};
use super::types::{Client, Dossier, DossierClient, Observation, User};
use super::ApiError;

/// Parse an upstream ID string into its numeric form.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Data(format!("non-numeric id in response: {raw}")))
}

/// Parse an upstream shift string.
fn parse_shift(raw: &str) -> Result<Shift, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Data(format!("unknown shift in response: {raw}")))
}

pub(super) fn convert_user(user: get_users::GetUsersGetUsers) -> Result<User, ApiError> {
    Ok(User {
        id: UserId::new(parse_id(&user.id)?),
        name: user.name,
        email: user.email,
        job_title: user.job_title,
    })
}

pub(super) fn convert_created_user(
    user: create_user::CreateUserCreateUser,
) -> Result<User, ApiError> {
    Ok(User {
        id: UserId::new(parse_id(&user.id)?),
        name: user.name,
        email: user.email,
        job_title: user.job_title,
    })
}

pub(super) fn convert_client(
    client: get_clients::GetClientsGetClients,
) -> Result<Client, ApiError> {
    Ok(Client {
        id: ClientId::new(parse_id(&client.id)?),
        name: client.name,
        email: client.email,
    })
}

pub(super) fn convert_created_client(
    client: create_client::CreateClientCreateClient,
) -> Result<Client, ApiError> {
    Ok(Client {
        id: ClientId::new(parse_id(&client.id)?),
        name: client.name,
        email: client.email,
    })
}

pub(super) fn convert_dossier(
    file: get_observation_files::GetObservationFilesGetObservationFiles,
) -> Result<Dossier, ApiError> {
    let observations = file
        .observations
        .into_iter()
        .map(|observation| {
            Ok(Observation {
                id: ObservationId::new(parse_id(&observation.id)?),
                description: observation.description,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Dossier {
        id: DossierId::new(parse_id(&file.id)?),
        shift: parse_shift(&file.shift)?,
        observations,
        client: DossierClient {
            first_name: file.client.first_name.unwrap_or_default(),
            last_name: file.client.last_name.unwrap_or_default(),
            birthday: file.client.birthday,
            contact_person: file.client.contact_person,
        },
        author: file.user.name,
        created_at: file.created_at,
    })
}

pub(super) fn convert_dossier_detail(
    file: get_observation_file::GetObservationFileGetObservationFile,
) -> Result<Dossier, ApiError> {
    let observations = file
        .observations
        .into_iter()
        .map(|observation| {
            Ok(Observation {
                id: ObservationId::new(parse_id(&observation.id)?),
                description: observation.description,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    Ok(Dossier {
        id: DossierId::new(parse_id(&file.id)?),
        shift: parse_shift(&file.shift)?,
        observations,
        client: DossierClient {
            first_name: file.client.first_name.unwrap_or_default(),
            last_name: file.client.last_name.unwrap_or_default(),
            birthday: file.client.birthday,
            // The detail query does not select the contact person.
            contact_person: None,
        },
        author: file.user.name,
        created_at: file.created_at,
    })
}
