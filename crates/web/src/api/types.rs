//! Domain types returned by the care API.

use zorglog_core::{ClientId, DossierId, ObservationId, Shift, UserId};

/// A care-facility user (staff member).
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub job_title: String,
}

/// A client of the care facility.
#[derive(Debug, Clone)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
}

/// A single observation inside a dossier.
#[derive(Debug, Clone)]
pub struct Observation {
    pub id: ObservationId,
    pub description: String,
}

/// Client details as embedded in a dossier.
///
/// The list query exposes the contact person; the detail query does not.
#[derive(Debug, Clone, Default)]
pub struct DossierClient {
    pub first_name: String,
    pub last_name: String,
    pub birthday: Option<String>,
    pub contact_person: Option<String>,
}

impl DossierClient {
    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }
}

/// An observation dossier.
#[derive(Debug, Clone)]
pub struct Dossier {
    pub id: DossierId,
    pub shift: Shift,
    pub observations: Vec<Observation>,
    pub client: DossierClient,
    /// Name of the staff member who recorded the dossier.
    pub author: String,
    /// ISO 8601 creation timestamp, as returned by the upstream.
    pub created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_trims_missing_parts() {
        let client = DossierClient {
            first_name: "Anna".to_string(),
            last_name: String::new(),
            ..DossierClient::default()
        };
        assert_eq!(client.full_name(), "Anna");
    }
}
