//! Care shift enum.

use serde::{Deserialize, Serialize};

/// The shift during which an observation dossier was recorded.
///
/// Maps to the upstream API's `shift` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    #[default]
    Day,
    Evening,
    Night,
}

impl Shift {
    /// Human-readable label for list views.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Day => write!(f, "day"),
            Self::Evening => write!(f, "evening"),
            Self::Night => write!(f, "night"),
        }
    }
}

impl std::str::FromStr for Shift {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(format!("invalid shift: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_display_from_str_round_trip() {
        for shift in [Shift::Day, Shift::Evening, Shift::Night] {
            assert_eq!(Shift::from_str(&shift.to_string()).unwrap(), shift);
        }
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(Shift::from_str("weekend").is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Shift::Night).unwrap(), "\"night\"");
        let shift: Shift = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(shift, Shift::Evening);
    }
}
