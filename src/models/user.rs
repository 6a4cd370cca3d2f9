use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Patient,
    Doctor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// Doctor-specific fields, carried only by users holding the doctor role.
/// A freshly registered doctor starts from the default (empty) profile.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub specialization: String,
    /// Years of practice
    pub experience: u32,
    pub qualification: String,
    /// Patient rating on a 0-5 scale
    pub rating: f64,
    /// Consultation fee in currency units
    pub fees: u64,
    pub about: String,
    pub availability: Vec<TimeSlot>,
}

/// Role-tagged variant of a user. The tag lands on the wire as the `role`
/// field of the enclosing user record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum UserKind {
    Patient,
    Doctor(DoctorProfile),
    Admin,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: UserKind,
}

impl User {
    pub fn role(&self) -> Role {
        match self.kind {
            UserKind::Patient => Role::Patient,
            UserKind::Doctor(_) => Role::Doctor,
            UserKind::Admin => Role::Admin,
        }
    }

    pub fn is_doctor(&self) -> bool {
        matches!(self.kind, UserKind::Doctor(_))
    }

    pub fn doctor_profile(&self) -> Option<&DoctorProfile> {
        match &self.kind {
            UserKind::Doctor(profile) => Some(profile),
            _ => None,
        }
    }
}
