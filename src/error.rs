use serde::Serialize;
use thiserror::Error;

use crate::models::Role;

#[derive(Error, Debug, Serialize)]
pub enum MediBookError {
    /// A required booking or registration field was left empty
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    /// Email is already registered
    #[error("Email {0} already registered")]
    EmailAlreadyRegistered(String),

    /// Login credentials did not match any user
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Self-registration is only open to patients and doctors
    #[error("Cannot register with role {0}")]
    InvalidRegistrationRole(Role),

    /// The targeted user exists but does not hold the doctor role
    #[error("User {0} is not a doctor")]
    NotADoctor(String),

    /// Underlying key-value substrate failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Value could not be serialized for persistence
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
