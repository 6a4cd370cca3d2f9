use chrono::Utc;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::error::MediBookError;
use crate::models::{DoctorProfile, Role, User, UserKind};
use crate::storage::{Store, keys};

/// One authenticated session over a shared store.
///
/// Each instance is an explicit session object: two `Session`s built over
/// clones of the same [`Store`] behave like two browser tabs sharing one
/// persisted state, each with its own current user.
pub struct Session {
    store: Store,
    current: Option<User>,
}

impl Session {
    /// Starts a session with no authenticated user.
    pub fn new(store: Store) -> Self {
        Session {
            store,
            current: None,
        }
    }

    /// Starts a session and restores the persisted current user, if any.
    /// Restoration trusts the stored record; credentials are not
    /// re-validated.
    pub async fn restore(store: Store) -> Self {
        let current: Option<User> = store.get(keys::CURRENT_USER, None).await;
        if let Some(user) = &current {
            info!("Restored session for user {}", user.id);
        }
        Session { store, current }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Exact, case-sensitive credential match against the users collection.
    /// On failure the session is left untouched.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, MediBookError> {
        info!("Login attempt for {}", email);
        let users: Vec<User> = self.store.get(keys::USERS, Vec::new()).await;
        let found = users
            .into_iter()
            .find(|u| u.email == email && u.password == password);

        let user = match found {
            Some(user) => user,
            None => {
                warn!("Login failed for {}", email);
                return Err(MediBookError::InvalidCredentials);
            }
        };

        self.store.set(keys::CURRENT_USER, &user).await?;
        debug!("User {} logged in", user.id);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Creates a new patient or doctor account and signs it in. Fails
    /// without writing when the email is already taken.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
        name: &str,
        role: Role,
    ) -> Result<User, MediBookError> {
        info!("Registering {} as {}", email, role);
        if email.trim().is_empty() {
            return Err(MediBookError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(MediBookError::MissingField("password"));
        }
        if name.trim().is_empty() {
            return Err(MediBookError::MissingField("name"));
        }
        let kind = match role {
            Role::Patient => UserKind::Patient,
            Role::Doctor => UserKind::Doctor(DoctorProfile::default()),
            Role::Admin => return Err(MediBookError::InvalidRegistrationRole(role)),
        };

        let mut users: Vec<User> = self.store.get(keys::USERS, Vec::new()).await;
        if users.iter().any(|u| u.email == email) {
            warn!("Registration rejected, email {} already registered", email);
            return Err(MediBookError::EmailAlreadyRegistered(email.to_string()));
        }

        let user = User {
            id: format!("{}-{}", role, Uuid::new_v4()),
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            phone: None,
            created_at: Utc::now(),
            kind,
        };
        users.push(user.clone());
        self.store.set(keys::USERS, &users).await?;

        self.store.set(keys::CURRENT_USER, &user).await?;
        debug!("User {} registered and logged in", user.id);
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clears the session and its persisted record. Always succeeds from the
    /// caller's point of view; a logged-out session stays logged out.
    pub async fn logout(&mut self) -> Result<(), MediBookError> {
        if let Some(user) = &self.current {
            info!("User {} logged out", user.id);
        }
        self.current = None;
        self.store.remove(keys::CURRENT_USER).await
    }
}
