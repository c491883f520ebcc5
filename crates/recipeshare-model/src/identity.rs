//! Authenticated identity as seen by the client

use crate::id::UserId;
use serde::{Deserialize, Serialize};

/// The authenticated user principal
///
/// Absence (`None` wherever an `Option<Identity>` flows) means signed-out.
/// The session context holds at most one of these at a time and every
/// consumer treats it as read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned user id
    pub id: UserId,
    /// Email the user signed in with, when the provider exposes one
    pub email: Option<String>,
}

impl Identity {
    /// Identity carrying an id only
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<UserId>) -> Self {
        Self {
            id: id.into(),
            email: None,
        }
    }

    /// Attach the sign-in email
    #[inline]
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
