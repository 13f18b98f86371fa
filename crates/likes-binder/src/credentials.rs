//! Login Credentials
//!
//! One input handler per field, produced by a function instead of written
//! out twice.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::Username => "username",
            CredentialField::Password => "password",
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn field_mut(&mut self, field: CredentialField) -> &mut String {
        match field {
            CredentialField::Username => &mut self.username,
            CredentialField::Password => &mut self.password,
        }
    }
}

// Passwords never reach the log.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"*".repeat(self.password.chars().count()))
            .finish()
    }
}

/// Build the `input` handler for one field. The handler overwrites that
/// field with the input's current value.
pub fn input_handler(field: CredentialField) -> impl Fn(&mut Credentials, &str) + Copy {
    move |credentials, value| {
        tracing::trace!(field = field.as_str(), len = value.len(), "input changed");
        *credentials.field_mut(field) = value.to_string();
    }
}
