//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Role assigned to users created without an explicit role.
pub const DEFAULT_ROLE: &str = "user";

/// Registered user identity used for attribution and favouriting.
///
/// ## Invariants
/// - `email` is unique across the store (enforced by the signup handler
///   before creation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier assigned on creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Login email, case-sensitive as stored.
    #[schema(example = "medic@example.org")]
    pub email: String,
    /// Display name.
    #[schema(example = "Jordan Reese")]
    pub name: String,
    /// Optional professional licence number.
    pub license_number: Option<String>,
    /// Role, `"user"` unless set at signup.
    #[schema(example = "user")]
    pub role: String,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a user.
///
/// The store assigns `id` and `created_at`, and defaults `role` to
/// [`DEFAULT_ROLE`] when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Login email, must not already exist.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Optional professional licence number.
    #[serde(default)]
    pub license_number: Option<String>,
    /// Optional role override.
    #[serde(default)]
    pub role: Option<String>,
}

impl NewUser {
    /// Role to store for this user, falling back to [`DEFAULT_ROLE`].
    pub fn role_or_default(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_to_user() {
        let new_user = NewUser {
            email: "a@b.c".into(),
            name: "Ada".into(),
            license_number: None,
            role: None,
        };
        assert_eq!(new_user.role_or_default(), "user");
    }

    #[test]
    fn explicit_role_is_preserved() {
        let new_user = NewUser {
            email: "a@b.c".into(),
            name: "Ada".into(),
            license_number: None,
            role: Some("admin".into()),
        };
        assert_eq!(new_user.role_or_default(), "admin");
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = r#"{"email":"a@b.c","name":"Ada","licenseNumber":"SK-42"}"#;
        let new_user: NewUser = serde_json::from_str(json).expect("deserialise");
        assert_eq!(new_user.license_number.as_deref(), Some("SK-42"));
    }
}
