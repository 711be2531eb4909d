//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{medications, user_favorites, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub license_number: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub email: &'a str,
    pub name: &'a str,
    pub license_number: Option<&'a str>,
    pub role: &'a str,
}

/// Row struct for reading from the medications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = medications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MedicationRow {
    pub id: i32,
    pub name: String,
    pub classification: String,
    pub alert_level: String,
    pub category: Option<String>,
    pub indications: String,
    pub contraindications: String,
    pub adult_dosage: String,
    pub pediatric_dosage: Option<String>,
    pub route_of_administration: Option<String>,
    pub onset_duration: Option<String>,
    pub special_considerations: Option<String>,
    pub side_effects: Option<String>,
    pub created_by: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating new medication records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = medications)]
pub(crate) struct NewMedicationRow<'a> {
    pub name: &'a str,
    pub classification: &'a str,
    pub alert_level: &'a str,
    pub category: Option<&'a str>,
    pub indications: &'a str,
    pub contraindications: &'a str,
    pub adult_dosage: &'a str,
    pub pediatric_dosage: Option<&'a str>,
    pub route_of_administration: Option<&'a str>,
    pub onset_duration: Option<&'a str>,
    pub special_considerations: Option<&'a str>,
    pub side_effects: Option<&'a str>,
    pub created_by: Option<i32>,
}

/// Changeset struct for partial medication updates.
///
/// Outer `None` skips the column; for nullable columns the inner `None`
/// writes SQL NULL. `updated_at` is always stamped by the adapter.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = medications)]
pub(crate) struct MedicationChangeset {
    pub name: Option<String>,
    pub classification: Option<String>,
    pub alert_level: Option<String>,
    pub category: Option<Option<String>>,
    pub indications: Option<String>,
    pub contraindications: Option<String>,
    pub adult_dosage: Option<String>,
    pub pediatric_dosage: Option<Option<String>>,
    pub route_of_administration: Option<Option<String>>,
    pub onset_duration: Option<Option<String>>,
    pub special_considerations: Option<Option<String>>,
    pub side_effects: Option<Option<String>>,
    pub created_by: Option<Option<i32>>,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading from the user_favorites table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_favorites)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FavoriteRow {
    pub id: i32,
    pub user_id: i32,
    pub medication_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new favourite records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_favorites)]
pub(crate) struct NewFavoriteRow {
    pub user_id: i32,
    pub medication_id: i32,
}
