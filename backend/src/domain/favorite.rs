//! Favourite bookmark relation between a user and a medication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User-to-medication bookmark.
///
/// ## Invariants
/// - At most one favourite exists per `(user_id, medication_id)` pair;
///   adding the same pair again replaces the existing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    /// Stable identifier assigned on creation.
    #[schema(example = 1)]
    pub id: i32,
    /// Owning user.
    pub user_id: i32,
    /// Bookmarked medication.
    pub medication_id: i32,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Payload identifying a `(user, medication)` pair.
///
/// Used both for adding favourites and for removing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteKey {
    /// Owning user.
    pub user_id: i32,
    /// Bookmarked medication.
    pub medication_id: i32,
}
