//! Record store port shared by the durable and in-memory backends.
//!
//! In hexagonal terms this is a *driven* port: inbound adapters call it
//! through [`Storage`] without knowing which backend was selected at
//! startup. Handlers receive owned copies of records, never handles into
//! backend-internal state.

use async_trait::async_trait;

use crate::domain::{
    Favorite, Medication, MedicationFilters, MedicationUpdate, NewMedication, NewUser, User,
};

use super::define_port_error;

define_port_error! {
    /// Failures raised by record store backends.
    pub enum StorageError {
        /// Backend unreachable; the request should fail as a server fault.
        Connection { message: String } => "storage backend unreachable: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "storage query failed: {message}",
    }
}

/// Typed create/read/update/delete and query operations over users,
/// medications, and favourites.
///
/// Lookup methods return `Ok(None)` rather than an error when the record
/// does not exist; deletions report whether anything was removed and are
/// idempotent.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_user(&self, id: i32) -> Result<Option<User>, StorageError>;

    /// Fetch a user by exact email match.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError>;

    /// Create a user, assigning id, default role, and creation timestamp.
    ///
    /// Email uniqueness is the caller's responsibility: look the email up
    /// first and reject duplicates before calling this.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// List medications matching the filters, sorted ascending by name,
    /// paginated by the filters' offset and limit.
    async fn list_medications(
        &self,
        filters: &MedicationFilters,
    ) -> Result<Vec<Medication>, StorageError>;

    /// Fetch a medication by identifier.
    async fn find_medication(&self, id: i32) -> Result<Option<Medication>, StorageError>;

    /// Create a medication with both timestamps set to now.
    async fn create_medication(
        &self,
        medication: NewMedication,
    ) -> Result<Medication, StorageError>;

    /// Merge the provided fields onto an existing record and refresh
    /// `updated_at`. Returns `Ok(None)` when the id does not exist; never
    /// creates.
    async fn update_medication(
        &self,
        id: i32,
        update: MedicationUpdate,
    ) -> Result<Option<Medication>, StorageError>;

    /// Delete a medication and any favourites referencing it. Returns
    /// whether a record existed.
    async fn delete_medication(&self, id: i32) -> Result<bool, StorageError>;

    /// Full medication records joined through the user's favourites, in no
    /// guaranteed order.
    async fn list_favorites(&self, user_id: i32) -> Result<Vec<Medication>, StorageError>;

    /// Create or replace the favourite keyed by the pair.
    async fn add_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<Favorite, StorageError>;

    /// Remove the favourite keyed by the pair. Returns whether one existed.
    async fn remove_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<bool, StorageError>;

    /// Whether the pair is currently favourited.
    async fn is_favorite(&self, user_id: i32, medication_id: i32) -> Result<bool, StorageError>;
}
