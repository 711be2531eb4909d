//! PostgreSQL-backed [`Storage`] implementation using Diesel ORM.
//!
//! A thin adapter: it translates between Diesel row structs and domain
//! types and maps database errors to [`StorageError`]. No business logic
//! lives here; filter, identity, and uniqueness semantics are expressed
//! directly in SQL.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{Storage, StorageError};
use crate::domain::{
    AlertLevel, Category, Favorite, Medication, MedicationFilters, MedicationUpdate,
    NewMedication, NewUser, User,
};

use super::models::{
    FavoriteRow, MedicationChangeset, MedicationRow, NewFavoriteRow, NewMedicationRow, NewUserRow,
    UserRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{medications, user_favorites, users};

/// Diesel-backed implementation of the [`Storage`] port.
#[derive(Clone)]
pub struct DieselStorage {
    pool: DbPool,
}

impl DieselStorage {
    /// Create a new adapter with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to storage errors.
fn map_pool_error(error: PoolError) -> StorageError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            StorageError::connection(message)
        }
    }
}

/// Map Diesel errors to storage errors.
fn map_diesel_error(error: diesel::result::Error) -> StorageError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            StorageError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => StorageError::query("database error"),
        DieselError::QueryBuilderError(_) => StorageError::query("database query error"),
        _ => StorageError::query("database error"),
    }
}

fn row_to_user(row: UserRow) -> User {
    User {
        id: row.id,
        email: row.email,
        name: row.name,
        license_number: row.license_number,
        role: row.role,
        created_at: row.created_at,
    }
}

/// Convert a database row to a domain medication.
///
/// Stored enum text outside the legal sets is coerced rather than failed:
/// reference data must stay readable even if a migration or manual edit
/// introduced an unexpected tag.
fn row_to_medication(row: MedicationRow) -> Medication {
    let alert_level = AlertLevel::parse(&row.alert_level).unwrap_or_else(|| {
        warn!(
            value = row.alert_level,
            medication_id = row.id,
            "unrecognised alert_level value, defaulting to STANDARD"
        );
        AlertLevel::Standard
    });
    let category = row.category.as_deref().and_then(|value| {
        let parsed = Category::parse(value);
        if parsed.is_none() {
            warn!(
                value,
                medication_id = row.id,
                "unrecognised category value, treating as unset"
            );
        }
        parsed
    });

    Medication {
        id: row.id,
        name: row.name,
        classification: row.classification,
        alert_level,
        category,
        indications: row.indications,
        contraindications: row.contraindications,
        adult_dosage: row.adult_dosage,
        pediatric_dosage: row.pediatric_dosage,
        route_of_administration: row.route_of_administration,
        onset_duration: row.onset_duration,
        special_considerations: row.special_considerations,
        side_effects: row.side_effects,
        created_by: row.created_by,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn row_to_favorite(row: FavoriteRow) -> Favorite {
    Favorite {
        id: row.id,
        user_id: row.user_id,
        medication_id: row.medication_id,
        created_at: row.created_at,
    }
}

fn update_to_changeset(update: MedicationUpdate) -> MedicationChangeset {
    MedicationChangeset {
        name: update.name,
        classification: update.classification,
        alert_level: update.alert_level.map(|level| level.as_str().to_owned()),
        category: update
            .category
            .map(|category| category.map(|c| c.as_str().to_owned())),
        indications: update.indications,
        contraindications: update.contraindications,
        adult_dosage: update.adult_dosage,
        pediatric_dosage: update.pediatric_dosage,
        route_of_administration: update.route_of_administration,
        onset_duration: update.onset_duration,
        special_considerations: update.special_considerations,
        side_effects: update.side_effects,
        created_by: update.created_by,
        updated_at: Utc::now(),
    }
}

#[async_trait]
impl Storage for DieselStorage {
    async fn find_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .find(id)
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_user))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_user))
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow {
                email: &user.email,
                name: &user.name,
                license_number: user.license_number.as_deref(),
                role: user.role_or_default(),
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_user(row))
    }

    async fn list_medications(
        &self,
        filters: &MedicationFilters,
    ) -> Result<Vec<Medication>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = medications::table.into_boxed();
        if let Some(search) = &filters.search {
            let pattern = format!("%{search}%");
            query = query.filter(
                medications::name
                    .ilike(pattern.clone())
                    .or(medications::indications.ilike(pattern.clone()))
                    .or(medications::contraindications.ilike(pattern.clone()))
                    .or(medications::classification.ilike(pattern)),
            );
        }
        if let Some(level) = filters.alert_level {
            query = query.filter(medications::alert_level.eq(level.as_str()));
        }
        if let Some(category) = filters.category {
            query = query.filter(medications::category.eq(category.as_str()));
        }

        let rows: Vec<MedicationRow> = query
            .order(medications::name.asc())
            .offset(filters.offset.max(0))
            .limit(filters.limit.max(0))
            .select(MedicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_medication).collect())
    }

    async fn find_medication(&self, id: i32) -> Result<Option<Medication>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MedicationRow> = medications::table
            .find(id)
            .select(MedicationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_medication))
    }

    async fn create_medication(
        &self,
        medication: NewMedication,
    ) -> Result<Medication, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: MedicationRow = diesel::insert_into(medications::table)
            .values(NewMedicationRow {
                name: &medication.name,
                classification: &medication.classification,
                alert_level: medication.alert_level.as_str(),
                category: medication.category.map(Category::as_str),
                indications: &medication.indications,
                contraindications: &medication.contraindications,
                adult_dosage: &medication.adult_dosage,
                pediatric_dosage: medication.pediatric_dosage.as_deref(),
                route_of_administration: medication.route_of_administration.as_deref(),
                onset_duration: medication.onset_duration.as_deref(),
                special_considerations: medication.special_considerations.as_deref(),
                side_effects: medication.side_effects.as_deref(),
                created_by: medication.created_by,
            })
            .returning(MedicationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_medication(row))
    }

    async fn update_medication(
        &self,
        id: i32,
        update: MedicationUpdate,
    ) -> Result<Option<Medication>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MedicationRow> = diesel::update(medications::table.find(id))
            .set(update_to_changeset(update))
            .returning(MedicationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_medication))
    }

    async fn delete_medication(&self, id: i32) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Favourites referencing the record go with it via ON DELETE CASCADE.
        let deleted = diesel::delete(medications::table.find(id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn list_favorites(&self, user_id: i32) -> Result<Vec<Medication>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MedicationRow> = user_favorites::table
            .inner_join(medications::table)
            .filter(user_favorites::user_id.eq(user_id))
            .select(MedicationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_medication).collect())
    }

    async fn add_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<Favorite, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Upsert on the pair so a second add replaces rather than duplicates.
        let row: FavoriteRow = diesel::insert_into(user_favorites::table)
            .values(NewFavoriteRow {
                user_id,
                medication_id,
            })
            .on_conflict((user_favorites::user_id, user_favorites::medication_id))
            .do_update()
            .set(user_favorites::created_at.eq(Utc::now()))
            .returning(FavoriteRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row_to_favorite(row))
    }

    async fn remove_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(
            user_favorites::table
                .filter(user_favorites::user_id.eq(user_id))
                .filter(user_favorites::medication_id.eq(medication_id)),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }

    async fn is_favorite(&self, user_id: i32, medication_id: i32) -> Result<bool, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let found: bool = diesel::select(diesel::dsl::exists(
            user_favorites::table
                .filter(user_favorites::user_id.eq(user_id))
                .filter(user_favorites::medication_id.eq(medication_id)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(found)
    }
}
