//! In-memory record store backend.
//!
//! Selected permanently at startup when no durable backend is reachable.
//! Ids are assigned from per-entity counters starting at 1; favourites are
//! keyed by the `(user_id, medication_id)` pair so re-adding a pair
//! replaces the existing row. Coarse mutual exclusion via a single mutex is
//! sufficient for the workload; no method holds the lock across an await.

mod seed;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{Storage, StorageError};
use crate::domain::{
    Favorite, Medication, MedicationFilters, MedicationUpdate, NewMedication, NewUser, User,
};

struct MemoryState {
    users: HashMap<i32, User>,
    medications: HashMap<i32, Medication>,
    favorites: HashMap<(i32, i32), Favorite>,
    next_user_id: i32,
    next_medication_id: i32,
    next_favorite_id: i32,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            medications: HashMap::new(),
            favorites: HashMap::new(),
            next_user_id: 1,
            next_medication_id: 1,
            next_favorite_id: 1,
        }
    }
}

impl MemoryState {
    fn insert_medication(&mut self, medication: NewMedication) -> Medication {
        let now = Utc::now();
        let record = Medication {
            id: self.next_medication_id,
            name: medication.name,
            classification: medication.classification,
            alert_level: medication.alert_level,
            category: medication.category,
            indications: medication.indications,
            contraindications: medication.contraindications,
            adult_dosage: medication.adult_dosage,
            pediatric_dosage: medication.pediatric_dosage,
            route_of_administration: medication.route_of_administration,
            onset_duration: medication.onset_duration,
            special_considerations: medication.special_considerations,
            side_effects: medication.side_effects,
            created_by: medication.created_by,
            created_at: now,
            updated_at: now,
        };
        self.next_medication_id += 1;
        self.medications.insert(record.id, record.clone());
        record
    }
}

/// Map-backed [`Storage`] implementation.
pub struct MemoryStorage {
    state: Mutex<MemoryState>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// Create a store pre-loaded with the demonstration medications.
    pub fn seeded() -> Self {
        let storage = Self::new();
        if let Ok(mut state) = storage.state.lock() {
            for medication in seed::sample_medications() {
                state.insert_medication(medication);
            }
        }
        storage
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|_| StorageError::query("state mutex poisoned"))
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge a partial update onto an existing record in place.
///
/// Fields absent from the update keep their stored value; nullable fields
/// provided as explicit null are cleared.
fn apply_update(existing: &mut Medication, update: MedicationUpdate) {
    if let Some(name) = update.name {
        existing.name = name;
    }
    if let Some(classification) = update.classification {
        existing.classification = classification;
    }
    if let Some(alert_level) = update.alert_level {
        existing.alert_level = alert_level;
    }
    if let Some(category) = update.category {
        existing.category = category;
    }
    if let Some(indications) = update.indications {
        existing.indications = indications;
    }
    if let Some(contraindications) = update.contraindications {
        existing.contraindications = contraindications;
    }
    if let Some(adult_dosage) = update.adult_dosage {
        existing.adult_dosage = adult_dosage;
    }
    if let Some(pediatric_dosage) = update.pediatric_dosage {
        existing.pediatric_dosage = pediatric_dosage;
    }
    if let Some(route) = update.route_of_administration {
        existing.route_of_administration = route;
    }
    if let Some(onset_duration) = update.onset_duration {
        existing.onset_duration = onset_duration;
    }
    if let Some(considerations) = update.special_considerations {
        existing.special_considerations = considerations;
    }
    if let Some(side_effects) = update.side_effects {
        existing.side_effects = side_effects;
    }
    if let Some(created_by) = update.created_by {
        existing.created_by = created_by;
    }
    existing.updated_at = Utc::now();
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn find_user(&self, id: i32) -> Result<Option<User>, StorageError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .lock()?
            .users
            .values()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut state = self.lock()?;
        let record = User {
            id: state.next_user_id,
            role: user.role_or_default().to_owned(),
            email: user.email,
            name: user.name,
            license_number: user.license_number,
            created_at: Utc::now(),
        };
        state.next_user_id += 1;
        state.users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_medications(
        &self,
        filters: &MedicationFilters,
    ) -> Result<Vec<Medication>, StorageError> {
        let state = self.lock()?;
        let mut results: Vec<Medication> = state
            .medications
            .values()
            .filter(|medication| filters.matches(medication))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        let offset = usize::try_from(filters.offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(filters.limit.max(0)).unwrap_or(usize::MAX);
        Ok(results.into_iter().skip(offset).take(limit).collect())
    }

    async fn find_medication(&self, id: i32) -> Result<Option<Medication>, StorageError> {
        Ok(self.lock()?.medications.get(&id).cloned())
    }

    async fn create_medication(
        &self,
        medication: NewMedication,
    ) -> Result<Medication, StorageError> {
        Ok(self.lock()?.insert_medication(medication))
    }

    async fn update_medication(
        &self,
        id: i32,
        update: MedicationUpdate,
    ) -> Result<Option<Medication>, StorageError> {
        let mut state = self.lock()?;
        let Some(existing) = state.medications.get_mut(&id) else {
            return Ok(None);
        };
        apply_update(existing, update);
        Ok(Some(existing.clone()))
    }

    async fn delete_medication(&self, id: i32) -> Result<bool, StorageError> {
        let mut state = self.lock()?;
        let removed = state.medications.remove(&id).is_some();
        if removed {
            // Referential cleanup: favourites must not outlive the record.
            state.favorites.retain(|&(_, medication_id), _| medication_id != id);
        }
        Ok(removed)
    }

    async fn list_favorites(&self, user_id: i32) -> Result<Vec<Medication>, StorageError> {
        let state = self.lock()?;
        Ok(state
            .favorites
            .values()
            .filter(|favorite| favorite.user_id == user_id)
            .filter_map(|favorite| state.medications.get(&favorite.medication_id))
            .cloned()
            .collect())
    }

    async fn add_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<Favorite, StorageError> {
        let mut state = self.lock()?;
        let favorite = Favorite {
            id: state.next_favorite_id,
            user_id,
            medication_id,
            created_at: Utc::now(),
        };
        state.next_favorite_id += 1;
        // Pair-keyed insert replaces any existing favourite for the pair.
        state.favorites.insert((user_id, medication_id), favorite.clone());
        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        user_id: i32,
        medication_id: i32,
    ) -> Result<bool, StorageError> {
        Ok(self
            .lock()?
            .favorites
            .remove(&(user_id, medication_id))
            .is_some())
    }

    async fn is_favorite(&self, user_id: i32, medication_id: i32) -> Result<bool, StorageError> {
        Ok(self
            .lock()?
            .favorites
            .contains_key(&(user_id, medication_id)))
    }
}
