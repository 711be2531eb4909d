//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly. They are used by Diesel for compile-time query validation and
//! type-safe SQL generation; regenerate with `diesel print-schema` when the
//! migrations change.

diesel::table! {
    /// User accounts table.
    ///
    /// `email` carries a unique constraint; uniqueness is nonetheless
    /// checked by the signup handler before insertion.
    users (id) {
        /// Primary key, serial.
        id -> Int4,
        /// Login email, unique.
        email -> Text,
        /// Display name.
        name -> Text,
        /// Optional professional licence number.
        license_number -> Nullable<Text>,
        /// Role, defaults to 'user'.
        role -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Medication reference records.
    medications (id) {
        /// Primary key, serial.
        id -> Int4,
        /// Drug name.
        name -> Text,
        /// Pharmacological classification.
        classification -> Text,
        /// Alert level stored as text (HIGH_ALERT, ELDER_ALERT, STANDARD).
        alert_level -> Text,
        /// Optional category stored as text.
        category -> Nullable<Text>,
        /// Indications text.
        indications -> Text,
        /// Contraindications text.
        contraindications -> Text,
        /// Adult dosing guidance.
        adult_dosage -> Text,
        /// Paediatric dosing guidance.
        pediatric_dosage -> Nullable<Text>,
        /// Administration routes.
        route_of_administration -> Nullable<Text>,
        /// Onset and duration notes.
        onset_duration -> Nullable<Text>,
        /// Handling cautions.
        special_considerations -> Nullable<Text>,
        /// Known side effects.
        side_effects -> Nullable<Text>,
        /// Creating user, nullable FK to users (ON DELETE SET NULL).
        created_by -> Nullable<Int4>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Timestamp of the most recent mutation.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// User-to-medication bookmarks.
    ///
    /// `(user_id, medication_id)` carries a unique constraint; both FKs
    /// cascade on delete so favourites never outlive either side.
    user_favorites (id) {
        /// Primary key, serial.
        id -> Int4,
        /// Owning user, FK to users (ON DELETE CASCADE).
        user_id -> Int4,
        /// Bookmarked medication, FK to medications (ON DELETE CASCADE).
        medication_id -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(user_favorites -> medications (medication_id));
diesel::joinable!(user_favorites -> users (user_id));

diesel::allow_tables_to_appear_in_same_query!(users, medications, user_favorites);
