//! Domain types and ports for the medication reference service.

mod error;
mod favorite;
mod medication;
pub mod ports;
mod user;

pub use error::{Error, ErrorCode, ErrorValidationError};
pub use favorite::{Favorite, FavoriteKey};
pub use medication::{
    AlertLevel, Category, Medication, MedicationFilters, MedicationUpdate, NewMedication,
    DEFAULT_LIMIT,
};
pub use user::{NewUser, User, DEFAULT_ROLE};
