//! Domain ports decoupling use-cases from infrastructure.

mod macros;
mod storage;

pub(crate) use macros::define_port_error;
pub use storage::{Storage, StorageError};
