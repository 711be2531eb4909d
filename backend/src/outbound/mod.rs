//! Outbound adapters implementing domain ports against infrastructure.

pub mod memory;
pub mod persistence;
