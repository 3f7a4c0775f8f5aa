// src/storage/mod.rs

pub mod error;
pub mod record;

pub use error::PersistenceError;
pub use record::{load, save};
