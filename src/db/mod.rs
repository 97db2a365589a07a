//! Work log storage: the `ShiftRepository` abstraction and its backends.

pub mod csv_store;
pub mod initialize;
pub mod log;
pub mod memory;
pub mod queries;
pub mod repository;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;
pub use repository::{ClearOutcome, ShiftRepository};
