// mod.rs - Data structures module

pub mod enzyme;
pub mod polymer;

// Re-export main types for convenience
pub use enzyme::{DatabaseRef, DatabaseType, EnzymeEntry, ResolvedEntry};
pub use polymer::PolymerLink;
