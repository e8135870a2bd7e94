//! Common types and traits for all records

pub mod identified;

// Re-exports
pub use identified::Identified;
