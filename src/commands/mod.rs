//! Data Loading
//!
//! Fetches for the static resources the app reads, organized by domain.

mod locations;

// Re-export all public items
pub use locations::*;
