//! Writers for staged output files.
pub mod metadata;
