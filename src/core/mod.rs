//! Core building blocks: staging parameters and the token metadata model.
//! These are consumed by the high-level `api` workflows.
pub mod metadata;
pub mod params;
