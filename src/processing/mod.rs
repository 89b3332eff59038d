// src/processing/mod.rs
pub mod ndvi;

// Re-export the engine entry points
pub use ndvi::{compute_ndvi, validity_mask, NdviError};
