//! Shared types and domain logic for the Orchard Yield Simulation Service
//!
//! This crate contains the weather data models, the yield simulation model,
//! and the season-qualification logic shared between the backend and its
//! tests. Everything here is pure computation with no I/O.

pub mod models;
pub mod planting;
pub mod validation;
pub mod yield_model;

pub use models::*;
pub use planting::*;
pub use validation::*;
pub use yield_model::*;
