//! Data models for the Orchard Yield Simulation Service

pub mod simulation;
pub mod weather;

pub use simulation::*;
pub use weather::*;
