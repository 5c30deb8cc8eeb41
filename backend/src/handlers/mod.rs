//! HTTP handlers for the Orchard Yield Simulation Service

pub mod health;
pub mod planting;
pub mod simulation;

pub use health::*;
pub use planting::*;
pub use simulation::*;
