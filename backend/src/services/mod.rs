//! Business logic services for the Orchard Yield Simulation Service

pub mod planting;
pub mod simulation;

pub use planting::PlantingService;
pub use simulation::SimulationService;
