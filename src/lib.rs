pub mod error;
pub mod heredity;
pub mod individual;
pub mod lineage;
pub mod rng;
pub mod simulation;

// Re-export commonly used types for convenience
pub use error::{Result, ResultExt, SimulationError};
pub use heredity::{BetaSampler, Heredity, ParentalAverage, Patrilineal, Reproduction};
pub use individual::{Individual, Sex};
pub use lineage::LineageReporter;
pub use rng::RandomNumberGenerator;
pub use simulation::{GenerationEngine, Population, Simulation, SimulationOptions};
