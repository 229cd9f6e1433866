pub mod engine;
pub mod launcher;
pub mod options;
pub mod population;
pub mod report;

pub use engine::GenerationEngine;
pub use launcher::{Simulation, SimulationOutcome};
pub use options::{LogLevel, SimulationOptions, SimulationOptionsBuilder};
pub use population::Population;
pub use report::{
    write_sperm_ratios, write_sperm_ratios_to_file, ConsoleReporter, GenerationReport, NullSink,
    ReportSink,
};
