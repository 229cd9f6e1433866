//! # SimulationOptions
//!
//! The `SimulationOptions` struct holds the configuration of one simulation run:
//! the founding population, the number of generations, the heredity noise and a
//! few knobs controlling diagnostics and parallelism.
//!
//! ## Example
//!
//! ```rust
//! use sexratio::simulation::options::{LogLevel, SimulationOptions};
//!
//! // Defaults: 500 founders, 80% male, 50 generations, v = 20
//! let default_options = SimulationOptions::default();
//! assert_eq!(default_options.get_initial_population(), 500);
//!
//! let custom_options = SimulationOptions::builder()
//!     .initial_population(20)
//!     .initial_ratio(0.5)
//!     .num_generations(5)
//!     .concentration(20.0)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom_options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `initial_population`: number of founders.
//! - `initial_ratio`: fraction of founders that are male, and the mean of the
//!   founders' sperm ratio draws.
//! - `num_generations`: number of generation steps to simulate.
//! - `concentration`: the beta concentration constant `v`.
//! - `log_level`: how much per-generation tracing output is emitted.
//! - `parallel_threshold`: minimum number of male×female pairs before a
//!   generation is evaluated in parallel.
//! - `track_lineage`: whether children keep links to their parents.
//! - `lineage_depth`: optional cap on the depth of ancestry traces.

use crate::error::{Result, SimulationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationOptions {
    initial_population: usize,
    initial_ratio: f64,
    num_generations: usize,
    concentration: f64,
    log_level: LogLevel,
    /// Minimum number of pairs to evaluate in parallel
    parallel_threshold: usize,
    track_lineage: bool,
    lineage_depth: Option<usize>,
}

pub const DEFAULT_INITIAL_POPULATION: usize = 500;
pub const DEFAULT_INITIAL_RATIO: f64 = 0.8;
pub const DEFAULT_NUM_GENERATIONS: usize = 50;
pub const DEFAULT_CONCENTRATION: f64 = 20.0;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 250_000;

impl SimulationOptions {
    pub fn new(
        initial_population: usize,
        initial_ratio: f64,
        num_generations: usize,
        concentration: f64,
    ) -> Self {
        Self {
            initial_population,
            initial_ratio,
            num_generations,
            concentration,
            ..Self::default()
        }
    }

    /// Checks that the options describe a runnable simulation.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Configuration` when:
    /// - the initial population is zero
    /// - the initial ratio is not strictly between 0 and 1
    /// - the concentration is not a positive finite number
    /// - the parallel threshold is zero
    pub fn validate(&self) -> Result<()> {
        if self.initial_population == 0 {
            return Err(SimulationError::Configuration(
                "Initial population cannot be zero".to_string(),
            ));
        }

        if !(self.initial_ratio > 0.0 && self.initial_ratio < 1.0) {
            return Err(SimulationError::Configuration(format!(
                "Initial ratio must be strictly between 0 and 1, got {}",
                self.initial_ratio
            )));
        }

        if !self.concentration.is_finite() || self.concentration <= 0.0 {
            return Err(SimulationError::Configuration(format!(
                "Concentration must be a positive finite number, got {}",
                self.concentration
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(SimulationError::Configuration(
                "Parallel threshold cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_initial_population(&self) -> usize {
        self.initial_population
    }

    pub fn get_initial_ratio(&self) -> f64 {
        self.initial_ratio
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_concentration(&self) -> f64 {
        self.concentration
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns the minimum number of pairs to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_track_lineage(&self) -> bool {
        self.track_lineage
    }

    pub fn get_lineage_depth(&self) -> Option<usize> {
        self.lineage_depth
    }

    pub fn set_initial_population(&mut self, initial_population: usize) {
        self.initial_population = initial_population;
    }

    pub fn set_initial_ratio(&mut self, initial_ratio: f64) {
        self.initial_ratio = initial_ratio;
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_concentration(&mut self, concentration: f64) {
        self.concentration = concentration;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    pub fn set_track_lineage(&mut self, track_lineage: bool) {
        self.track_lineage = track_lineage;
    }

    pub fn set_lineage_depth(&mut self, lineage_depth: Option<usize>) {
        self.lineage_depth = lineage_depth;
    }

    /// Returns a builder for creating a `SimulationOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sexratio::simulation::options::SimulationOptions;
    ///
    /// let options = SimulationOptions::builder()
    ///     .initial_population(100)
    ///     .num_generations(10)
    ///     .track_lineage(false)
    ///     .build();
    /// assert!(!options.get_track_lineage());
    /// ```
    pub fn builder() -> SimulationOptionsBuilder {
        SimulationOptionsBuilder::default()
    }
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            initial_population: DEFAULT_INITIAL_POPULATION,
            initial_ratio: DEFAULT_INITIAL_RATIO,
            num_generations: DEFAULT_NUM_GENERATIONS,
            concentration: DEFAULT_CONCENTRATION,
            log_level: LogLevel::None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            track_lineage: true,
            lineage_depth: None,
        }
    }
}

/// Builder for `SimulationOptions`.
#[derive(Debug, Clone, Default)]
pub struct SimulationOptionsBuilder {
    initial_population: Option<usize>,
    initial_ratio: Option<f64>,
    num_generations: Option<usize>,
    concentration: Option<f64>,
    log_level: Option<LogLevel>,
    parallel_threshold: Option<usize>,
    track_lineage: Option<bool>,
    lineage_depth: Option<usize>,
}

impl SimulationOptionsBuilder {
    pub fn initial_population(mut self, value: usize) -> Self {
        self.initial_population = Some(value);
        self
    }

    pub fn initial_ratio(mut self, value: f64) -> Self {
        self.initial_ratio = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn concentration(mut self, value: f64) -> Self {
        self.concentration = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    pub fn track_lineage(mut self, value: bool) -> Self {
        self.track_lineage = Some(value);
        self
    }

    pub fn lineage_depth(mut self, value: usize) -> Self {
        self.lineage_depth = Some(value);
        self
    }

    /// Builds the `SimulationOptions` instance, filling unset fields with defaults.
    pub fn build(self) -> SimulationOptions {
        SimulationOptions {
            initial_population: self
                .initial_population
                .unwrap_or(DEFAULT_INITIAL_POPULATION),
            initial_ratio: self.initial_ratio.unwrap_or(DEFAULT_INITIAL_RATIO),
            num_generations: self.num_generations.unwrap_or(DEFAULT_NUM_GENERATIONS),
            concentration: self.concentration.unwrap_or(DEFAULT_CONCENTRATION),
            log_level: self.log_level.unwrap_or(LogLevel::None),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
            track_lineage: self.track_lineage.unwrap_or(true),
            lineage_depth: self.lineage_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SimulationOptions::default();
        assert_eq!(options.get_initial_population(), 500);
        assert_eq!(options.get_initial_ratio(), 0.8);
        assert_eq!(options.get_num_generations(), 50);
        assert_eq!(options.get_concentration(), 20.0);
        assert_eq!(options.get_log_level(), &LogLevel::None);
        assert!(options.get_track_lineage());
        assert_eq!(options.get_lineage_depth(), None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(SimulationOptions::builder().build(), SimulationOptions::default());
    }

    #[test]
    fn test_new_keeps_other_defaults() {
        let options = SimulationOptions::new(20, 0.5, 5, 10.0);
        assert_eq!(options.get_initial_population(), 20);
        assert_eq!(options.get_parallel_threshold(), DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_setters() {
        let mut options = SimulationOptions::default();
        options.set_num_generations(3);
        options.set_lineage_depth(Some(4));
        options.set_log_level(LogLevel::Verbose);
        assert_eq!(options.get_num_generations(), 3);
        assert_eq!(options.get_lineage_depth(), Some(4));
        assert_eq!(options.get_log_level(), &LogLevel::Verbose);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cases = vec![
            SimulationOptions::builder().initial_population(0).build(),
            SimulationOptions::builder().initial_ratio(0.0).build(),
            SimulationOptions::builder().initial_ratio(1.0).build(),
            SimulationOptions::builder().concentration(0.0).build(),
            SimulationOptions::builder().concentration(f64::INFINITY).build(),
            SimulationOptions::builder().parallel_threshold(0).build(),
        ];

        for options in cases {
            match options.validate() {
                Err(SimulationError::Configuration(_)) => {}
                other => panic!("Expected Configuration error for {:?}, got {:?}", options, other),
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let options = SimulationOptions::builder()
            .initial_population(42)
            .lineage_depth(3)
            .build();
        let json = serde_json::to_string(&options).unwrap();
        let back: SimulationOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }
}
