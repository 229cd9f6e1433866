//! # Error Types
//!
//! This module defines the error type for the sex-ratio simulation. Every failure
//! the model can hit is fatal to a run; the variants differ only in the
//! diagnostics they carry.
//!
//! ## Examples
//!
//! Matching on a sampler failure:
//!
//! ```rust
//! use sexratio::error::SimulationError;
//! use sexratio::heredity::BetaSampler;
//! use sexratio::rng::RandomNumberGenerator;
//!
//! let sampler = BetaSampler::new(20.0).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(7);
//!
//! match sampler.sample(1.0, &mut rng) {
//!     Err(SimulationError::InvalidParameter { mean }) => assert_eq!(mean, 1.0),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use sexratio::error::{Result, ResultExt};
//! use std::fs::File;
//!
//! fn open_output(path: &str) -> Result<File> {
//!     File::create(path).context("Failed to create output file")
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while simulating a population.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// The bounded sampler was asked for a distribution whose mean lies outside
    /// the open interval (0, 1). One of the beta shape parameters is then zero
    /// or negative, which is not a valid distribution.
    #[error("Invalid beta distribution parameter: mean = {mean}")]
    InvalidParameter {
        /// The offending mean.
        mean: f64,
    },

    /// One side of the population went extinct, so no pairing is possible.
    #[error("Degenerate population: {males} males, {females} females")]
    DegeneratePopulation { males: usize, females: usize },

    /// Producing a child failed. `ancestry` holds the rendered family trees of
    /// the mother and the father, in that order.
    #[error("Reproduction failed: {source}\n{ancestry}")]
    Reproduction {
        ancestry: String,
        #[source]
        source: Box<SimulationError>,
    },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

impl SimulationError {
    /// Returns the innermost error, looking through `Reproduction` wrappers.
    pub fn root_cause(&self) -> &SimulationError {
        match self {
            SimulationError::Reproduction { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A specialized Result type for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use sexratio::error::ResultExt;
/// use std::fs::File;
///
/// fn read_file(path: &str) -> sexratio::error::Result<()> {
///     File::open(path).context("Failed to open file")?;
///     Ok(())
/// }
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `SimulationError` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| SimulationError::Other(format!("{}: {}", context, e)))
    }
}
