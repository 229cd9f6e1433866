//! # BetaSampler
//!
//! Draws bounded random values from a beta distribution reparameterized by its
//! mean and a concentration constant `v`:
//!
//! - `alpha = mean * v`
//! - `beta = (1 - mean) * v`
//!
//! A larger `v` clusters draws tightly around the mean; a smaller `v` spreads them
//! towards 0 and 1.
use rand_distr::{Beta, Distribution};

use crate::{
    error::{Result, SimulationError},
    rng::RandomNumberGenerator,
};

/// Samples values in (0, 1) around a requested mean.
///
/// # Examples
///
/// ```
/// use sexratio::heredity::BetaSampler;
/// use sexratio::rng::RandomNumberGenerator;
///
/// let sampler = BetaSampler::new(20.0).unwrap();
/// let mut rng = RandomNumberGenerator::from_seed(1);
///
/// let value = sampler.sample(0.5, &mut rng).unwrap();
/// assert!(value > 0.0 && value < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaSampler {
    concentration: f64,
}

impl BetaSampler {
    /// Creates a sampler with concentration `v`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error unless `concentration` is finite and
    /// strictly positive.
    pub fn new(concentration: f64) -> Result<Self> {
        if !concentration.is_finite() || concentration <= 0.0 {
            return Err(SimulationError::Configuration(format!(
                "Concentration must be a positive finite number, got {}",
                concentration
            )));
        }
        Ok(Self { concentration })
    }

    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Shape parameters `(alpha, beta)` for a distribution centred on `mean`.
    pub fn shape(&self, mean: f64) -> (f64, f64) {
        (mean * self.concentration, (1.0 - mean) * self.concentration)
    }

    /// Draws one value from the beta distribution centred on `mean`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` carrying `mean` when it is not strictly inside
    /// (0, 1). The value is never clamped into range.
    pub fn sample(&self, mean: f64, rng: &mut RandomNumberGenerator) -> Result<f64> {
        if !(mean > 0.0 && mean < 1.0) {
            return Err(SimulationError::InvalidParameter { mean });
        }

        let (alpha, beta) = self.shape(mean);
        let distribution =
            Beta::new(alpha, beta).map_err(|_| SimulationError::InvalidParameter { mean })?;

        Ok(distribution.sample(&mut rng.rng))
    }
}
