//! # Heredity
//!
//! The `Heredity` trait decides which mean a child's sperm ratio is drawn around,
//! given its two parents. The draw itself is made by the [`BetaSampler`] inside
//! the [`Reproduction`] rule.
//!
//! Two rules are provided:
//!
//! - [`ParentalAverage`]: the mean of both parents' ratios. This is the default.
//! - [`Patrilineal`]: the father's ratio alone. Populations under this rule drift
//!   towards 0 or 1 much faster and hit the sampler's boundary failure sooner.
//!
//! Neither rule clamps the mean; a parent whose ratio reached exactly 0 or 1
//! makes the draw fail.
pub mod reproduction;
pub mod sampler;

use std::fmt::Debug;

use crate::individual::Individual;

/// Chooses the mean around which a child's sperm ratio is drawn.
pub trait Heredity
where
    Self: Debug + Clone + Send + Sync,
{
    /// The target mean for a child of `mother` and `father`.
    fn inherited_mean(&self, mother: &Individual, father: &Individual) -> f64;
}

/// Child's ratio is centred on the average of both parents' ratios.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentalAverage;

impl Heredity for ParentalAverage {
    fn inherited_mean(&self, mother: &Individual, father: &Individual) -> f64 {
        (mother.sperm_ratio() + father.sperm_ratio()) / 2.0
    }
}

/// Child's ratio is centred on the father's ratio; the mother contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Patrilineal;

impl Heredity for Patrilineal {
    fn inherited_mean(&self, _mother: &Individual, father: &Individual) -> f64 {
        father.sperm_ratio()
    }
}

pub use reproduction::Reproduction;
pub use sampler::BetaSampler;
