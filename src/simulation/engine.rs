//! # GenerationEngine
//!
//! Advances a population by one generation. Every male is paired with every
//! female, and each pair reproduces with probability
//!
//! ```text
//! P = (|males| + |females|) / (|males| * |females|)
//! ```
//!
//! so the expected number of children equals the current population size. The
//! formula is a population-size control, not a biological mating rate.
//!
//! Small crosses are evaluated sequentially on the caller's generator. Crosses of
//! at least `parallel_threshold` pairs are evaluated with Rayon: one base seed is
//! drawn from the caller's generator and each male row gets its own sub-stream
//! derived from it, so the result depends only on the seed and not on thread
//! scheduling.
use rayon::prelude::*;

use crate::{
    error::{Result, SimulationError},
    heredity::{BetaSampler, Heredity, ParentalAverage, Reproduction},
    individual::Individual,
    rng::RandomNumberGenerator,
};

use super::{options::DEFAULT_PARALLEL_THRESHOLD, population::Population};

#[derive(Debug, Clone)]
pub struct GenerationEngine<H: Heredity = ParentalAverage> {
    reproduction: Reproduction<H>,
    parallel_threshold: usize,
}

impl<H: Heredity> GenerationEngine<H> {
    pub fn new(reproduction: Reproduction<H>) -> Self {
        Self {
            reproduction,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the minimum number of pairs evaluated in parallel.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold.max(1);
        self
    }

    pub fn reproduction(&self) -> &Reproduction<H> {
        &self.reproduction
    }

    /// The probability that a single male×female pair reproduces.
    ///
    /// # Errors
    ///
    /// Returns `DegeneratePopulation` if either cohort is empty.
    pub fn mating_probability(population: &Population) -> Result<f64> {
        let males = population.male_count();
        let females = population.female_count();

        if males == 0 || females == 0 {
            return Err(SimulationError::DegeneratePopulation { males, females });
        }

        Ok((males + females) as f64 / (males as f64 * females as f64))
    }

    /// Produces the next generation from `population`.
    ///
    /// # Errors
    ///
    /// - `DegeneratePopulation` if either cohort of `population` is empty.
    /// - `Reproduction` if a child's sperm ratio cannot be drawn.
    pub fn advance(
        &self,
        population: &Population,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let probability = Self::mating_probability(population)?;
        let pairs = population.male_count() * population.female_count();

        if pairs >= self.parallel_threshold {
            self.advance_parallel(population, probability, rng)
        } else {
            self.advance_sequential(population, probability, rng)
        }
    }

    fn advance_sequential(
        &self,
        population: &Population,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let mut next = Population::default();

        for father in population.males() {
            next.extend(self.row(father, population.females(), probability, rng)?);
        }

        Ok(next)
    }

    fn advance_parallel(
        &self,
        population: &Population,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let base_seed = rng.next_seed();

        let rows: Vec<Vec<Individual>> = population
            .males()
            .par_iter()
            .enumerate()
            .map(|(index, father)| {
                let mut row_rng = RandomNumberGenerator::derive(base_seed, index as u64);
                self.row(father, population.females(), probability, &mut row_rng)
            })
            .collect::<Result<_>>()?;

        let mut next = Population::default();
        next.extend(rows.into_iter().flatten());
        Ok(next)
    }

    /// Pairs one male with every female in turn.
    fn row(
        &self,
        father: &Individual,
        females: &[Individual],
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual>> {
        let mut children = Vec::new();
        for mother in females {
            if rng.uniform() < probability {
                children.push(self.reproduction.reproduce(mother, father, rng)?);
            }
        }
        Ok(children)
    }
}

impl GenerationEngine<ParentalAverage> {
    /// An engine using the parental-average heredity rule.
    pub fn with_concentration(concentration: f64) -> Result<Self> {
        let sampler = BetaSampler::new(concentration)?;
        Ok(Self::new(Reproduction::new(sampler)))
    }
}
