//! # Population
//!
//! One generation, split by sex into a male and a female cohort. A population is
//! never edited in place: each generation step builds a new one.

use tracing::debug;

use crate::{
    error::Result,
    heredity::BetaSampler,
    individual::{Individual, Sex},
    rng::RandomNumberGenerator,
};

use super::options::SimulationOptions;

#[derive(Debug, Clone, Default)]
pub struct Population {
    males: Vec<Individual>,
    females: Vec<Individual>,
}

impl Population {
    /// Builds a population from individuals of either sex, routing each one to
    /// its cohort.
    pub fn from_individuals<I>(individuals: I) -> Self
    where
        I: IntoIterator<Item = Individual>,
    {
        let mut population = Self::default();
        population.extend(individuals);
        population
    }

    /// Draws the founding generation.
    ///
    /// `floor(initial_ratio * initial_population)` founders are male and the rest
    /// female. Every founder's sperm ratio is drawn around `initial_ratio`.
    ///
    /// # Errors
    ///
    /// Fails when the sampler rejects `initial_ratio`.
    pub fn seed(options: &SimulationOptions, rng: &mut RandomNumberGenerator) -> Result<Self> {
        let sampler = BetaSampler::new(options.get_concentration())?;
        let total = options.get_initial_population();
        let ratio = options.get_initial_ratio();
        let num_males = ((ratio * total as f64) as usize).min(total);

        let mut population = Self::default();
        population.males.reserve(num_males);
        population.females.reserve(total - num_males);

        for _ in 0..num_males {
            let sperm_ratio = sampler.sample(ratio, rng)?;
            population.males.push(Individual::founder(Sex::Male, sperm_ratio));
        }
        for _ in num_males..total {
            let sperm_ratio = sampler.sample(ratio, rng)?;
            population
                .females
                .push(Individual::founder(Sex::Female, sperm_ratio));
        }

        debug!(
            males = population.male_count(),
            females = population.female_count(),
            "Seeded founding population"
        );

        Ok(population)
    }

    pub fn push(&mut self, individual: Individual) {
        match individual.sex() {
            Sex::Male => self.males.push(individual),
            Sex::Female => self.females.push(individual),
        }
    }

    pub fn males(&self) -> &[Individual] {
        &self.males
    }

    pub fn females(&self) -> &[Individual] {
        &self.females
    }

    pub fn male_count(&self) -> usize {
        self.males.len()
    }

    pub fn female_count(&self) -> usize {
        self.females.len()
    }

    pub fn len(&self) -> usize {
        self.males.len() + self.females.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fraction of the population that is male, or `NaN` for an empty population.
    pub fn sex_ratio(&self) -> f64 {
        self.male_count() as f64 / self.len() as f64
    }

    /// Sperm ratios of every individual, males first.
    pub fn sperm_ratios(&self) -> impl Iterator<Item = f64> + '_ {
        self.males
            .iter()
            .chain(self.females.iter())
            .map(Individual::sperm_ratio)
    }

    /// Mean sperm ratio, or `None` for an empty population.
    pub fn mean_sperm_ratio(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.sperm_ratios().sum::<f64>() / self.len() as f64)
    }

    /// Standard deviation of the sperm ratios, or `None` for an empty population.
    pub fn sperm_ratio_std_dev(&self) -> Option<f64> {
        let mean = self.mean_sperm_ratio()?;
        let variance = self
            .sperm_ratios()
            .map(|r| (r - mean).powi(2))
            .sum::<f64>()
            / self.len() as f64;
        Some(variance.sqrt())
    }
}

impl Extend<Individual> for Population {
    fn extend<I: IntoIterator<Item = Individual>>(&mut self, iter: I) {
        for individual in iter {
            self.push(individual);
        }
    }
}
