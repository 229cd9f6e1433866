//! # Reproduction
//!
//! Produces one child from a mother and a father:
//!
//! 1. A uniform draw below the father's sperm ratio makes the child male,
//!    otherwise female. The mother's ratio plays no part in the child's sex.
//! 2. The child's own ratio is drawn by the [`BetaSampler`] around the mean chosen
//!    by the [`Heredity`] rule.
//!
//! When the draw fails, the error is wrapped together with the family trees of
//! both parents so the ancestry that led to the degenerate ratio is visible.
use crate::{
    error::{Result, SimulationError},
    individual::{Individual, Sex},
    lineage::LineageReporter,
    rng::RandomNumberGenerator,
};

use super::{BetaSampler, Heredity, ParentalAverage};

/// The reproduction rule: sex by the father's ratio, ratio by noisy heredity.
#[derive(Debug, Clone)]
pub struct Reproduction<H: Heredity = ParentalAverage> {
    sampler: BetaSampler,
    heredity: H,
    track_lineage: bool,
    reporter: LineageReporter,
}

impl Reproduction<ParentalAverage> {
    /// Creates a rule that averages the parents' ratios.
    pub fn new(sampler: BetaSampler) -> Self {
        Self::with_heredity(sampler, ParentalAverage)
    }
}

impl<H: Heredity> Reproduction<H> {
    /// Creates a rule with a custom heredity model.
    pub fn with_heredity(sampler: BetaSampler, heredity: H) -> Self {
        Self {
            sampler,
            heredity,
            track_lineage: true,
            reporter: LineageReporter::new(),
        }
    }

    /// Whether children keep links to their parents. Defaults to `true`.
    pub fn track_lineage(mut self, track: bool) -> Self {
        self.track_lineage = track;
        self
    }

    /// Reporter used to render ancestry when a draw fails.
    pub fn lineage_reporter(mut self, reporter: LineageReporter) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn sampler(&self) -> &BetaSampler {
        &self.sampler
    }

    pub fn heredity(&self) -> &H {
        &self.heredity
    }

    /// Produces a child of `mother` and `father`.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::Reproduction` wrapping the sampler's
    /// `InvalidParameter` when the inherited mean is 0 or 1.
    pub fn reproduce(
        &self,
        mother: &Individual,
        father: &Individual,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        let sex = if rng.uniform() < father.sperm_ratio() {
            Sex::Male
        } else {
            Sex::Female
        };

        let mean = self.heredity.inherited_mean(mother, father);
        let sperm_ratio = match self.sampler.sample(mean, rng) {
            Ok(ratio) => ratio,
            Err(source) => {
                return Err(SimulationError::Reproduction {
                    ancestry: self.ancestry(mother, father),
                    source: Box::new(source),
                })
            }
        };

        if self.track_lineage {
            Ok(Individual::offspring(
                sex,
                sperm_ratio,
                mother.clone(),
                father.clone(),
            ))
        } else {
            Ok(Individual::founder(sex, sperm_ratio))
        }
    }

    fn ancestry(&self, mother: &Individual, father: &Individual) -> String {
        let mut lines = self.reporter.report(mother);
        lines.extend(self.reporter.report(father));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heredity::Patrilineal;

    fn rule() -> Reproduction {
        Reproduction::new(BetaSampler::new(20.0).unwrap())
    }

    #[test]
    fn test_male_fraction_follows_father() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mother = Individual::founder(Sex::Female, 0.3);
        let father = Individual::founder(Sex::Male, 0.7);
        let rule = rule();

        let trials = 10_000;
        let males = (0..trials)
            .filter(|_| rule.reproduce(&mother, &father, &mut rng).unwrap().is_male())
            .count();
        let fraction = males as f64 / trials as f64;

        assert!((fraction - 0.7).abs() < 0.02, "male fraction {}", fraction);
    }

    #[test]
    fn test_child_keeps_parents() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mother = Individual::founder(Sex::Female, 0.3);
        let father = Individual::founder(Sex::Male, 0.7);

        let child = rule().reproduce(&mother, &father, &mut rng).unwrap();

        assert_eq!(child.mother().unwrap().sperm_ratio(), 0.3);
        assert_eq!(child.father().unwrap().sperm_ratio(), 0.7);
        assert!(child.sperm_ratio() > 0.0 && child.sperm_ratio() < 1.0);
    }

    #[test]
    fn test_untracked_child_has_no_parents() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mother = Individual::founder(Sex::Female, 0.3);
        let father = Individual::founder(Sex::Male, 0.7);

        let child = rule()
            .track_lineage(false)
            .reproduce(&mother, &father, &mut rng)
            .unwrap();

        assert!(child.is_founder());
    }

    #[test]
    fn test_degenerate_parents_report_ancestry() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mother = Individual::founder(Sex::Female, 1.0);
        let father = Individual::founder(Sex::Male, 1.0);

        match rule().reproduce(&mother, &father, &mut rng) {
            Err(SimulationError::Reproduction { ancestry, source }) => {
                assert_eq!(
                    ancestry,
                    "female (sperm ratio 1.000000)\nmale (sperm ratio 1.000000)"
                );
                assert!(matches!(
                    *source,
                    SimulationError::InvalidParameter { mean } if mean == 1.0
                ));
            }
            other => panic!("Expected Reproduction error, got {:?}", other),
        }
    }

    #[test]
    fn test_patrilineal_fails_on_father_alone() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mother = Individual::founder(Sex::Female, 0.5);
        let father = Individual::founder(Sex::Male, 0.0);
        let rule = Reproduction::with_heredity(BetaSampler::new(20.0).unwrap(), Patrilineal);

        let err = rule.reproduce(&mother, &father, &mut rng).unwrap_err();
        assert!(matches!(
            err.root_cause(),
            SimulationError::InvalidParameter { mean } if *mean == 0.0
        ));
    }
}
