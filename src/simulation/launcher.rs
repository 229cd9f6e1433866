use tracing::{error, info};

use super::{
    engine::GenerationEngine,
    options::{LogLevel, SimulationOptions},
    population::Population,
    report::{GenerationReport, ReportSink},
};
use crate::{
    error::Result,
    heredity::{BetaSampler, Heredity, ParentalAverage, Reproduction},
    lineage::LineageReporter,
    rng::RandomNumberGenerator,
};

/// Final state of a completed run.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// The last generation.
    pub population: Population,
    /// One report per generation, founders first.
    pub reports: Vec<GenerationReport>,
}

/// Runs the generation loop: seed, then advance `num_generations` times.
#[derive(Debug, Clone)]
pub struct Simulation<H: Heredity = ParentalAverage> {
    options: SimulationOptions,
    engine: GenerationEngine<H>,
}

impl Simulation<ParentalAverage> {
    /// Creates a simulation using the parental-average heredity rule.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `options` fail validation.
    pub fn new(options: SimulationOptions) -> Result<Self> {
        Self::with_heredity(options, ParentalAverage)
    }
}

impl<H: Heredity> Simulation<H> {
    /// Creates a simulation using a custom heredity rule.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `options` fail validation.
    pub fn with_heredity(options: SimulationOptions, heredity: H) -> Result<Self> {
        options.validate()?;

        let reporter = match options.get_lineage_depth() {
            Some(depth) => LineageReporter::with_max_depth(depth),
            None => LineageReporter::new(),
        };
        let reproduction =
            Reproduction::with_heredity(BetaSampler::new(options.get_concentration())?, heredity)
                .track_lineage(options.get_track_lineage())
                .lineage_reporter(reporter);
        let engine = GenerationEngine::new(reproduction)
            .with_parallel_threshold(options.get_parallel_threshold());

        Ok(Self { options, engine })
    }

    pub fn options(&self) -> &SimulationOptions {
        &self.options
    }

    pub fn engine(&self) -> &GenerationEngine<H> {
        &self.engine
    }

    /// Seeds the founders from the options and runs every generation.
    ///
    /// `sink` receives a report for the founders and one after each step.
    ///
    /// # Errors
    ///
    /// Stops at the first `DegeneratePopulation` or `Reproduction` error; no
    /// partial outcome is returned.
    pub fn run<S>(&self, rng: &mut RandomNumberGenerator, sink: &mut S) -> Result<SimulationOutcome>
    where
        S: ReportSink + ?Sized,
    {
        let founders = Population::seed(&self.options, rng)?;
        self.run_from(founders, rng, sink)
    }

    /// Runs every generation starting from a caller-provided founding population.
    pub fn run_from<S>(
        &self,
        founders: Population,
        rng: &mut RandomNumberGenerator,
        sink: &mut S,
    ) -> Result<SimulationOutcome>
    where
        S: ReportSink + ?Sized,
    {
        info!(
            founders = founders.len(),
            generations = self.options.get_num_generations(),
            concentration = self.options.get_concentration(),
            "Starting simulation"
        );

        let mut population = founders;
        let mut reports = Vec::with_capacity(self.options.get_num_generations() + 1);
        self.record(GenerationReport::new(0, &population), &population, sink, &mut reports)?;

        for generation in 1..=self.options.get_num_generations() {
            population = match self.engine.advance(&population, rng) {
                Ok(next) => next,
                Err(e) => {
                    error!(generation, error = %e.root_cause(), "Simulation aborted");
                    return Err(e);
                }
            };

            self.record(
                GenerationReport::new(generation, &population),
                &population,
                sink,
                &mut reports,
            )?;
        }

        info!(
            males = population.male_count(),
            females = population.female_count(),
            "Simulation finished"
        );

        Ok(SimulationOutcome {
            population,
            reports,
        })
    }

    fn record<S>(
        &self,
        report: GenerationReport,
        population: &Population,
        sink: &mut S,
        reports: &mut Vec<GenerationReport>,
    ) -> Result<()>
    where
        S: ReportSink + ?Sized,
    {
        match self.options.get_log_level() {
            LogLevel::Minimal => info!(
                generation = report.generation,
                males = report.males,
                females = report.females,
                sex_ratio = report.sex_ratio,
                "Generation complete"
            ),
            LogLevel::Verbose => info!(
                generation = report.generation,
                males = report.males,
                females = report.females,
                sex_ratio = report.sex_ratio,
                mean_sperm_ratio = report.mean_sperm_ratio.unwrap_or(f64::NAN),
                sperm_ratio_std_dev = population.sperm_ratio_std_dev().unwrap_or(f64::NAN),
                "Generation complete"
            ),
            LogLevel::None => {}
        }

        sink.record(&report)?;
        reports.push(report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimulationError;
    use crate::heredity::Patrilineal;
    use crate::individual::{Individual, Sex};
    use crate::simulation::report::NullSink;

    fn small_options() -> SimulationOptions {
        SimulationOptions::builder()
            .initial_population(20)
            .initial_ratio(0.5)
            .num_generations(5)
            .concentration(20.0)
            .build()
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = SimulationOptions::builder().initial_population(0).build();
        match Simulation::new(options) {
            Err(SimulationError::Configuration(msg)) => {
                assert!(msg.contains("Initial population cannot be zero"))
            }
            other => panic!("Expected Configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_reports_every_generation() {
        let simulation = Simulation::new(small_options()).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut sink: Vec<GenerationReport> = Vec::new();

        let outcome = simulation.run(&mut rng, &mut sink).unwrap();

        assert_eq!(outcome.reports.len(), 6);
        assert_eq!(sink, outcome.reports);
        assert_eq!(outcome.reports[0].generation, 0);
        assert_eq!(outcome.reports[0].total(), 20);
        assert_eq!(outcome.reports.last().unwrap().total(), outcome.population.len());
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let simulation = Simulation::new(small_options()).unwrap();
        let mut sink = NullSink;

        let a = simulation
            .run(&mut RandomNumberGenerator::from_seed(21), &mut sink)
            .unwrap();
        let b = simulation
            .run(&mut RandomNumberGenerator::from_seed(21), &mut sink)
            .unwrap();

        assert_eq!(a.reports, b.reports);
    }

    #[test]
    fn test_one_sided_founders_abort() {
        let simulation = Simulation::new(small_options()).unwrap();
        let founders = Population::from_individuals(
            (0..5).map(|_| Individual::founder(Sex::Male, 0.5)),
        );
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut sink: Vec<GenerationReport> = Vec::new();

        let result = simulation.run_from(founders, &mut rng, &mut sink);

        assert!(matches!(
            result,
            Err(SimulationError::DegeneratePopulation { males: 5, females: 0 })
        ));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_patrilineal_simulation_runs() {
        let simulation = Simulation::with_heredity(small_options(), Patrilineal).unwrap();
        let mut rng = RandomNumberGenerator::from_seed(13);
        let mut sink = NullSink;

        let outcome = simulation.run(&mut rng, &mut sink);
        assert!(outcome.is_ok() || matches!(outcome, Err(SimulationError::DegeneratePopulation { .. })));
    }
}
