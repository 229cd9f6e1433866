//! # Reports and sinks
//!
//! A [`GenerationReport`] summarises one generation. Reports are handed to a
//! [`ReportSink`] as the run progresses; the binary uses [`ConsoleReporter`],
//! tests usually collect them into a `Vec`.
//!
//! At the end of a run the surviving population's sperm ratios are written with
//! [`write_sperm_ratios`]: one value per line, males first, then females.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::{Result, ResultExt};

use super::population::Population;

/// Summary of one generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationReport {
    /// 0 for the founders, `n` after the n-th generation step.
    pub generation: usize,
    pub males: usize,
    pub females: usize,
    /// `males / (males + females)`.
    pub sex_ratio: f64,
    pub mean_sperm_ratio: Option<f64>,
}

impl GenerationReport {
    pub fn new(generation: usize, population: &Population) -> Self {
        Self {
            generation,
            males: population.male_count(),
            females: population.female_count(),
            sex_ratio: population.sex_ratio(),
            mean_sperm_ratio: population.mean_sperm_ratio(),
        }
    }

    pub fn total(&self) -> usize {
        self.males + self.females
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} males\t{} females\tsex ratio {}",
            self.males, self.females, self.sex_ratio
        )
    }
}

/// Receives one report per generation, founders included.
pub trait ReportSink {
    fn record(&mut self, report: &GenerationReport) -> Result<()>;
}

impl ReportSink for Vec<GenerationReport> {
    fn record(&mut self, report: &GenerationReport) -> Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn record(&mut self, _report: &GenerationReport) -> Result<()> {
        Ok(())
    }
}

/// Writes each report as one line to the wrapped writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReporter<W> {
    fn record(&mut self, report: &GenerationReport) -> Result<()> {
        writeln!(self.out, "{}", report)?;
        Ok(())
    }
}

/// Writes every sperm ratio of `population`, one per line, males first.
///
/// Returns the number of values written.
pub fn write_sperm_ratios<W: Write>(population: &Population, mut out: W) -> Result<usize> {
    let mut written = 0;
    for ratio in population.sperm_ratios() {
        writeln!(out, "{}", ratio)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the population's sperm ratios to it.
pub fn write_sperm_ratios_to_file<P: AsRef<Path>>(population: &Population, path: P) -> Result<usize> {
    let path = path.as_ref();
    let file = File::create(path).context(format!("Failed to create {}", path.display()))?;
    write_sperm_ratios(population, BufWriter::new(file))
}
