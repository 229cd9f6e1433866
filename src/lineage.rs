//! # Lineage
//!
//! Renders the recorded ancestry of an individual as an indented family tree.
//! Each line is the individual's descriptor; its mother's tree follows one level
//! deeper, then its father's. Traversal stops at individuals without recorded
//! parents.
//!
//! ```text
//! female (sperm ratio 0.999812)
//!   female (sperm ratio 0.998301)
//!   male (sperm ratio 0.999990)
//!     female (sperm ratio 0.991004)
//!     male (sperm ratio 0.997112)
//! ```

use crate::individual::Individual;

const INDENT: &str = "  ";

/// Walks parent links and produces the family-tree trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineageReporter {
    max_depth: Option<usize>,
}

impl LineageReporter {
    /// A reporter that follows the ancestry all the way to the founders.
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// A reporter that stops `max_depth` generations above the individual.
    ///
    /// Ancestors beyond the limit are replaced by a single `...` line.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns the family tree of `individual`, one line per ancestor.
    pub fn report(&self, individual: &Individual) -> Vec<String> {
        let mut lines = Vec::new();
        self.walk(individual, 0, &mut lines);
        lines
    }

    /// Returns the family tree as a single newline-joined string.
    pub fn render(&self, individual: &Individual) -> String {
        self.report(individual).join("\n")
    }

    fn walk(&self, individual: &Individual, depth: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        lines.push(format!("{}{}", indent, individual));

        let Some(parents) = individual.parents() else {
            return;
        };

        if self.max_depth.is_some_and(|max| depth >= max) {
            lines.push(format!("{}{}...", indent, INDENT));
            return;
        }

        self.walk(&parents.mother, depth + 1, lines);
        self.walk(&parents.father, depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::Sex;

    fn family() -> Individual {
        let mother = Individual::offspring(
            Sex::Female,
            0.4,
            Individual::founder(Sex::Female, 0.3),
            Individual::founder(Sex::Male, 0.5),
        );
        let father = Individual::founder(Sex::Male, 0.6);
        Individual::offspring(Sex::Male, 0.5, mother, father)
    }

    #[test]
    fn test_founder_is_single_line() {
        let founder = Individual::founder(Sex::Female, 0.5);
        let lines = LineageReporter::new().report(&founder);
        assert_eq!(lines, vec!["female (sperm ratio 0.500000)".to_string()]);
    }

    #[test]
    fn test_mother_before_father() {
        let lines = LineageReporter::new().report(&family());

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "male (sperm ratio 0.500000)");
        assert_eq!(lines[1], "  female (sperm ratio 0.400000)");
        assert_eq!(lines[2], "    female (sperm ratio 0.300000)");
        assert_eq!(lines[3], "    male (sperm ratio 0.500000)");
        assert_eq!(lines[4], "  male (sperm ratio 0.600000)");
    }

    #[test]
    fn test_max_depth_truncates() {
        let lines = LineageReporter::with_max_depth(1).report(&family());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], "    ...");
        assert_eq!(lines[3], "  male (sperm ratio 0.600000)");
    }

    #[test]
    fn test_render_joins_lines() {
        let rendered = LineageReporter::new().render(&family());
        assert_eq!(rendered.lines().count(), 5);
    }
}
