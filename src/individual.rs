//! # Individual
//!
//! An `Individual` is one organism: its sex, its heritable sperm ratio (the
//! probability that a child it fathers is male), and optionally the two parents
//! that produced it.
//!
//! Parents are held behind an `Arc`, so cloning an individual is cheap and a
//! father used in many pairings shares one snapshot among all his children.
//! Links only ever point to earlier generations, so the ancestry is a tree
//! (strictly, a DAG) and never a cycle.
//!
//! ## Example
//!
//! ```rust
//! use sexratio::individual::{Individual, Sex};
//!
//! let mother = Individual::founder(Sex::Female, 0.4);
//! let father = Individual::founder(Sex::Male, 0.6);
//! let child = Individual::offspring(Sex::Male, 0.52, mother, father);
//!
//! assert_eq!(child.mother().unwrap().sperm_ratio(), 0.4);
//! assert!(child.father().unwrap().is_founder());
//! ```

use std::{fmt, sync::Arc};

/// Sex of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sex {
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// The two individuals a child was produced from.
#[derive(Debug, Clone)]
pub struct Parents {
    pub mother: Individual,
    pub father: Individual,
}

/// One organism. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Individual {
    sex: Sex,
    sperm_ratio: f64,
    parents: Option<Arc<Parents>>,
}

impl Individual {
    /// Creates a member of the seed generation, with no recorded parents.
    pub fn founder(sex: Sex, sperm_ratio: f64) -> Self {
        Self {
            sex,
            sperm_ratio,
            parents: None,
        }
    }

    /// Creates a child that keeps both parents for lineage diagnostics.
    pub fn offspring(sex: Sex, sperm_ratio: f64, mother: Individual, father: Individual) -> Self {
        Self {
            sex,
            sperm_ratio,
            parents: Some(Arc::new(Parents { mother, father })),
        }
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn is_male(&self) -> bool {
        self.sex == Sex::Male
    }

    /// Probability that a child fathered by this individual is male.
    pub fn sperm_ratio(&self) -> f64 {
        self.sperm_ratio
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_deref()
    }

    pub fn mother(&self) -> Option<&Individual> {
        self.parents().map(|p| &p.mother)
    }

    pub fn father(&self) -> Option<&Individual> {
        self.parents().map(|p| &p.father)
    }

    /// True when no parents were recorded.
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (sperm ratio {:.6})", self.sex, self.sperm_ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_founder_has_no_parents() {
        let founder = Individual::founder(Sex::Female, 0.5);
        assert!(founder.is_founder());
        assert!(founder.mother().is_none());
        assert!(founder.father().is_none());
        assert!(!founder.is_male());
    }

    #[test]
    fn test_offspring_shares_parent_snapshot() {
        let father = Individual::founder(Sex::Male, 0.7);
        let mother = Individual::founder(Sex::Female, 0.3);
        let child = Individual::offspring(Sex::Female, 0.5, mother, father);
        let sibling = child.clone();

        let a = child.parents.as_ref().unwrap();
        let b = sibling.parents.as_ref().unwrap();
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(child.father().unwrap().sperm_ratio(), 0.7);
        assert_eq!(child.mother().unwrap().sex(), Sex::Female);
    }

    #[test]
    fn test_display() {
        let founder = Individual::founder(Sex::Male, 0.25);
        assert_eq!(founder.to_string(), "male (sperm ratio 0.250000)");
    }
}
