//! Taxonomic ranks.

use serde::{Deserialize, Serialize};
use std::fmt;

// =#========================================================================#=
// TAXONOMIC LEVEL
// =#========================================================================#=
/// Rank of a taxon within the classification hierarchy.
///
/// Variants are declared coarse-to-fine, so the derived [Ord] follows rank:
/// `Domain < Kingdom < ... < Species`. A "finer" level compares greater.
///
/// # Example
/// ```
/// use taxometry::model::TaxonomicLevel;
///
/// assert!(TaxonomicLevel::Domain < TaxonomicLevel::Species);
/// assert_eq!(TaxonomicLevel::Genus.finer(), Some(TaxonomicLevel::Species));
/// assert_eq!(TaxonomicLevel::Species.finer(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaxonomicLevel {
    Domain,
    Kingdom,
    Phylum,
    Class,
    Order,
    Family,
    Genus,
    Species,
}

impl TaxonomicLevel {
    /// All levels, coarse-to-fine.
    pub const ALL: [TaxonomicLevel; 8] = [
        TaxonomicLevel::Domain,
        TaxonomicLevel::Kingdom,
        TaxonomicLevel::Phylum,
        TaxonomicLevel::Class,
        TaxonomicLevel::Order,
        TaxonomicLevel::Family,
        TaxonomicLevel::Genus,
        TaxonomicLevel::Species,
    ];

    /// Returns the 0-based rank of this level (Domain = 0).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Returns the number of ranks between `self` and a finer `other`,
    /// or `None` if `other` is not strictly finer.
    pub fn steps_to(self, other: TaxonomicLevel) -> Option<usize> {
        if other > self {
            Some(other.rank() - self.rank())
        } else {
            None
        }
    }

    /// Returns the next finer level, `None` for [Species](TaxonomicLevel::Species).
    pub fn finer(self) -> Option<TaxonomicLevel> {
        Self::ALL.get(self.rank() + 1).copied()
    }

    /// Returns the next coarser level, `None` for [Domain](TaxonomicLevel::Domain).
    pub fn coarser(self) -> Option<TaxonomicLevel> {
        self.rank().checked_sub(1).map(|rank| Self::ALL[rank])
    }

    /// English rank name.
    pub fn as_str(self) -> &'static str {
        match self {
            TaxonomicLevel::Domain => "Domain",
            TaxonomicLevel::Kingdom => "Kingdom",
            TaxonomicLevel::Phylum => "Phylum",
            TaxonomicLevel::Class => "Class",
            TaxonomicLevel::Order => "Order",
            TaxonomicLevel::Family => "Family",
            TaxonomicLevel::Genus => "Genus",
            TaxonomicLevel::Species => "Species",
        }
    }

    /// Rank label shown by the catalog front end.
    pub fn label(self) -> &'static str {
        match self {
            TaxonomicLevel::Domain => "Домен",
            TaxonomicLevel::Kingdom => "Царство",
            TaxonomicLevel::Phylum => "Тип",
            TaxonomicLevel::Class => "Класс",
            TaxonomicLevel::Order => "Отряд",
            TaxonomicLevel::Family => "Семейство",
            TaxonomicLevel::Genus => "Род",
            TaxonomicLevel::Species => "Вид",
        }
    }
}

impl fmt::Display for TaxonomicLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
