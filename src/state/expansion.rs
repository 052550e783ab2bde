//! Expand/collapse state of tree renderings.
//!
//! [ExpansionState] remembers, per taxon id, whether the subtree below it is
//! shown. Flags are independent of each other: collapsing a taxon hides its
//! descendants without forgetting their own flags, so expanding it again
//! restores the previous view.
//!
//! Which taxa offer a toggle at all is decided by an [ExpandPolicy].

use crate::model::{Taxon, TaxonCatalog, TaxonId, TaxonomicLevel};
use std::collections::HashMap;
use tracing::trace;

// =#========================================================================#=
// EXPANSION STATE
// =#========================================================================#=
/// Per-taxon expand/collapse flags; taxa never toggled are collapsed.
///
/// # Example
/// ```
/// use taxometry::state::ExpansionState;
///
/// let mut expansion = ExpansionState::new();
/// assert!(!expansion.is_expanded("mammalia"));
/// assert!(expansion.toggle("mammalia"));
/// assert!(!expansion.toggle("mammalia"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    flags: HashMap<TaxonId, bool>,
}

impl ExpansionState {
    /// Creates a state with every taxon collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state in which every taxon at `level` or coarser is expanded,
    /// walking down from the roots of `catalog`.
    ///
    /// The walk stops at the first taxon finer than `level`, so nothing below
    /// it gets expanded even if a finer-grained branch returns to coarser
    /// levels (which validated catalogs never do).
    pub fn expanded_through(catalog: &TaxonCatalog, level: TaxonomicLevel) -> Self {
        fn expand_down(
            state: &mut ExpansionState,
            catalog: &TaxonCatalog,
            taxa: Vec<&Taxon>,
            level: TaxonomicLevel,
        ) {
            for taxon in taxa {
                if taxon.level <= level {
                    state.expand(&taxon.id);
                    expand_down(state, catalog, catalog.children_of(Some(&taxon.id)), level);
                }
            }
        }

        let mut state = ExpansionState::new();
        expand_down(&mut state, catalog, catalog.children_of(None), level);
        state
    }

    /// Flips the flag of `id` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let flag = self.flags.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
        trace!(id, expanded = *flag, "toggled tree node");
        *flag
    }

    /// Returns whether `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Expands `id`.
    pub fn expand(&mut self, id: &str) {
        self.flags.insert(id.to_string(), true);
    }

    /// Collapses `id`, keeping the flags of its descendants.
    pub fn collapse(&mut self, id: &str) {
        self.flags.insert(id.to_string(), false);
    }

    /// Collapses every taxon.
    pub fn collapse_all(&mut self) {
        self.flags.clear();
    }

    /// Returns the ids of all expanded taxa, sorted.
    pub fn expanded_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .flags
            .iter()
            .filter(|&(_, &expanded)| expanded)
            .map(|(id, _)| id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of expanded taxa.
    pub fn num_expanded(&self) -> usize {
        self.flags.values().filter(|&&expanded| expanded).count()
    }
}

// =#========================================================================#=
// EXPAND POLICY
// =#========================================================================#=
/// Decides which taxa of a tree rendering offer an expand/collapse toggle.
///
/// A taxon is expandable if it has children and, when a `max_level` is set,
/// its level is not finer than `max_level`. Leaves are never expandable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandPolicy {
    max_level: Option<TaxonomicLevel>,
}

impl ExpandPolicy {
    /// Every taxon with children is expandable.
    pub fn unrestricted() -> Self {
        ExpandPolicy { max_level: None }
    }

    /// Only taxa with children at `max_level` or coarser are expandable.
    pub fn up_to(max_level: TaxonomicLevel) -> Self {
        ExpandPolicy {
            max_level: Some(max_level),
        }
    }

    /// Returns the finest level that may be expanded, `None` if unrestricted.
    pub fn max_level(&self) -> Option<TaxonomicLevel> {
        self.max_level
    }

    /// Returns whether `taxon` offers a toggle in `catalog`.
    pub fn is_expandable(&self, catalog: &TaxonCatalog, taxon: &Taxon) -> bool {
        self.max_level.is_none_or(|max_level| taxon.level <= max_level)
            && catalog.has_children(&taxon.id)
    }
}
