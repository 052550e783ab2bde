//! Construction and validation of a [TaxonCatalog].
//!
//! Taxa are collected in a [CatalogBuilder] in any order; parents may be
//! added after their children. [`CatalogBuilder::build`] then checks, in
//! this order:
//! 1. the builder is not empty,
//! 2. ids are non-empty and unique,
//! 3. every parent reference resolves,
//! 4. the parent relation is a forest (no cycles),
//! 5. every child is strictly finer than its parent.
//!
//! The first violation found is returned as [CatalogError]. A child that
//! skips ranks (e.g. a genus directly below a family's parent order) is
//! accepted, but logged as a warning.
//!
//! # Builder lifecycle
//! ```text
//! new() ──→ add_taxon()/with_taxon() ... ──→ build() ──→ TaxonCatalog
//!                                              └──────→ CatalogError
//! ```

use crate::model::catalog::TaxonCatalog;
use crate::model::catalog_error::CatalogError;
use crate::model::taxon::{Taxon, TaxonIndex};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, warn};

// =#========================================================================#=
// CATALOG BUILDER
// =#========================================================================#=
/// Collects taxa and turns them into a validated [TaxonCatalog].
///
/// # Example
/// ```
/// use taxometry::model::{CatalogBuilder, Taxon, TaxonomicLevel};
///
/// let catalog = CatalogBuilder::new()
///     .with_taxon(Taxon::new("aves", "Птицы", "Aves", TaxonomicLevel::Class))
///     .with_taxon(
///         Taxon::new("apterygiformes", "Кивиобразные", "Apterygiformes", TaxonomicLevel::Order)
///             .with_parent("aves"),
///     )
///     .build()?;
///
/// assert_eq!(catalog.len(), 2);
/// # Ok::<(), taxometry::model::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    taxa: Vec<Taxon>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder holding the given taxa, in order.
    pub fn from_taxa(taxa: Vec<Taxon>) -> Self {
        CatalogBuilder { taxa }
    }

    /// Adds a taxon and returns the index it will have in the catalog.
    pub fn add_taxon(&mut self, taxon: Taxon) -> TaxonIndex {
        let index = self.taxa.len();
        self.taxa.push(taxon);
        index
    }

    /// Adds a taxon, builder style.
    pub fn with_taxon(mut self, taxon: Taxon) -> Self {
        self.add_taxon(taxon);
        self
    }

    /// Returns the number of taxa added so far.
    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    /// Returns `true` if no taxa were added yet.
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    /// Validates the collected taxa and builds the catalog.
    ///
    /// # Errors
    /// See the [module documentation](self) for the checks performed.
    pub fn build(self) -> Result<TaxonCatalog, CatalogError> {
        let taxa = self.taxa;
        if taxa.is_empty() {
            return Err(CatalogError::Empty);
        }

        let index = build_index(&taxa)?;
        let parents = resolve_parents(&taxa, &index)?;
        let depths = compute_depths(&taxa, &parents)?;
        check_levels(&taxa, &parents)?;

        let catalog = TaxonCatalog::from_parts(taxa, index, parents, depths);
        debug!(
            taxa = catalog.len(),
            roots = catalog.num_roots(),
            max_depth = catalog.max_depth(),
            "built taxon catalog"
        );
        Ok(catalog)
    }
}

impl FromIterator<Taxon> for CatalogBuilder {
    fn from_iter<I: IntoIterator<Item = Taxon>>(iter: I) -> Self {
        CatalogBuilder::from_taxa(iter.into_iter().collect())
    }
}

// ============================================================================
// Validation steps (private)
// ============================================================================
/// Maps ids to indices, rejecting duplicates.
fn build_index(taxa: &[Taxon]) -> Result<HashMap<String, TaxonIndex>, CatalogError> {
    let mut index = HashMap::with_capacity(taxa.len());
    for (i, taxon) in taxa.iter().enumerate() {
        if taxon.id.trim().is_empty() {
            return Err(CatalogError::EmptyId(taxon.latin_name.clone()));
        }
        match index.entry(taxon.id.clone()) {
            Entry::Occupied(_) => return Err(CatalogError::DuplicateId(taxon.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(i);
            }
        }
    }
    Ok(index)
}

/// Resolves each parent id to an index, rejecting dangling references.
fn resolve_parents(
    taxa: &[Taxon],
    index: &HashMap<String, TaxonIndex>,
) -> Result<Vec<Option<TaxonIndex>>, CatalogError> {
    taxa.iter()
        .map(|taxon| match taxon.parent_id() {
            None => Ok(None),
            Some(parent) => index
                .get(parent)
                .copied()
                .map(Some)
                .ok_or_else(|| CatalogError::DanglingParent {
                    taxon: taxon.id.clone(),
                    parent: parent.to_string(),
                }),
        })
        .collect()
}

/// Computes the depth of every taxon, rejecting parent cycles.
///
/// Each taxon is visited once: walking up from a taxon stops at the first
/// ancestor whose depth is already known, and a taxon seen twice on the same
/// walk closes a cycle.
fn compute_depths(
    taxa: &[Taxon],
    parents: &[Option<TaxonIndex>],
) -> Result<Vec<usize>, CatalogError> {
    let mut depths: Vec<Option<usize>> = vec![None; taxa.len()];
    let mut on_walk = vec![false; taxa.len()];
    let mut walk = Vec::new();

    for start in 0..taxa.len() {
        walk.clear();
        let mut current = Some(start);
        while let Some(index) = current {
            if depths[index].is_some() {
                break;
            }
            if on_walk[index] {
                return Err(CatalogError::Cycle(taxa[index].id.clone()));
            }
            on_walk[index] = true;
            walk.push(index);
            current = parents[index];
        }

        // Top-most taxon of the walk first, so parent depths are known
        for &index in walk.iter().rev() {
            let depth = parents[index]
                .and_then(|parent| depths[parent])
                .map_or(0, |parent_depth| parent_depth + 1);
            depths[index] = Some(depth);
        }
    }

    Ok(depths.into_iter().map(|depth| depth.unwrap_or(0)).collect())
}

/// Rejects children that are not finer than their parent; warns on skipped ranks.
fn check_levels(taxa: &[Taxon], parents: &[Option<TaxonIndex>]) -> Result<(), CatalogError> {
    for (child, parent) in parents.iter().enumerate() {
        let Some(parent) = *parent else { continue };
        let (child, parent) = (&taxa[child], &taxa[parent]);

        match parent.level.steps_to(child.level) {
            None => {
                return Err(CatalogError::LevelOrder {
                    taxon: child.id.clone(),
                    level: child.level,
                    parent: parent.id.clone(),
                    parent_level: parent.level,
                });
            }
            Some(1) => {}
            Some(steps) => warn!(
                taxon = %child.id,
                parent = %parent.id,
                steps,
                "taxon skips ranks below its parent"
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaxonomicLevel;

    fn taxon(id: &str, level: TaxonomicLevel, parent: Option<&str>) -> Taxon {
        let taxon = Taxon::new(id, id, id, level);
        match parent {
            Some(parent) => taxon.with_parent(parent),
            None => taxon,
        }
    }

    #[test]
    fn test_depths_with_parent_added_after_child() {
        let taxa = vec![
            taxon("genus", TaxonomicLevel::Genus, Some("family")),
            taxon("family", TaxonomicLevel::Family, Some("order")),
            taxon("order", TaxonomicLevel::Order, None),
        ];
        let index = build_index(&taxa).unwrap();
        let parents = resolve_parents(&taxa, &index).unwrap();
        let depths = compute_depths(&taxa, &parents).unwrap();
        assert_eq!(depths, vec![2, 1, 0]);
    }

    #[test]
    fn test_self_parent_is_cycle() {
        let taxa = vec![taxon("ouroboros", TaxonomicLevel::Genus, Some("ouroboros"))];
        let index = build_index(&taxa).unwrap();
        let parents = resolve_parents(&taxa, &index).unwrap();
        let err = compute_depths(&taxa, &parents).unwrap_err();
        assert!(matches!(err, CatalogError::Cycle(id) if id == "ouroboros"));
    }

    #[test]
    fn test_cycle_reached_from_outside() {
        // "tail" hangs off the cycle a -> b -> a
        let taxa = vec![
            taxon("tail", TaxonomicLevel::Species, Some("a")),
            taxon("a", TaxonomicLevel::Genus, Some("b")),
            taxon("b", TaxonomicLevel::Family, Some("a")),
        ];
        let index = build_index(&taxa).unwrap();
        let parents = resolve_parents(&taxa, &index).unwrap();
        assert!(matches!(
            compute_depths(&taxa, &parents),
            Err(CatalogError::Cycle(_))
        ));
    }
}
