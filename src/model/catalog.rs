//! The taxon store.
//!
//! Provides [TaxonCatalog], the immutable collection of all taxa, together
//! with the indices needed to answer queries without scanning:
//! - id → [TaxonIndex]
//! - [TaxonIndex] → parent index
//! - [TaxonIndex] → child indices (insertion order)
//! - root indices (insertion order)
//!
//! Catalogs are created through [CatalogBuilder](crate::model::CatalogBuilder),
//! which validates the data first. The queries live in [crate::model::query].

use crate::model::catalog_builder::CatalogBuilder;
use crate::model::catalog_error::CatalogError;
use crate::model::sample_data;
use crate::model::taxon::{Taxon, TaxonIndex};
use std::collections::HashMap;

// =#========================================================================#=
// TAXON CATALOG
// =#========================================================================#=
/// Immutable, validated store of taxa using the arena pattern.
///
/// Taxa are stored contiguously in insertion order and referenced by
/// [TaxonIndex]. Parent and child relations are kept as index lists that are
/// computed once at construction.
///
/// # Structure
/// - Every taxon of the catalog has a unique id.
/// - Every parent reference resolves; the parent relation forms a forest.
/// - Children and roots keep the order in which taxa were added.
/// - Nothing is mutated after construction, so a catalog can be shared by
///   reference for the lifetime of the program.
///
/// # Example
/// ```
/// use taxometry::model::TaxonCatalog;
///
/// let catalog = TaxonCatalog::sample()?;
/// let roots: Vec<_> = catalog.roots().map(|t| t.latin_name.as_str()).collect();
/// assert_eq!(roots, ["Bacteria", "Archaea", "Eukarya"]);
/// # Ok::<(), taxometry::model::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TaxonCatalog {
    /// Taxa in insertion order (arena)
    taxa: Vec<Taxon>,

    /// Map from taxon id to its index
    index: HashMap<String, TaxonIndex>,

    /// Parent index per taxon, `None` for roots
    parents: Vec<Option<TaxonIndex>>,

    /// Child indices per taxon, in insertion order
    children: Vec<Vec<TaxonIndex>>,

    /// Indices of all roots, in insertion order
    roots: Vec<TaxonIndex>,

    /// Distance of each taxon to its root (roots have depth 0)
    depths: Vec<usize>,
}

// ============================================================================
// Construction (pub(crate)) + sample
// ============================================================================
impl TaxonCatalog {
    /// Assembles a catalog from already validated parts.
    pub(crate) fn from_parts(
        taxa: Vec<Taxon>,
        index: HashMap<String, TaxonIndex>,
        parents: Vec<Option<TaxonIndex>>,
        depths: Vec<usize>,
    ) -> Self {
        let mut children = vec![Vec::new(); taxa.len()];
        let mut roots = Vec::new();
        for (child, parent) in parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(child),
                None => roots.push(child),
            }
        }

        TaxonCatalog {
            taxa,
            index,
            parents,
            children,
            roots,
            depths,
        }
    }

    /// Builds the catalog compiled into this crate: three domains and the
    /// lineages of *Homo sapiens* and *Panthera leo* with some relatives.
    pub fn sample() -> Result<Self, CatalogError> {
        CatalogBuilder::from_taxa(sample_data::taxa()).build()
    }
}

// ============================================================================
// Getters / Accessors (pub)
// ============================================================================
impl TaxonCatalog {
    /// Returns the number of taxa.
    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    /// Returns `true` if the catalog holds no taxa.
    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    /// Returns all taxa in insertion order.
    pub fn taxa(&self) -> &[Taxon] {
        &self.taxa
    }

    /// Returns an iterator over all taxa in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Taxon> {
        self.taxa.iter()
    }

    /// Returns the taxon at `index`, or `None` if out of bounds.
    pub fn get(&self, index: TaxonIndex) -> Option<&Taxon> {
        self.taxa.get(index)
    }

    /// Returns the arena index of the taxon with the given id.
    pub fn index_of(&self, id: &str) -> Option<TaxonIndex> {
        self.index.get(id).copied()
    }

    /// Returns an iterator over the root taxa in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &Taxon> + '_ {
        self.roots.iter().map(|&index| &self.taxa[index])
    }

    /// Returns the number of root taxa.
    pub fn num_roots(&self) -> usize {
        self.roots.len()
    }

    /// Returns the number of taxa without children.
    pub fn num_leaves(&self) -> usize {
        self.children.iter().filter(|c| c.is_empty()).count()
    }

    /// Returns the depth of the taxon with the given id (roots have depth 0).
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|index| self.depths[index])
    }

    /// Returns the largest depth of any taxon, `0` for an empty catalog.
    pub fn max_depth(&self) -> usize {
        self.depths.iter().copied().max().unwrap_or(0)
    }

    /// Returns an iterator over the catalog in pre-order
    /// (parents before children, siblings in insertion order).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }

    // --- index-level access for the query layer ---

    pub(crate) fn parent_index(&self, index: TaxonIndex) -> Option<TaxonIndex> {
        self.parents[index]
    }

    pub(crate) fn child_indices(&self, index: TaxonIndex) -> &[TaxonIndex] {
        &self.children[index]
    }

    pub(crate) fn root_indices(&self) -> &[TaxonIndex] {
        &self.roots
    }
}

impl std::ops::Index<TaxonIndex> for TaxonCatalog {
    type Output = Taxon;

    fn index(&self, index: TaxonIndex) -> &Self::Output {
        &self.taxa[index]
    }
}

impl<'a> IntoIterator for &'a TaxonCatalog {
    type Item = &'a Taxon;
    type IntoIter = std::slice::Iter<'a, Taxon>;

    fn into_iter(self) -> Self::IntoIter {
        self.taxa.iter()
    }
}

/// Two catalogs are equal if they hold equal taxa in the same order;
/// all indices derive from that.
impl PartialEq for TaxonCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.taxa == other.taxa
    }
}

impl Eq for TaxonCatalog {}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal over all trees of the catalog.
///
/// Uses an explicit stack instead of recursion. Roots are visited in
/// insertion order, and so are the children of each taxon.
pub struct PreOrderIter<'a> {
    catalog: &'a TaxonCatalog,
    stack: Vec<TaxonIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(catalog: &'a TaxonCatalog) -> Self {
        // Reversed, so that the first root is popped first
        let stack = catalog.roots.iter().rev().copied().collect();
        PreOrderIter { catalog, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a Taxon;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        self.stack
            .extend(self.catalog.children[index].iter().rev().copied());
        Some(&self.catalog.taxa[index])
    }
}
