//! Query layer over a [TaxonCatalog].
//!
//! All queries are pure: they never fail, and an unknown id is answered with
//! absence or an empty result. They run on the indices built at catalog
//! construction, so lookups are O(1) and child/path queries are linear in
//! the size of their result.
//!
//! | Query | Unknown id | Result order |
//! |-------|------------|--------------|
//! | [`children_of`](TaxonCatalog::children_of) | empty | insertion order |
//! | [`by_id`](TaxonCatalog::by_id) | `None` | - |
//! | [`ancestor_path`](TaxonCatalog::ancestor_path) | empty | root first |
//! | [`related`](TaxonCatalog::related) | `None` | insertion order |

use crate::model::catalog::TaxonCatalog;
use crate::model::taxon::{Taxon, TaxonIndex};

impl TaxonCatalog {
    /// Returns all taxa whose parent is `parent_id`, in insertion order.
    ///
    /// With `None`, returns the roots. The result is empty if the id is
    /// unknown or the taxon has no children.
    ///
    /// # Example
    /// ```
    /// use taxometry::model::TaxonCatalog;
    ///
    /// let catalog = TaxonCatalog::sample()?;
    /// let kingdoms: Vec<_> = catalog
    ///     .children_of(Some("eukarya"))
    ///     .iter()
    ///     .map(|t| t.id.as_str())
    ///     .collect();
    /// assert_eq!(kingdoms, ["animalia", "plantae", "fungi"]);
    /// assert!(catalog.children_of(Some("homo_sapiens")).is_empty());
    /// # Ok::<(), taxometry::model::CatalogError>(())
    /// ```
    pub fn children_of(&self, parent_id: Option<&str>) -> Vec<&Taxon> {
        let indices = match parent_id {
            None => self.root_indices(),
            Some(id) => match self.index_of(id) {
                Some(index) => self.child_indices(index),
                None => &[],
            },
        };
        indices.iter().map(|&index| &self[index]).collect()
    }

    /// Returns the taxon with the given id, or `None` if there is none.
    pub fn by_id(&self, id: &str) -> Option<&Taxon> {
        self.index_of(id).map(|index| &self[index])
    }

    /// Returns whether the taxon with the given id has at least one child.
    pub fn has_children(&self, id: &str) -> bool {
        self.index_of(id)
            .is_some_and(|index| !self.child_indices(index).is_empty())
    }

    /// Returns the chain of taxa from the root down to `id`, both inclusive.
    ///
    /// Empty for the empty id (no selection) and for unknown ids. Otherwise
    /// the first element is a root, the last element is the taxon itself, and
    /// each element is the parent of the next.
    ///
    /// # Example
    /// ```
    /// use taxometry::model::TaxonCatalog;
    ///
    /// let catalog = TaxonCatalog::sample()?;
    /// let path: Vec<_> = catalog
    ///     .ancestor_path("panthera")
    ///     .iter()
    ///     .map(|t| t.latin_name.as_str())
    ///     .collect();
    /// assert_eq!(path, ["Eukarya", "Animalia", "Chordata", "Mammalia", "Carnivora", "Felidae", "Panthera"]);
    /// # Ok::<(), taxometry::model::CatalogError>(())
    /// ```
    pub fn ancestor_path(&self, id: &str) -> Vec<&Taxon> {
        let mut path: Vec<&Taxon> = self.ancestors(id).collect();
        path.reverse();
        path
    }

    /// Returns an iterator walking from the taxon `id` up to its root,
    /// starting with the taxon itself. Empty for unknown ids.
    ///
    /// Terminates, since catalogs are validated to be forests.
    pub fn ancestors(&self, id: &str) -> AncestorIter<'_> {
        AncestorIter {
            catalog: self,
            current: self.index_of(id),
        }
    }

    /// Returns the neighbourhood of the taxon `id`: its children, its
    /// siblings and its parent. `None` for unknown ids.
    pub fn related(&self, id: &str) -> Option<RelatedTaxa<'_>> {
        let index = self.index_of(id)?;
        let taxon = &self[index];
        let parent = self.parent_index(index);

        let siblings = match parent {
            // Roots are not considered siblings of each other
            None => Vec::new(),
            Some(parent) => self
                .child_indices(parent)
                .iter()
                .filter(|&&sibling| sibling != index)
                .map(|&sibling| &self[sibling])
                .collect(),
        };

        Some(RelatedTaxa {
            taxon,
            children: self.taxa_at(self.child_indices(index)),
            siblings,
            parent: parent.map(|parent| &self[parent]),
        })
    }

    fn taxa_at(&self, indices: &[TaxonIndex]) -> Vec<&Taxon> {
        indices.iter().map(|&index| &self[index]).collect()
    }
}

// =#========================================================================#=
// RELATED TAXA
// =#========================================================================#=
/// Neighbourhood of a taxon, as shown below its detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedTaxa<'a> {
    /// The taxon itself
    pub taxon: &'a Taxon,
    /// Direct children, in insertion order
    pub children: Vec<&'a Taxon>,
    /// Other children of the same parent, in insertion order
    pub siblings: Vec<&'a Taxon>,
    /// The parent, `None` for roots
    pub parent: Option<&'a Taxon>,
}

impl RelatedTaxa<'_> {
    /// Returns `true` if there is nothing to relate to (a lone root).
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.siblings.is_empty() && self.parent.is_none()
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator walking parent references upwards, from a taxon to its root.
pub struct AncestorIter<'a> {
    catalog: &'a TaxonCatalog,
    current: Option<TaxonIndex>,
}

impl<'a> Iterator for AncestorIter<'a> {
    type Item = &'a Taxon;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.current?;
        self.current = self.catalog.parent_index(index);
        Some(&self.catalog[index])
    }
}
