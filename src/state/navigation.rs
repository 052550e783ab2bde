//! Selection and navigation state.
//!
//! A [Navigator] holds the current selection (a taxon id, or nothing for the
//! top-level view) and the state derived from it: the taxa to list and the
//! breadcrumb path. Every selection change recomputes both from the query
//! layer in full, so derived state can never lag behind the selection.

use crate::model::{Taxon, TaxonCatalog, TaxonId};
use tracing::trace;

// =#========================================================================#=
// NAVIGATOR
// =#========================================================================#=
/// Current selection in a catalog together with its derived state.
///
/// | Selection | `active_children` | `path` | `selected` |
/// |-----------|-------------------|--------|------------|
/// | none (`""`) | roots | empty | `None` |
/// | known id | children of the taxon | root → taxon | the taxon |
/// | unknown id | roots | empty | `None` |
///
/// # Example
/// ```
/// use taxometry::model::TaxonCatalog;
/// use taxometry::state::Navigator;
///
/// let catalog = TaxonCatalog::sample()?;
/// let mut navigator = Navigator::new(&catalog);
/// assert_eq!(navigator.active_children().len(), 3);
///
/// navigator.select("panthera");
/// assert_eq!(navigator.active_children()[0].latin_name, "Panthera leo");
/// assert_eq!(navigator.path().len(), 7);
/// # Ok::<(), taxometry::model::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Navigator<'c> {
    /// Catalog all derived state refers into
    catalog: &'c TaxonCatalog,

    /// Selected id, `None` for the top-level view
    selection: Option<TaxonId>,

    /// Taxa listed for the current selection
    active_children: Vec<&'c Taxon>,

    /// Ancestor path of the current selection
    path: Vec<&'c Taxon>,
}

impl<'c> Navigator<'c> {
    /// Creates a navigator showing the top level of `catalog`.
    pub fn new(catalog: &'c TaxonCatalog) -> Self {
        let mut navigator = Navigator {
            catalog,
            selection: None,
            active_children: Vec::new(),
            path: Vec::new(),
        };
        navigator.derive();
        navigator
    }

    /// Creates a navigator with `id` selected (see [`select`](Self::select)).
    pub fn with_selection(catalog: &'c TaxonCatalog, id: &str) -> Self {
        let mut navigator = Navigator::new(catalog);
        navigator.select(id);
        navigator
    }

    /// Selects the taxon `id`; an empty or blank id clears the selection.
    ///
    /// Ids that are not part of the catalog are kept as selection, but
    /// nothing counts as selected and the top level is listed.
    pub fn select(&mut self, id: &str) {
        self.selection = if id.trim().is_empty() {
            None
        } else {
            Some(id.to_string())
        };
        self.derive();
        trace!(
            selection = self.selection.as_deref().unwrap_or(""),
            children = self.active_children.len(),
            depth = self.path.len(),
            "selection changed"
        );
    }

    /// Clears the selection, returning to the top level.
    pub fn clear(&mut self) {
        self.select("");
    }

    /// Selects the parent of the selected taxon, or clears the selection
    /// if a root, an unknown id, or nothing is selected.
    pub fn go_up(&mut self) {
        let parent = self
            .selected()
            .and_then(Taxon::parent_id)
            .map(str::to_string);
        match parent {
            Some(parent) => self.select(&parent),
            None => self.clear(),
        }
    }

    /// Returns the selected id as given, `None` if nothing is selected.
    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Returns the selected taxon, `None` if nothing or an unknown id is selected.
    pub fn selected(&self) -> Option<&'c Taxon> {
        self.selection
            .as_deref()
            .and_then(|id| self.catalog.by_id(id))
    }

    /// Returns the taxa to list: the children of the selected taxon,
    /// or the roots if no known taxon is selected.
    pub fn active_children(&self) -> &[&'c Taxon] {
        &self.active_children
    }

    /// Returns the ancestor path of the selection, root first.
    pub fn path(&self) -> &[&'c Taxon] {
        &self.path
    }

    /// Returns the catalog this navigator browses.
    pub fn catalog(&self) -> &'c TaxonCatalog {
        self.catalog
    }

    /// Recomputes all derived state from the selection.
    fn derive(&mut self) {
        let catalog = self.catalog;
        match self.selected() {
            Some(taxon) => {
                self.active_children = catalog.children_of(Some(&taxon.id));
                self.path = catalog.ancestor_path(&taxon.id);
            }
            // Unknown ids have no path either
            None => {
                self.active_children = catalog.children_of(None);
                self.path = Vec::new();
            }
        }
    }
}
