//! Taxometry is a library to browse a catalog of biological taxa.
//!
//! A catalog is a forest of taxa (domains, kingdoms, ..., species), each
//! naming its parent by id. This crate validates such catalogs and offers
//! the operations of a catalog browser on top of them.
//! Core functionality provided:
//! - Model: [TaxonCatalog] stores taxa in an arena and answers hierarchy
//!   queries (children, ancestor path, related taxa), see [crate::model].
//! - Validation: [CatalogBuilder](model::CatalogBuilder) rejects duplicate
//!   ids, dangling parents, cycles and levels that do not get finer.
//! - State: selection with derived listing and breadcrumb, expand/collapse
//!   flags of tree views, and name search, see [crate::state].
//! - Rendering: plain-text trees, lists, breadcrumbs and detail views, see
//!   [crate::render].
//! - IO: JSON catalog files and shareable `?taxon=<id>` locations, see
//!   [crate::io].
//!
//! A sample catalog of 18 taxa (from the three domains down to
//! *Homo sapiens* and *Panthera leo*) is compiled into the crate.
//!
//! # Usage patterns
//! 1. Quick access: [sample_catalog] and [load_catalog_file].
//! 2. Build your own catalog with [CatalogBuilder](model::CatalogBuilder).
//!
//! ## Example
//! ```
//! use taxometry::sample_catalog;
//! use taxometry::state::Navigator;
//! use taxometry::render::Breadcrumb;
//!
//! let catalog = sample_catalog()?;
//! let navigator = Navigator::with_selection(&catalog, "homo");
//!
//! assert_eq!(navigator.active_children()[0].latin_name, "Homo sapiens");
//! assert_eq!(
//!     Breadcrumb::new(navigator.path()).to_string(),
//!     "Главная › Эукариоты › Животные › Хордовые › Млекопитающие › Приматы › Гоминиды › Человек"
//! );
//! # Ok::<(), taxometry::model::CatalogError>(())
//! ```
//!
//! ## Example Custom Catalog
//! ```
//! use taxometry::model::{CatalogBuilder, Taxon, TaxonomicLevel};
//!
//! let catalog = CatalogBuilder::new()
//!     .with_taxon(Taxon::new("felidae", "Кошачьи", "Felidae", TaxonomicLevel::Family))
//!     .with_taxon(
//!         Taxon::new("panthera", "Пантера", "Panthera", TaxonomicLevel::Genus)
//!             .with_parent("felidae"),
//!     )
//!     .build()?;
//!
//! assert_eq!(catalog.children_of(Some("felidae")).len(), 1);
//! # Ok::<(), taxometry::model::CatalogError>(())
//! ```

pub mod io;
pub mod model;
pub mod render;
pub mod state;

use crate::model::CatalogError;
use crate::model::TaxonCatalog;
use std::path::Path;

// ============================================================================
// Quick Catalog API
// ============================================================================
/// Builds the sample catalog compiled into the crate.
///
/// See [`TaxonCatalog::sample`] for full documentation.
pub fn sample_catalog() -> Result<TaxonCatalog, CatalogError> {
    TaxonCatalog::sample()
}

/// Loads and validates a catalog from a JSON file.
///
/// See [`io::json::load_catalog_file`] for full documentation.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<TaxonCatalog, CatalogError> {
    io::json::load_catalog_file(path)
}
