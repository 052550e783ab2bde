//! Data model of the taxon catalog.
//!
//! # Catalog representation
//! All taxa live in a [TaxonCatalog], which uses the arena pattern: taxa are
//! stored in insertion order and referenced by [TaxonIndex]. Each [Taxon]
//! names its parent by [TaxonId]; the catalog resolves those references once
//! and keeps parent and child index lists, so that the queries of
//! [query] need no scans.
//!
//! # Building catalogs
//! Catalogs are only created through [CatalogBuilder], which validates the
//! taxa (unique ids, resolvable parents, no cycles, levels getting finer
//! towards the leaves) and reports a [CatalogError] otherwise:
//!
//! - [`TaxonCatalog::sample`] builds the data compiled into the crate
//! - [`crate::io::json`] builds catalogs from JSON files
//!
//! # Levels
//! [TaxonomicLevel] is ordered from [Domain](TaxonomicLevel::Domain) (coarse)
//! to [Species](TaxonomicLevel::Species) (fine).

pub mod catalog;
pub mod catalog_builder;
pub mod catalog_error;
pub mod level;
pub mod query;
pub(crate) mod sample_data;
pub mod taxon;

pub use catalog::PreOrderIter;
pub use catalog::TaxonCatalog;
pub use catalog_builder::CatalogBuilder;
pub use catalog_error::CatalogError;
pub use level::TaxonomicLevel;
pub use query::AncestorIter;
pub use query::RelatedTaxa;
pub use taxon::Taxon;
pub use taxon::TaxonId;
pub use taxon::TaxonIndex;
