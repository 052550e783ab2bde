//! Error types for catalog construction and loading.
//!
//! A [TaxonCatalog](crate::model::TaxonCatalog) is only ever handed out after
//! validation, so every structural problem of the taxon data surfaces here,
//! once, when the catalog is built.

use crate::model::level::TaxonomicLevel;
use crate::model::taxon::TaxonId;
use thiserror::Error;

// =#========================================================================#=
// CATALOG ERROR
// =#========================================================================#=
/// Errors that reject a catalog at construction or load time.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog contains no taxa at all.
    #[error("Catalog contains no taxa")]
    Empty,

    /// A taxon has an empty id, which is reserved for "no selection".
    #[error("Taxon '{0}' has an empty id")]
    EmptyId(String),

    /// Two taxa share the same id.
    #[error("Duplicate taxon id '{0}'")]
    DuplicateId(TaxonId),

    /// A taxon references a parent that is not part of the catalog.
    #[error("Taxon '{taxon}' references unknown parent '{parent}'")]
    DanglingParent {
        /// Id of the referencing taxon
        taxon: TaxonId,
        /// Missing parent id
        parent: TaxonId,
    },

    /// Following parent references from a taxon never reaches a root.
    #[error("Taxon '{0}' is part of a parent cycle")]
    Cycle(TaxonId),

    /// A taxon is not strictly finer than its parent.
    #[error(
        "Taxon '{taxon}' ({}) is not finer than its parent '{parent}' ({})",
        .level.as_str(),
        .parent_level.as_str()
    )]
    LevelOrder {
        /// Id of the offending child
        taxon: TaxonId,
        /// Level of the child
        level: TaxonomicLevel,
        /// Id of its parent
        parent: TaxonId,
        /// Level of the parent
        parent_level: TaxonomicLevel,
    },

    /// Reading or writing a catalog file failed.
    #[error("IO error - {0}")]
    Io(#[from] std::io::Error),

    /// A catalog file is not valid JSON for the taxon schema.
    #[error("Invalid catalog JSON - {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Returns the id of the taxon the error is about, if any.
    pub fn taxon_id(&self) -> Option<&str> {
        match self {
            CatalogError::DuplicateId(id) | CatalogError::Cycle(id) => Some(id),
            CatalogError::DanglingParent { taxon, .. } | CatalogError::LevelOrder { taxon, .. } => {
                Some(taxon)
            }
            CatalogError::Empty
            | CatalogError::EmptyId(_)
            | CatalogError::Io(_)
            | CatalogError::Json(_) => None,
        }
    }
}
