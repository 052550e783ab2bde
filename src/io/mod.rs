//! Input and output around the catalog.
//!
//! - [json]: reading and writing catalogs as JSON files
//! - [location]: mirroring a selection into a shareable `?taxon=` query string

pub mod json;
pub mod location;

pub use json::{load_catalog_file, write_catalog_file};
pub use location::{query_for_selection, selection_from_query};
