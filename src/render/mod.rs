//! Plain-text rendering of catalog views.
//!
//! - [tree]: collapsible tree surfaces ([TreeView]), the full tree page and
//!   the compact side tree
//! - [page]: breadcrumb, taxon lists, detail view and search results, each a
//!   borrowing [Display](std::fmt::Display) type
//!
//! Renderers never change state; they only read a catalog and the state
//! types of [crate::state].

pub mod page;
pub mod tree;

pub use page::{Breadcrumb, SearchResults, TaxonDetail, TaxonList};
pub use tree::{NodeToggle, TreeLine, TreeView};
