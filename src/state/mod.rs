//! Interactive state on top of a catalog.
//!
//! - [Navigator]: current selection, listed taxa and breadcrumb path
//! - [ExpansionState] + [ExpandPolicy]: expand/collapse flags of a tree view
//! - [search] + [SearchState]: name search with an explicit inactive state
//!
//! All state borrows the catalog immutably and is owned by a single
//! controller; each event (select, toggle, submit) is handled completely
//! before the next one.

pub mod expansion;
pub mod navigation;
pub mod search;

pub use expansion::{ExpandPolicy, ExpansionState};
pub use navigation::Navigator;
pub use search::{SearchOutcome, SearchState, search};
