//! Search over taxon names.
//!
//! [search] matches a query case-insensitively as substring of a taxon's
//! `name` or `latin_name`. A blank query is not a search at all: it yields
//! [`SearchOutcome::Inactive`], which renderers can tell apart from a search
//! without matches. Whitespace only decides whether a search is active; a
//! non-blank query is matched as typed, spaces included.

use crate::model::Taxon;
use crate::state::navigation::Navigator;
use tracing::debug;

// =#========================================================================#=
// SEARCH OUTCOME
// =#========================================================================#=
/// Result of a search.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchOutcome<'a> {
    /// No search is active (blank query).
    #[default]
    Inactive,
    /// A search ran; matches in corpus order, possibly none.
    Active(Vec<&'a Taxon>),
}

impl<'a> SearchOutcome<'a> {
    /// Returns `true` if a search ran.
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Active(_))
    }

    /// Returns the matches, empty if inactive.
    pub fn matches(&self) -> &[&'a Taxon] {
        match self {
            SearchOutcome::Inactive => &[],
            SearchOutcome::Active(matches) => matches,
        }
    }

    /// Returns the number of matches, `0` if inactive.
    pub fn num_matches(&self) -> usize {
        self.matches().len()
    }
}

/// Searches `corpus` for taxa whose name or latin name contains `query`,
/// ignoring case. A blank query yields [`SearchOutcome::Inactive`].
///
/// # Example
/// ```
/// use taxometry::model::TaxonCatalog;
/// use taxometry::state::{search, SearchOutcome};
///
/// let catalog = TaxonCatalog::sample()?;
/// let outcome = search("PANTHERA", &catalog);
/// assert_eq!(outcome.num_matches(), 2);
///
/// // The trailing space is part of the query
/// assert_eq!(search("panthera ", &catalog).num_matches(), 1);
///
/// assert_eq!(search("   ", &catalog), SearchOutcome::Inactive);
/// # Ok::<(), taxometry::model::CatalogError>(())
/// ```
pub fn search<'a, I>(query: &str, corpus: I) -> SearchOutcome<'a>
where
    I: IntoIterator<Item = &'a Taxon>,
{
    if query.trim().is_empty() {
        return SearchOutcome::Inactive;
    }

    let needle = query.to_lowercase();
    let matches: Vec<&Taxon> = corpus
        .into_iter()
        .filter(|taxon| taxon.matches_lowercase(&needle))
        .collect();
    debug!(query, matches = matches.len(), "searched taxa");
    SearchOutcome::Active(matches)
}

// =#========================================================================#=
// SEARCH STATE
// =#========================================================================#=
/// Search box state: the query text and the outcome of its last submission.
///
/// Editing the query does not search; [`submit`](SearchState::submit) does.
#[derive(Debug, Clone, Default)]
pub struct SearchState<'a> {
    query: String,
    outcome: SearchOutcome<'a>,
}

impl<'a> SearchState<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the query text without searching.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Returns the current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Runs the current query against `corpus` and returns the outcome.
    pub fn submit<I>(&mut self, corpus: I) -> &SearchOutcome<'a>
    where
        I: IntoIterator<Item = &'a Taxon>,
    {
        self.outcome = search(&self.query, corpus);
        &self.outcome
    }

    /// Returns the outcome of the last submission.
    pub fn outcome(&self) -> &SearchOutcome<'a> {
        &self.outcome
    }

    /// Clears query and outcome.
    pub fn reset(&mut self) {
        self.query.clear();
        self.outcome = SearchOutcome::Inactive;
    }

    /// Selects `id` in `navigator` and resets the search,
    /// as picking a search result does.
    pub fn choose(&mut self, id: &str, navigator: &mut Navigator<'_>) {
        navigator.select(id);
        self.reset();
    }
}
