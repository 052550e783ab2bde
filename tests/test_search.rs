use pretty_assertions::assert_eq;
use taxometry::model::{Taxon, TaxonCatalog};
use taxometry::state::{Navigator, SearchOutcome, SearchState, search};

fn ids<'a>(taxa: &[&'a Taxon]) -> Vec<&'a str> {
    taxa.iter().map(|t| t.id.as_str()).collect()
}

// ============= search Tests =============

#[test]
fn test_search_without_matches_is_active() {
    let catalog = TaxonCatalog::sample().unwrap();
    let outcome = search("lion-like-nonsense", &catalog);

    assert!(outcome.is_active());
    assert_eq!(outcome.num_matches(), 0);
    assert_eq!(outcome, SearchOutcome::Active(Vec::new()));
}

#[test]
fn test_empty_query_is_inactive() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert_eq!(search("", &catalog), SearchOutcome::Inactive);
    assert_eq!(search(" \t ", &catalog), SearchOutcome::Inactive);
    assert_eq!(search("", std::iter::empty::<&Taxon>()), SearchOutcome::Inactive);
    assert!(!search("", &catalog).is_active());
}

#[test]
fn test_search_matches_name_ignoring_case() {
    let catalog = TaxonCatalog::sample().unwrap();
    let outcome = search("ЧЕЛОВЕК", &catalog);
    assert_eq!(ids(outcome.matches()), ["homo", "homo_sapiens"]);
}

#[test]
fn test_search_matches_latin_name() {
    let catalog = TaxonCatalog::sample().unwrap();
    let outcome = search(" Sapiens", &catalog);
    assert_eq!(ids(outcome.matches()), ["homo_sapiens"]);
}

#[test]
fn test_search_keeps_inner_and_trailing_whitespace() {
    let catalog = TaxonCatalog::sample().unwrap();

    let outcome = search("panthera ", &catalog);
    assert_eq!(ids(outcome.matches()), ["panthera_leo"]);

    // Only blank queries are inactive; padding counts as typed text
    let outcome = search("  sapiens ", &catalog);
    assert!(outcome.is_active());
    assert_eq!(outcome.num_matches(), 0);
}

#[test]
fn test_search_keeps_corpus_order() {
    let catalog = TaxonCatalog::sample().unwrap();
    // "ae" appears in Archaea, Plantae, Hominidae, Felidae
    let outcome = search("ae", &catalog);
    assert_eq!(ids(outcome.matches()), ["archaea", "plantae", "hominidae", "felidae"]);
}

#[test]
fn test_search_matches_satisfy_predicate() {
    let catalog = TaxonCatalog::sample().unwrap();
    let query = "ia";
    let outcome = search(query, &catalog);

    assert!(outcome.num_matches() > 0);
    for taxon in &catalog {
        let expected = taxon.name.to_lowercase().contains(query)
            || taxon.latin_name.to_lowercase().contains(query);
        assert_eq!(outcome.matches().contains(&taxon), expected, "{}", taxon.id);
    }
}

#[test]
fn test_search_over_subset() {
    let catalog = TaxonCatalog::sample().unwrap();
    let children = catalog.children_of(Some("mammalia"));
    let outcome = search("a", children.iter().copied());
    assert_eq!(ids(outcome.matches()), ["primates", "carnivora"]);
}

// ============= SearchState Tests =============

#[test]
fn test_state_searches_on_submit_only() {
    let catalog = TaxonCatalog::sample().unwrap();
    let mut state = SearchState::new();

    state.set_query("пантера");
    assert_eq!(state.query(), "пантера");
    assert!(!state.outcome().is_active());

    let outcome = state.submit(&catalog);
    assert_eq!(ids(outcome.matches()), ["panthera"]);
    assert!(state.outcome().is_active());
}

#[test]
fn test_state_choose_selects_and_resets() {
    let catalog = TaxonCatalog::sample().unwrap();
    let mut navigator = Navigator::new(&catalog);
    let mut state = SearchState::new();

    state.set_query("leo");
    state.submit(&catalog);
    let chosen = state.outcome().matches()[0].id.clone();
    state.choose(&chosen, &mut navigator);

    assert_eq!(navigator.selection(), Some("panthera_leo"));
    assert_eq!(navigator.path().len(), 8);
    assert_eq!(state.query(), "");
    assert_eq!(state.outcome(), &SearchOutcome::Inactive);
}

#[test]
fn test_state_reset() {
    let catalog = TaxonCatalog::sample().unwrap();
    let mut state = SearchState::new();
    state.set_query("aves");
    state.submit(&catalog);
    state.reset();

    assert_eq!(state.query(), "");
    assert!(!state.outcome().is_active());
}
