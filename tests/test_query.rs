use pretty_assertions::assert_eq;
use taxometry::model::{Taxon, TaxonCatalog};

fn ids<'a>(taxa: impl IntoIterator<Item = &'a Taxon>) -> Vec<&'a str> {
    taxa.into_iter().map(|t| t.id.as_str()).collect()
}

// ============= children_of Tests =============

#[test]
fn test_children_of_none_are_roots() {
    let catalog = TaxonCatalog::sample().unwrap();
    let roots = catalog.children_of(None);

    let names: Vec<&str> = roots.iter().map(|t| t.latin_name.as_str()).collect();
    assert_eq!(names, ["Bacteria", "Archaea", "Eukarya"]);
    assert!(roots.iter().all(|t| t.is_root()));
}

#[test]
fn test_children_of_keep_insertion_order() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert_eq!(ids(catalog.children_of(Some("mammalia"))), ["primates", "carnivora"]);
    assert_eq!(ids(catalog.children_of(Some("chordata"))), ["mammalia", "aves"]);
}

#[test]
fn test_children_of_leaf_and_unknown_are_empty() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert!(catalog.children_of(Some("panthera_leo")).is_empty());
    assert!(catalog.children_of(Some("does_not_exist")).is_empty());
    assert!(catalog.children_of(Some("")).is_empty());
}

#[test]
fn test_children_reference_their_parent() {
    let catalog = TaxonCatalog::sample().unwrap();
    for taxon in &catalog {
        for child in catalog.children_of(Some(&taxon.id)) {
            assert_eq!(child.parent_id(), Some(taxon.id()));
        }
    }
}

#[test]
fn test_has_children() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert!(catalog.has_children("eukarya"));
    assert!(!catalog.has_children("bacteria"));
    assert!(!catalog.has_children("does_not_exist"));
}

// ============= by_id Tests =============

#[test]
fn test_by_id() {
    let catalog = TaxonCatalog::sample().unwrap();

    let lion = catalog.by_id("panthera_leo").unwrap();
    assert_eq!(lion.name, "Лев");
    assert_eq!(lion.latin_name, "Panthera leo");
    assert_eq!(lion.parent_id(), Some("panthera"));

    assert!(catalog.by_id("does_not_exist").is_none());
    assert!(catalog.by_id("").is_none());
}

#[test]
fn test_by_id_finds_every_taxon() {
    let catalog = TaxonCatalog::sample().unwrap();
    for taxon in &catalog {
        assert_eq!(catalog.by_id(&taxon.id), Some(taxon));
    }
}

// ============= ancestor_path Tests =============

#[test]
fn test_ancestor_path_of_homo_sapiens() {
    let catalog = TaxonCatalog::sample().unwrap();
    let path = catalog.ancestor_path("homo_sapiens");

    assert_eq!(
        ids(path.iter().copied()),
        ["eukarya", "animalia", "chordata", "mammalia", "primates", "hominidae", "homo", "homo_sapiens"]
    );
}

#[test]
fn test_ancestor_path_links_parents() {
    let catalog = TaxonCatalog::sample().unwrap();
    for taxon in &catalog {
        let path = catalog.ancestor_path(&taxon.id);
        assert!(path[0].is_root());
        assert_eq!(path.last().copied(), Some(taxon));
        assert_eq!(path.len(), catalog.depth_of(&taxon.id).unwrap() + 1);
        for pair in path.windows(2) {
            assert_eq!(pair[1].parent_id(), Some(pair[0].id()));
        }
    }
}

#[test]
fn test_ancestor_path_of_root_and_unknown() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert_eq!(ids(catalog.ancestor_path("archaea")), ["archaea"]);
    assert!(catalog.ancestor_path("does_not_exist").is_empty());
    assert!(catalog.ancestor_path("").is_empty());
}

#[test]
fn test_ancestors_walk_upwards() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert_eq!(
        ids(catalog.ancestors("panthera_leo").take(3)),
        ["panthera_leo", "panthera", "felidae"]
    );
    assert_eq!(catalog.ancestors("does_not_exist").count(), 0);
}

// ============= related Tests =============

#[test]
fn test_related_of_inner_taxon() {
    let catalog = TaxonCatalog::sample().unwrap();
    let related = catalog.related("chordata").unwrap();

    assert_eq!(related.taxon.id, "chordata");
    assert_eq!(ids(related.children.iter().copied()), ["mammalia", "aves"]);
    assert_eq!(ids(related.siblings.iter().copied()), ["arthropoda"]);
    assert_eq!(related.parent.map(Taxon::id), Some("animalia"));
    assert!(!related.is_empty());
}

#[test]
fn test_related_of_root_has_no_siblings() {
    let catalog = TaxonCatalog::sample().unwrap();
    let related = catalog.related("bacteria").unwrap();

    assert!(related.children.is_empty());
    assert!(related.siblings.is_empty());
    assert!(related.parent.is_none());
    assert!(related.is_empty());
}

#[test]
fn test_related_of_leaf() {
    let catalog = TaxonCatalog::sample().unwrap();
    let related = catalog.related("homo_sapiens").unwrap();

    assert!(related.children.is_empty());
    assert!(related.siblings.is_empty());
    assert_eq!(related.parent.map(Taxon::id), Some("homo"));
}

#[test]
fn test_related_of_unknown() {
    let catalog = TaxonCatalog::sample().unwrap();
    assert!(catalog.related("does_not_exist").is_none());
}

// ============= Idempotence Tests =============

#[test]
fn test_queries_are_repeatable() {
    let catalog = TaxonCatalog::sample().unwrap();
    let mut queried: Vec<&str> = catalog.iter().map(|t| t.id()).collect();
    queried.extend(["does_not_exist", ""]);

    for id in queried {
        assert_eq!(catalog.children_of(Some(id)), catalog.children_of(Some(id)), "{id}");
        assert_eq!(catalog.by_id(id), catalog.by_id(id), "{id}");
        assert_eq!(catalog.ancestor_path(id), catalog.ancestor_path(id), "{id}");
    }
    assert_eq!(catalog.children_of(None), catalog.children_of(None));
}
