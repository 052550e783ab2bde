use pretty_assertions::assert_eq;
use taxometry::model::{CatalogBuilder, CatalogError, Taxon, TaxonCatalog, TaxonomicLevel};

fn taxon(id: &str, level: TaxonomicLevel) -> Taxon {
    Taxon::new(id, id, id, level)
}

fn child(id: &str, level: TaxonomicLevel, parent: &str) -> Taxon {
    taxon(id, level).with_parent(parent)
}

// ============= Sample Catalog Tests =============

#[test]
fn test_sample_catalog_counts() {
    let catalog = TaxonCatalog::sample().unwrap();

    assert_eq!(catalog.len(), 18);
    assert!(!catalog.is_empty());
    assert_eq!(catalog.num_roots(), 3);
    // bacteria, archaea, plantae, fungi, arthropoda, aves, and both species
    assert_eq!(catalog.num_leaves(), 8);
    assert_eq!(catalog.max_depth(), 7);
}

#[test]
fn test_sample_catalog_roots_in_insertion_order() {
    let catalog = TaxonCatalog::sample().unwrap();
    let roots: Vec<&str> = catalog.roots().map(|t| t.latin_name.as_str()).collect();
    assert_eq!(roots, ["Bacteria", "Archaea", "Eukarya"]);
}

#[test]
fn test_sample_catalog_depths() {
    let catalog = TaxonCatalog::sample().unwrap();

    assert_eq!(catalog.depth_of("eukarya"), Some(0));
    assert_eq!(catalog.depth_of("mammalia"), Some(3));
    assert_eq!(catalog.depth_of("homo_sapiens"), Some(7));
    assert_eq!(catalog.depth_of("does_not_exist"), None);
}

#[test]
fn test_every_parent_resolves_and_is_coarser() {
    let catalog = TaxonCatalog::sample().unwrap();

    for taxon in &catalog {
        if let Some(parent_id) = taxon.parent_id() {
            let parent = catalog.by_id(parent_id).unwrap();
            assert!(parent.level < taxon.level, "{} vs {}", parent.id, taxon.id);
        }
    }
}

#[test]
fn test_pre_order_visits_parents_first() {
    let catalog = TaxonCatalog::sample().unwrap();
    let order: Vec<&str> = catalog.pre_order_iter().map(|t| t.id.as_str()).collect();

    assert_eq!(order.len(), catalog.len());
    assert_eq!(
        &order[..8],
        ["bacteria", "archaea", "eukarya", "animalia", "chordata", "mammalia", "primates", "hominidae"]
    );
    assert_eq!(order.last(), Some(&"fungi"));
}

#[test]
fn test_index_access() {
    let catalog = TaxonCatalog::sample().unwrap();
    let index = catalog.index_of("felidae").unwrap();

    assert_eq!(catalog[index].latin_name, "Felidae");
    assert_eq!(catalog.get(index), Some(&catalog[index]));
    assert_eq!(catalog.get(catalog.len()), None);
}

// ============= Builder Tests =============

#[test]
fn test_builder_accepts_children_before_parents() {
    let catalog = CatalogBuilder::new()
        .with_taxon(child("felis", TaxonomicLevel::Genus, "felidae"))
        .with_taxon(taxon("felidae", TaxonomicLevel::Family))
        .build()
        .unwrap();

    let roots: Vec<&str> = catalog.roots().map(|t| t.id()).collect();
    assert_eq!(roots, ["felidae"]);
    assert_eq!(catalog.depth_of("felis"), Some(1));
}

#[test]
fn test_builder_from_iterator() {
    let builder: CatalogBuilder = [
        taxon("aves", TaxonomicLevel::Class),
        child("passeriformes", TaxonomicLevel::Order, "aves"),
    ]
    .into_iter()
    .collect();

    assert_eq!(builder.len(), 2);
    assert_eq!(builder.build().unwrap().num_leaves(), 1);
}

#[test]
fn test_builder_rejects_empty() {
    let result = CatalogBuilder::new().build();
    assert!(matches!(result, Err(CatalogError::Empty)));
}

#[test]
fn test_builder_rejects_blank_id() {
    let result = CatalogBuilder::new()
        .with_taxon(Taxon::new("  ", "Безымянный", "Innominatus", TaxonomicLevel::Domain))
        .build();
    assert!(matches!(result, Err(CatalogError::EmptyId(_))));
}

#[test]
fn test_builder_rejects_duplicate_id() {
    let err = CatalogBuilder::new()
        .with_taxon(taxon("fungi", TaxonomicLevel::Kingdom))
        .with_taxon(taxon("fungi", TaxonomicLevel::Kingdom))
        .build()
        .unwrap_err();

    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "fungi"));
    assert_eq!(err.taxon_id(), Some("fungi"));
}

#[test]
fn test_builder_rejects_dangling_parent() {
    let err = CatalogBuilder::new()
        .with_taxon(child("homo", TaxonomicLevel::Genus, "hominidae"))
        .build()
        .unwrap_err();

    match err {
        CatalogError::DanglingParent { taxon, parent } => {
            assert_eq!(taxon, "homo");
            assert_eq!(parent, "hominidae");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_builder_rejects_cycle() {
    let err = CatalogBuilder::new()
        .with_taxon(taxon("root", TaxonomicLevel::Domain))
        .with_taxon(child("a", TaxonomicLevel::Kingdom, "b"))
        .with_taxon(child("b", TaxonomicLevel::Phylum, "a"))
        .build()
        .unwrap_err();

    assert!(matches!(err, CatalogError::Cycle(_)));
}

#[test]
fn test_builder_rejects_level_not_finer() {
    let err = CatalogBuilder::new()
        .with_taxon(taxon("mammalia", TaxonomicLevel::Class))
        .with_taxon(child("chordata", TaxonomicLevel::Phylum, "mammalia"))
        .build()
        .unwrap_err();

    match err {
        CatalogError::LevelOrder {
            taxon,
            level,
            parent,
            parent_level,
        } => {
            assert_eq!(taxon, "chordata");
            assert_eq!(level, TaxonomicLevel::Phylum);
            assert_eq!(parent, "mammalia");
            assert_eq!(parent_level, TaxonomicLevel::Class);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_level_order_message_uses_rank_names() {
    let err = CatalogBuilder::new()
        .with_taxon(taxon("panthera", TaxonomicLevel::Genus))
        .with_taxon(child("felidae", TaxonomicLevel::Family, "panthera"))
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Taxon 'felidae' (Family) is not finer than its parent 'panthera' (Genus)"
    );
}

#[test]
fn test_builder_rejects_same_level() {
    let result = CatalogBuilder::new()
        .with_taxon(taxon("felidae", TaxonomicLevel::Family))
        .with_taxon(child("pantherinae", TaxonomicLevel::Family, "felidae"))
        .build();
    assert!(matches!(result, Err(CatalogError::LevelOrder { .. })));
}

#[test]
fn test_builder_accepts_skipped_ranks() {
    let catalog = CatalogBuilder::new()
        .with_taxon(taxon("eukarya", TaxonomicLevel::Domain))
        .with_taxon(child("homo_sapiens", TaxonomicLevel::Species, "eukarya"))
        .build()
        .unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_catalog_equality_follows_taxa() {
    let first = TaxonCatalog::sample().unwrap();
    let second = TaxonCatalog::sample().unwrap();
    assert_eq!(first, second);

    let other = CatalogBuilder::new()
        .with_taxon(taxon("bacteria", TaxonomicLevel::Domain))
        .build()
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn test_catalog_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TaxonCatalog>();
}
