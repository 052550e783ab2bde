//! Text views of the catalog browser.
//!
//! Each view borrows what it shows and renders through [fmt::Display]:
//! - [Breadcrumb]: path from the top level to the selection
//! - [TaxonList]: one line per taxon
//! - [TaxonDetail]: a taxon with its display lists and related taxa
//! - [SearchResults]: outcome of a search, nothing if inactive

use crate::model::{RelatedTaxa, Taxon};
use crate::state::SearchOutcome;
use std::fmt;

/// Label of the top-level entry of a breadcrumb.
pub const HOME_LABEL: &str = "Главная";

/// Separator between breadcrumb entries.
pub const BREADCRUMB_SEPARATOR: &str = " › ";

/// Maximal number of siblings listed in a detail view.
pub const MAX_LISTED_SIBLINGS: usize = 8;

// =#========================================================================#=
// BREADCRUMB
// =#========================================================================#=
/// Breadcrumb of an ancestor path, e.g. `Главная › Эукариоты › Животные`.
///
/// Renders nothing for an empty path.
pub struct Breadcrumb<'a> {
    path: &'a [&'a Taxon],
}

impl<'a> Breadcrumb<'a> {
    pub fn new(path: &'a [&'a Taxon]) -> Self {
        Breadcrumb { path }
    }
}

impl fmt::Display for Breadcrumb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            return Ok(());
        }
        f.write_str(HOME_LABEL)?;
        for taxon in self.path {
            write!(f, "{BREADCRUMB_SEPARATOR}{}", taxon.name)?;
        }
        Ok(())
    }
}

// =#========================================================================#=
// TAXON LIST
// =#========================================================================#=
/// List of taxa, one per line: `- name (latin name) [level] id=<id>`.
pub struct TaxonList<'a> {
    taxa: &'a [&'a Taxon],
}

impl<'a> TaxonList<'a> {
    pub fn new(taxa: &'a [&'a Taxon]) -> Self {
        TaxonList { taxa }
    }
}

impl fmt::Display for TaxonList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for taxon in self.taxa {
            write_list_line(f, taxon)?;
        }
        Ok(())
    }
}

fn write_list_line(f: &mut fmt::Formatter, taxon: &Taxon) -> fmt::Result {
    writeln!(
        f,
        "- {} ({}) [{}] id={}",
        taxon.name, taxon.latin_name, taxon.level, taxon.id
    )
}

// =#========================================================================#=
// TAXON DETAIL
// =#========================================================================#=
/// Detail view of a taxon: header, description, characteristics, examples,
/// subdivisions, and the related block (children, siblings, parent).
///
/// # Example Output
/// ```text
/// Пантера (Panthera) [Род]
/// Род крупных диких кошек, включающий тигров, львов, ягуаров и леопардов.
///
/// Характеристики:
///   - Крупный размер
///   ...
///
/// Подразделы:
/// - Лев (Panthera leo) [Вид] id=panthera_leo
///
/// Продолжить изучение:
///   Подразделы Пантера: Лев
///   Относится к: Кошачьи (Felidae) [Семейство] id=felidae
/// ```
pub struct TaxonDetail<'a> {
    related: &'a RelatedTaxa<'a>,
}

impl<'a> TaxonDetail<'a> {
    pub fn new(related: &'a RelatedTaxa<'a>) -> Self {
        TaxonDetail { related }
    }
}

impl fmt::Display for TaxonDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let related = self.related;
        let taxon = related.taxon;

        writeln!(f, "{} ({}) [{}]", taxon.name, taxon.latin_name, taxon.level)?;
        if !taxon.description.is_empty() {
            writeln!(f, "{}", taxon.description)?;
        }

        write_bullets(f, "Характеристики", taxon.characteristics())?;
        write_bullets(f, "Примеры", taxon.examples())?;

        if !related.children.is_empty() {
            writeln!(f)?;
            writeln!(f, "Подразделы:")?;
            for child in &related.children {
                write_list_line(f, child)?;
            }
        }

        if related.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "Продолжить изучение:")?;
        if !related.children.is_empty() {
            writeln!(f, "  Подразделы {}: {}", taxon.name, join_names(&related.children))?;
        }
        if !related.siblings.is_empty() {
            let parent_prefix = related
                .parent
                .map(|parent| format!("{} → ", parent.name))
                .unwrap_or_default();
            let listed = related.siblings.len().min(MAX_LISTED_SIBLINGS);
            write!(
                f,
                "  Другие {}{}: {}",
                parent_prefix,
                taxon.level.label().to_lowercase(),
                join_names(&related.siblings[..listed])
            )?;
            if related.siblings.len() > listed {
                write!(f, " +{}", related.siblings.len() - listed)?;
            }
            writeln!(f)?;
        }
        if let Some(parent) = related.parent {
            writeln!(
                f,
                "  Относится к: {} ({}) [{}] id={}",
                parent.name, parent.latin_name, parent.level, parent.id
            )?;
        }
        Ok(())
    }
}

fn write_bullets(f: &mut fmt::Formatter, title: &str, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "{title}:")?;
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

fn join_names(taxa: &[&Taxon]) -> String {
    taxa.iter()
        .map(|taxon| taxon.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

// =#========================================================================#=
// SEARCH RESULTS
// =#========================================================================#=
/// Search result view; renders nothing while no search is active, so that
/// "not searching" and "nothing found" stay distinguishable.
pub struct SearchResults<'a> {
    outcome: &'a SearchOutcome<'a>,
}

impl<'a> SearchResults<'a> {
    pub fn new(outcome: &'a SearchOutcome<'a>) -> Self {
        SearchResults { outcome }
    }
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.outcome {
            SearchOutcome::Inactive => Ok(()),
            SearchOutcome::Active(matches) if matches.is_empty() => {
                writeln!(f, "По вашему запросу ничего не найдено")
            }
            SearchOutcome::Active(matches) => {
                writeln!(f, "Найдено результатов: {}", matches.len())?;
                write!(f, "{}", TaxonList::new(matches))
            }
        }
    }
}
