//! Terminal browser for a taxon catalog.
//!
//! # Usage
//!
//! ```bash
//! # Top level, or a taxon with breadcrumb and related taxa
//! taxometry browse
//! taxometry browse --taxon panthera
//! taxometry browse --location '?taxon=homo_sapiens'
//!
//! # Full tree page, or the compact side tree
//! taxometry tree --collapse chordata
//! taxometry tree --compact --expand eukarya --expand animalia
//!
//! # Search, ancestor path
//! taxometry search пантера
//! taxometry path panthera_leo
//!
//! # Work with catalog files
//! taxometry export --out catalog.json
//! TAXOMETRY_CATALOG=catalog.json taxometry validate
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use taxometry::io::{self, query_for_selection, selection_from_query};
use taxometry::model::TaxonCatalog;
use taxometry::render::{Breadcrumb, SearchResults, TaxonDetail, TaxonList, TreeView};
use taxometry::state::{Navigator, SearchState};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "taxometry")]
#[command(version)]
#[command(about = "Browse a catalog of biological taxa")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON catalog file to use instead of the built-in sample catalog
    #[arg(long, global = true, env = "TAXOMETRY_CATALOG")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the top level, or a taxon with its breadcrumb and related taxa
    Browse {
        /// Id of the taxon to show
        #[arg(long, conflicts_with = "location")]
        taxon: Option<String>,

        /// Shared location to restore, e.g. `?taxon=panthera`
        #[arg(long)]
        location: Option<String>,
    },

    /// Show the collapsible tree
    Tree {
        /// Compact side tree instead of the full tree page
        #[arg(long)]
        compact: bool,

        /// Expand a taxon (repeatable)
        #[arg(long, value_name = "ID")]
        expand: Vec<String>,

        /// Collapse a taxon (repeatable), applied after all expansions
        #[arg(long, value_name = "ID")]
        collapse: Vec<String>,
    },

    /// Search taxa by name or latin name
    Search {
        /// Search text, case-insensitive
        query: String,
    },

    /// Show the ancestor path of a taxon, from its root down to it
    Path {
        /// Id of the taxon
        id: String,
    },

    /// Write the catalog as JSON file
    Export {
        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Load and validate the catalog, then print a summary
    Validate,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Browse { taxon, location } => {
            let selection = match (taxon, location) {
                (Some(taxon), _) => Some(taxon),
                (None, Some(location)) => selection_from_query(&location),
                (None, None) => None,
            };
            cmd_browse(&catalog, selection.as_deref());
        }
        Commands::Tree {
            compact,
            expand,
            collapse,
        } => cmd_tree(&catalog, compact, &expand, &collapse),
        Commands::Search { query } => cmd_search(&catalog, query),
        Commands::Path { id } => cmd_path(&catalog, &id),
        Commands::Export { out } => cmd_export(&catalog, &out)?,
        Commands::Validate => cmd_validate(&catalog),
    }
    Ok(())
}

/// Filter from `RUST_LOG` directives if given and valid, `warn` otherwise.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn load_catalog(path: Option<&Path>) -> Result<TaxonCatalog> {
    match path {
        Some(path) => io::load_catalog_file(path)
            .with_context(|| format!("failed to load catalog from {}", path.display())),
        None => TaxonCatalog::sample().context("built-in sample catalog is invalid"),
    }
}

// =============================================================================
// COMMANDS
// =============================================================================

fn cmd_browse(catalog: &TaxonCatalog, selection: Option<&str>) {
    let mut navigator = Navigator::new(catalog);
    if let Some(id) = selection {
        navigator.select(id);
    }

    match navigator.selected() {
        Some(taxon) => {
            println!("{}", Breadcrumb::new(navigator.path()));
            println!();
            if let Some(related) = catalog.related(&taxon.id) {
                print!("{}", TaxonDetail::new(&related));
            }
            println!();
            println!("Ссылка: {}", query_for_selection(navigator.selection()));
        }
        None => {
            if let Some(id) = navigator.selection() {
                warn!(id, "unknown taxon, showing the top level");
            }
            print!("{}", TaxonList::new(navigator.active_children()));
        }
    }
}

fn cmd_tree(catalog: &TaxonCatalog, compact: bool, expand: &[String], collapse: &[String]) {
    let mut view = if compact {
        TreeView::compact()
    } else {
        TreeView::full_page(catalog)
    };

    let changes = expand
        .iter()
        .map(|id| (id, true))
        .chain(collapse.iter().map(|id| (id, false)));
    for (id, expanded) in changes {
        if !view.set_expanded(catalog, id, expanded) {
            warn!(id = %id, "taxon is unknown or cannot be expanded in this tree");
        }
    }

    print!("{}", view.render(catalog));
}

fn cmd_search(catalog: &TaxonCatalog, query: String) {
    let mut search = SearchState::new();
    search.set_query(query);
    let outcome = search.submit(catalog);
    print!("{}", SearchResults::new(outcome));
}

fn cmd_path(catalog: &TaxonCatalog, id: &str) {
    let path = catalog.ancestor_path(id);
    if path.is_empty() {
        warn!(id, "unknown taxon");
        return;
    }
    print!("{}", TaxonList::new(&path));
}

fn cmd_export(catalog: &TaxonCatalog, out: &Path) -> Result<()> {
    io::write_catalog_file(out, catalog)
        .with_context(|| format!("failed to write catalog to {}", out.display()))?;
    println!("Exported {} taxa to {}", catalog.len(), out.display());
    Ok(())
}

fn cmd_validate(catalog: &TaxonCatalog) {
    println!("Catalog is valid");
    println!("  taxa:      {}", catalog.len());
    println!("  roots:     {}", catalog.num_roots());
    println!("  leaves:    {}", catalog.num_leaves());
    println!("  max depth: {}", catalog.max_depth());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_log_filter_can_raise_level() {
        let filter = log_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));

        let filter = log_filter(Some("taxometry=trace".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }
}
