//! JSON catalog files.
//!
//! A catalog file is a JSON array of taxon objects in catalog order:
//!
//! ```json
//! [
//!   {
//!     "id": "eukarya",
//!     "name": "Эукариоты",
//!     "latinName": "Eukarya",
//!     "description": "Домен живых организмов, клетки которых содержат ядро.",
//!     "parentId": null,
//!     "level": "Domain",
//!     "imageUrl": "https://images.example.org/eukarya.jpg",
//!     "characteristics": ["Имеют клеточное ядро"]
//!   }
//! ]
//! ```
//!
//! `description`, `parentId` and `imageUrl` may be omitted; `characteristics`
//! and `examples` are optional lists. Every read goes through
//! [CatalogBuilder], so files with structural problems are rejected.

use crate::model::{CatalogBuilder, CatalogError, Taxon, TaxonCatalog};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;

// ============================================================================
// Reading (pub)
// ============================================================================
/// Reads and validates a catalog from JSON.
///
/// # Errors
/// [`CatalogError::Json`] if the input is not a valid taxon array,
/// any validation error of [`CatalogBuilder::build`] otherwise.
pub fn read_catalog<R: Read>(reader: R) -> Result<TaxonCatalog, CatalogError> {
    let taxa: Vec<Taxon> = serde_json::from_reader(reader)?;
    CatalogBuilder::from_taxa(taxa).build()
}

/// Parses and validates a catalog from a JSON string.
///
/// # Example
/// ```
/// use taxometry::io::json::parse_catalog_str;
///
/// let catalog = parse_catalog_str(r#"[
///     {"id": "fungi", "name": "Грибы", "latinName": "Fungi", "level": "Kingdom"}
/// ]"#)?;
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), taxometry::model::CatalogError>(())
/// ```
pub fn parse_catalog_str(json: &str) -> Result<TaxonCatalog, CatalogError> {
    let taxa: Vec<Taxon> = serde_json::from_str(json)?;
    CatalogBuilder::from_taxa(taxa).build()
}

/// Loads and validates a catalog from a JSON file.
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<TaxonCatalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog(BufReader::new(file))?;
    info!(path = %path.display(), taxa = catalog.len(), "loaded catalog file");
    Ok(catalog)
}

// ============================================================================
// Writing (pub)
// ============================================================================
/// Writes `catalog` as pretty-printed JSON array, in catalog order.
pub fn write_catalog<W: Write>(writer: W, catalog: &TaxonCatalog) -> Result<(), CatalogError> {
    serde_json::to_writer_pretty(writer, catalog.taxa())?;
    Ok(())
}

/// Writes `catalog` to a JSON file, replacing its content.
pub fn write_catalog_file<P: AsRef<Path>>(path: P, catalog: &TaxonCatalog) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_catalog(&mut writer, catalog)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!(path = %path.display(), taxa = catalog.len(), "wrote catalog file");
    Ok(())
}
