//! Taxon record of the catalog.

use crate::model::level::TaxonomicLevel;
use serde::{Deserialize, Serialize};

/// Stable string identifier of a taxon, e.g. `"homo_sapiens"`.
pub type TaxonId = String;

/// Position of a taxon in a [TaxonCatalog](crate::model::TaxonCatalog) (arena).
pub type TaxonIndex = usize;

// =#========================================================================#=
// TAXON
// =#========================================================================#=
/// One node of the classification hierarchy.
///
/// # Invariants
/// Enforced once the taxon is part of a [TaxonCatalog](crate::model::TaxonCatalog):
/// - `id` is unique within the catalog
/// - `parent_id`, if set, names another taxon of the catalog
/// - `level` is strictly finer than the parent's level
///
/// `image_url`, `characteristics` and `examples` are display data only
/// and never interpreted.
///
/// # Example
/// ```
/// use taxometry::model::{Taxon, TaxonomicLevel};
///
/// let lion = Taxon::new("panthera_leo", "Лев", "Panthera leo", TaxonomicLevel::Species)
///     .with_parent("panthera")
///     .with_characteristics(["Социальное поведение", "Групповая охота"]);
///
/// assert_eq!(lion.parent_id(), Some("panthera"));
/// assert!(!lion.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxon {
    pub id: TaxonId,
    pub name: String,
    pub latin_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_id: Option<TaxonId>,
    pub level: TaxonomicLevel,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

impl Taxon {
    /// Creates a root taxon without description, image or display lists.
    pub fn new(
        id: impl Into<TaxonId>,
        name: impl Into<String>,
        latin_name: impl Into<String>,
        level: TaxonomicLevel,
    ) -> Self {
        Taxon {
            id: id.into(),
            name: name.into(),
            latin_name: latin_name.into(),
            description: String::new(),
            parent_id: None,
            level,
            image_url: String::new(),
            characteristics: None,
            examples: None,
        }
    }

    /// Attaches this taxon below `parent_id`.
    pub fn with_parent(mut self, parent_id: impl Into<TaxonId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_characteristics<I, S>(mut self, characteristics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characteristics = Some(characteristics.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(examples.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the id of this taxon.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the parent id, or `None` for a root taxon.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    /// Returns `true` if this taxon has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Returns the characteristics, empty if none were given.
    pub fn characteristics(&self) -> &[String] {
        self.characteristics.as_deref().unwrap_or_default()
    }

    /// Returns the examples, empty if none were given.
    pub fn examples(&self) -> &[String] {
        self.examples.as_deref().unwrap_or_default()
    }

    /// Returns `true` if `name` or `latin_name` contains `needle`,
    /// where `needle` is expected to be lowercase already.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.latin_name.to_lowercase().contains(needle)
    }
}
