//! Shareable locations for selections.
//!
//! A selection is mirrored into a query string of the form `?taxon=<id>`,
//! so that a view can be shared and restored. No selection maps to the empty
//! query string. Ids are percent-encoded as needed.

use url::form_urlencoded;

/// Name of the query parameter holding the selected taxon id.
pub const TAXON_PARAM: &str = "taxon";

/// Reads the selected taxon id from a query string.
///
/// The leading `?` is optional; other parameters are ignored. Returns `None`
/// if there is no non-empty `taxon` parameter; with several, the first wins.
///
/// # Example
/// ```
/// use taxometry::io::location::selection_from_query;
///
/// assert_eq!(selection_from_query("?taxon=panthera_leo").as_deref(), Some("panthera_leo"));
/// assert_eq!(selection_from_query("lang=ru&taxon=homo"), Some("homo".to_string()));
/// assert_eq!(selection_from_query("?taxon="), None);
/// assert_eq!(selection_from_query(""), None);
/// ```
pub fn selection_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TAXON_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

/// Builds the query string for a selection, `""` for no selection.
///
/// # Example
/// ```
/// use taxometry::io::location::query_for_selection;
///
/// assert_eq!(query_for_selection(Some("homo_sapiens")), "?taxon=homo_sapiens");
/// assert_eq!(query_for_selection(None), "");
/// ```
pub fn query_for_selection(selection: Option<&str>) -> String {
    match selection.filter(|id| !id.trim().is_empty()) {
        None => String::new(),
        Some(id) => {
            let encoded = form_urlencoded::Serializer::new(String::new())
                .append_pair(TAXON_PARAM, id)
                .finish();
            format!("?{encoded}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_taxon_param_wins() {
        assert_eq!(
            selection_from_query("taxon=felidae&taxon=panthera").as_deref(),
            Some("felidae")
        );
    }

    #[test]
    fn test_encoded_id_round_trip() {
        let query = query_for_selection(Some("homo sapiens"));
        assert_eq!(query, "?taxon=homo+sapiens");
        assert_eq!(selection_from_query(&query).as_deref(), Some("homo sapiens"));
    }

    #[test]
    fn test_blank_selection_has_no_query() {
        assert_eq!(query_for_selection(Some("  ")), "");
    }
}
