//! Address extraction from Overpass API responses.

use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};

/// Top-level Overpass API JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    /// Matched elements (nodes, ways, relations)
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

/// A single OSM element. Only the tags matter here.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassElement {
    /// OSM tags, `addr:*` among them
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Assemble a display address from an element's tags.
///
/// `addr:full` wins outright when present. Otherwise the non-empty parts
/// among house number, street, place, district, and city are joined with
/// ", " in that order. Elements with no usable parts yield `None`.
pub fn assemble_address(tags: &HashMap<String, String>) -> Option<String> {
    let get = |key: &str| tags.get(key).map(String::as_str).unwrap_or("");

    let full = get("addr:full");
    if !full.is_empty() {
        return Some(full.to_string());
    }

    let parts: Vec<&str> = [
        get("addr:housenumber"),
        get("addr:street"),
        get("addr:place"),
        get("addr:district"),
        get("addr:city"),
    ]
    .into_iter()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Extract deduplicated, sorted addresses from an Overpass response.
pub fn extract_addresses(response: &OverpassResponse) -> Vec<String> {
    let unique: BTreeSet<String> = response
        .elements
        .iter()
        .filter_map(|element| assemble_address(&element.tags))
        .collect();

    unique.into_iter().collect()
}
