//! Overpass API client.

use crate::extract::OverpassResponse;
use anyhow::{Context, Result};

/// Public Overpass API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default server-side query timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 1800;

/// Build an Overpass QL query fetching all address-tagged elements in an
/// area, matched by its English name.
pub fn build_query(area: &str, timeout_secs: u32) -> String {
    let mut clauses = String::new();
    for element in ["node", "way", "relation"] {
        for tag in ["addr:street", "addr:place", "addr:housenumber", "addr:full"] {
            clauses.push_str(&format!("  {element}[\"{tag}\"](area.searchArea);\n"));
        }
    }

    format!(
        "[out:json][timeout:{timeout_secs}];\n\
         area[\"name:en\"=\"{area}\"]->.searchArea;\n\
         (\n{clauses});\n\
         out body;"
    )
}

/// Fetch address elements for a query from an Overpass endpoint.
pub async fn fetch_elements(endpoint: &str, query: &str) -> Result<OverpassResponse> {
    let client = reqwest::Client::new();

    let response = client
        .get(endpoint)
        .query(&[("data", query)])
        .send()
        .await
        .with_context(|| format!("Failed to reach Overpass endpoint: {endpoint}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("Overpass request failed with status {status}");
    }

    let bytes = response
        .bytes()
        .await
        .context("Failed to read Overpass response body")?;

    tracing::debug!("Fetched {} bytes from {}", bytes.len(), endpoint);

    let parsed: OverpassResponse =
        serde_json::from_slice(&bytes).context("Failed to parse Overpass JSON response")?;

    tracing::info!("Overpass returned {} elements", parsed.elements.len());
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_shape() {
        let query = build_query("Egypt", 1800);

        assert!(query.starts_with("[out:json][timeout:1800];"));
        assert!(query.contains("area[\"name:en\"=\"Egypt\"]->.searchArea;"));
        assert!(query.contains("node[\"addr:street\"](area.searchArea);"));
        assert!(query.contains("way[\"addr:full\"](area.searchArea);"));
        assert!(query.contains("relation[\"addr:housenumber\"](area.searchArea);"));
        assert!(query.trim_end().ends_with("out body;"));

        // 3 element kinds x 4 address tags
        assert_eq!(query.matches("(area.searchArea);").count(), 12);
    }

    #[test]
    fn test_build_query_custom_area() {
        let query = build_query("Jordan", 60);
        assert!(query.contains("[timeout:60]"));
        assert!(query.contains("\"name:en\"=\"Jordan\""));
    }
}
