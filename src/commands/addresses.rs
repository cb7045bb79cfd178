//! Address harvesting command handler.

use anyhow::Context;
use std::path::Path;
use synth_osm::{build_query, extract_addresses, fetch_elements, write_addresses_csv};

/// Run the addresses command: fetch, extract, and write addresses.
pub async fn run(area: &str, endpoint: &str, timeout: u32, output: &Path) -> anyhow::Result<()> {
    tracing::info!("Querying Overpass for addresses in '{area}'...");

    let query = build_query(area, timeout);
    let response = fetch_elements(endpoint, &query)
        .await
        .with_context(|| format!("Overpass query for '{area}' failed"))?;

    let addresses = extract_addresses(&response);
    if addresses.is_empty() {
        tracing::warn!("No addresses found for '{area}'");
    }

    let written = write_addresses_csv(output, &addresses)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Wrote {} addresses to {}", written, output.display());
    Ok(())
}
