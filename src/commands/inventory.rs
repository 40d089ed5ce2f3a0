use std::path::Path;

use anyhow::Result;
use tracing::{info, warn};

use supergroups::model::{SourceEntry, SourceInventory};
use supergroups::table::{
    DataSource, DiscoveredSources, FsDataSource, split_csv_lines, strip_bom, table_lines,
};
use supergroups::util::{now_utc_string, read_bytes, sha256_hex, write_json_pretty};

use crate::cli::InventoryArgs;

pub fn run(args: InventoryArgs) -> Result<()> {
    let inventory = build_inventory(&args.data_dir)?;

    log_inventory(&inventory);

    if args.dry_run {
        info!(source = %inventory.source_directory, "inventory dry-run complete");
        return Ok(());
    }

    let manifest_path = args
        .manifest_path
        .unwrap_or_else(|| args.cache_root.join("manifests").join("source_inventory.json"));

    write_json_pretty(&manifest_path, &inventory)?;
    info!(path = %manifest_path.display(), "wrote source inventory manifest");

    Ok(())
}

/// Describes which files in `data_dir` feed the table and what they hash to.
pub fn build_inventory(data_dir: &Path) -> Result<SourceInventory> {
    let listing = FsDataSource.list_files(data_dir)?;
    let discovered = DiscoveredSources::from_listing(&listing);

    let mut table_line_count = 0;
    let table_source = match discovered.table.as_deref() {
        Some(filename) => {
            let (entry, text) = describe_source(data_dir, filename)?;
            table_line_count = table_lines(strip_bom(&text)).len();
            Some(entry)
        }
        None => None,
    };

    let lookup_source = match discovered.lookup.as_deref() {
        Some(filename) => Some(describe_source(data_dir, filename)?.0),
        None => None,
    };

    Ok(SourceInventory {
        manifest_version: 1,
        generated_at: now_utc_string(),
        source_directory: data_dir.display().to_string(),
        table_source,
        lookup_source,
        table_line_count,
    })
}

/// Hashes the raw bytes and returns the entry with the decoded text.
fn describe_source(data_dir: &Path, filename: &str) -> Result<(SourceEntry, String)> {
    let bytes = read_bytes(&data_dir.join(filename))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();

    let entry = SourceEntry {
        filename: filename.to_string(),
        sha256: sha256_hex(&bytes),
        line_count: non_blank_lines(&text),
    };
    Ok((entry, text))
}

fn non_blank_lines(text: &str) -> usize {
    split_csv_lines(text)
        .iter()
        .filter(|line| !line.trim().is_empty())
        .count()
}

fn log_inventory(inventory: &SourceInventory) {
    match &inventory.table_source {
        Some(entry) => info!(
            filename = %entry.filename,
            sha256 = %entry.sha256,
            lines = entry.line_count,
            table_lines = inventory.table_line_count,
            "table source"
        ),
        None => warn!(source = %inventory.source_directory, "no markdown table source"),
    }

    match &inventory.lookup_source {
        Some(entry) => info!(
            filename = %entry.filename,
            sha256 = %entry.sha256,
            lines = entry.line_count,
            "vision lookup source"
        ),
        None => info!(source = %inventory.source_directory, "no csv lookup source"),
    }
}
