use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use supergroups::model::ExportManifest;
use supergroups::table::GroupsCache;
use supergroups::util::{now_utc_string, utc_compact_string, write_json_pretty};

use crate::cli::ExportArgs;
use crate::commands::inventory::build_inventory;

pub fn run(args: ExportArgs) -> Result<()> {
    export_groups(args)?;
    Ok(())
}

/// Writes the loaded groups data plus its source inventory; returns the output path.
pub fn export_groups(args: ExportArgs) -> Result<PathBuf> {
    let started_ts = Utc::now();

    let cache = GroupsCache::from_dir(&args.data_dir)?;
    let data = cache.load()?;
    let inventory = build_inventory(&args.data_dir)?;

    let output_path = args.output.unwrap_or_else(|| {
        args.cache_root.join("exports").join(format!(
            "groups_{}.json",
            utc_compact_string(started_ts)
        ))
    });

    let manifest = ExportManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        inventory,
        supergroup_count: data.supergroups.len(),
        data: &*data,
    };

    write_json_pretty(&output_path, &manifest)?;
    info!(
        path = %output_path.display(),
        supergroups = manifest.supergroup_count,
        "wrote groups export"
    );

    Ok(output_path)
}
