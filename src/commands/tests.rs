use std::fs;

use tempfile::TempDir;

use supergroups::model::GroupsData;
use supergroups::table::GroupsCache;

use super::export::export_groups;
use super::inventory::build_inventory;
use super::show::write_text_response;
use crate::cli::ExportArgs;

const TABLE: &str = "\
| Name | Org | Goals |
|------|-----|-------|
| [Beta](https://beta.example) | Acme | Ship it |
| alpha | Acme | - |
";

fn data_dir(with_lookup: bool) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    fs::write(dir.path().join("groups.md"), TABLE).expect("table should be written");
    if with_lookup {
        fs::write(dir.path().join("visions.csv"), "name,vision\nBeta,Everywhere\n")
            .expect("lookup should be written");
    }
    dir
}

#[test]
fn build_inventory_records_sources_and_table_lines() {
    let dir = data_dir(true);
    let inventory = build_inventory(dir.path()).expect("inventory should build");

    let table = inventory.table_source.expect("table source should be found");
    assert_eq!(table.filename, "groups.md");
    assert_eq!(table.sha256.len(), 64);
    assert_eq!(table.line_count, 4);
    assert_eq!(inventory.table_line_count, 4);

    let lookup = inventory.lookup_source.expect("lookup source should be found");
    assert_eq!(lookup.filename, "visions.csv");
    assert_eq!(lookup.line_count, 2);
}

#[test]
fn build_inventory_without_lookup_leaves_it_empty() {
    let dir = data_dir(false);
    let inventory = build_inventory(dir.path()).expect("inventory should build");
    assert!(inventory.lookup_source.is_none());
}

#[test]
fn build_inventory_hashes_raw_bytes_of_non_utf8_lookup() {
    let dir = data_dir(false);
    fs::write(
        dir.path().join("visions.csv"),
        b"name,vision\nBeta,Caf\xe9\n".as_slice(),
    )
    .expect("lookup should be written");

    let inventory = build_inventory(dir.path()).expect("inventory should build");
    let lookup = inventory.lookup_source.expect("lookup source should be found");
    assert_eq!(lookup.sha256.len(), 64);
    assert_eq!(lookup.line_count, 2);
}

#[test]
fn export_groups_writes_manifest_with_payload() {
    let dir = data_dir(true);
    let output = dir.path().join("out").join("groups.json");

    let written = export_groups(ExportArgs {
        data_dir: dir.path().to_path_buf(),
        cache_root: dir.path().join("cache"),
        output: Some(output.clone()),
    })
    .expect("export should succeed");
    assert_eq!(written, output);

    let raw = fs::read(&output).expect("export should be readable");
    let value: serde_json::Value = serde_json::from_slice(&raw).expect("export should be json");
    assert_eq!(value["manifest_version"], 1);
    assert_eq!(value["supergroup_count"], 2);
    assert_eq!(value["inventory"]["table_source"]["filename"], "groups.md");

    let data: GroupsData =
        serde_json::from_value(value["data"].clone()).expect("payload should deserialize");
    assert_eq!(data.supergroups[0].name, "alpha");
    assert_eq!(data.supergroups[1].name, "Beta");
    assert_eq!(data.supergroups[1].vision, "Everywhere");
    assert_eq!(data.supergroups[1].goals, "Ship it.");
}

#[test]
fn write_text_response_honours_limit() {
    let dir = data_dir(true);
    let cache = GroupsCache::from_dir(dir.path()).expect("cache should build");
    let data = cache.load().expect("groups should load");

    let mut rendered = Vec::new();
    write_text_response(&mut rendered, &data, Some(1)).expect("render should succeed");
    let rendered = String::from_utf8(rendered).expect("render should be utf-8");

    assert!(rendered.starts_with("Supergroups: 2\n"));
    assert!(rendered.contains("1. alpha"));
    assert!(!rendered.contains("Beta"));
    assert!(rendered.contains("... 1 more"));
}
