use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use super::collate::locale_compare;
use super::columns::{RowCells, resolve_column};
use super::extract::CellParser;
use super::lookup::build_lookup;
use super::markdown_row::{parse_markdown_row, table_lines};
use super::source::{DataSource, DiscoveredSources};
use super::text::strip_bom;
use crate::model::{GroupsData, Supergroup};

const ABOUT_URL_ALIASES: [&str; 3] = ["About Us URL", "About URL", "About"];
const LOOKUP_KEY_COLUMN: &str = "name";
const LOOKUP_VALUE_COLUMN: &str = "vision";

/// Header, separator and at least one data row.
const MIN_TABLE_LINES: usize = 3;
const FIRST_DATA_LINE: usize = 2;

/// Reads the data directory and builds the sorted supergroup list.
///
/// A directory without a markdown table, or a table without data rows,
/// produces an empty result. Read failures propagate.
pub fn assemble_groups<S: DataSource + ?Sized>(
    source: &S,
    parser: &CellParser,
    data_dir: &Path,
) -> Result<GroupsData> {
    let listing = source.list_files(data_dir)?;
    let discovered = DiscoveredSources::from_listing(&listing);

    let Some(table_file) = discovered.table.as_deref() else {
        info!(data_dir = %data_dir.display(), "no markdown table found");
        return Ok(GroupsData::default());
    };

    let table_path = data_dir.join(table_file);
    let markdown = source.read_to_string(&table_path)?;
    let lines = table_lines(strip_bom(&markdown));
    if lines.len() < MIN_TABLE_LINES {
        info!(
            path = %table_path.display(),
            table_lines = lines.len(),
            "markdown table has no data rows"
        );
        return Ok(GroupsData::default());
    }

    let headers: Vec<String> = parse_markdown_row(lines[0])
        .iter()
        .map(|cell| parser.header_name(cell))
        .collect();
    debug!(columns = ?headers, "parsed table header");

    let visions = match discovered.lookup.as_deref() {
        Some(lookup_file) => build_lookup(
            source,
            &data_dir.join(lookup_file),
            LOOKUP_KEY_COLUMN,
            LOOKUP_VALUE_COLUMN,
        )?,
        None => HashMap::new(),
    };

    let mut supergroups: Vec<Supergroup> = lines[FIRST_DATA_LINE..]
        .iter()
        .map(|line| {
            let row = RowCells::from_cells(&headers, &parse_markdown_row(line));
            build_supergroup(parser, &row, &visions)
        })
        .collect();

    supergroups.sort_by(|a, b| locale_compare(&a.name, &b.name));

    info!(
        path = %table_path.display(),
        supergroups = supergroups.len(),
        visions = visions.len(),
        "assembled groups data"
    );

    Ok(GroupsData { supergroups })
}

fn build_supergroup(
    parser: &CellParser,
    row: &RowCells,
    visions: &HashMap<String, String>,
) -> Supergroup {
    let name = parser.extract_single_link(resolve_column(row, &["Name"]));
    let org = parser.extract_single_link(resolve_column(row, &["Org"]));
    let vision = visions.get(&name.name).cloned().unwrap_or_default();

    Supergroup {
        name: name.name,
        url: name.url,
        org: org.name,
        org_url: org.url,
        mission: parser.extract_text(resolve_column(row, &["Mission"])),
        goals: parser.extract_goals(resolve_column(row, &["Goals"])),
        vision,
        about_url: parser.extract_url(resolve_column(row, &ABOUT_URL_ALIASES)),
        groups: parser.extract_linked_items(resolve_column(row, &["Groups"])),
        subgroups: parser.extract_linked_items(resolve_column(row, &["Subgroups"])),
        teams: parser.extract_linked_items(resolve_column(row, &["Teams"])),
    }
}
