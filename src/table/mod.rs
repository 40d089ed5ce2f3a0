mod assemble;
mod cache;
mod collate;
mod columns;
mod csv_row;
mod extract;
mod lookup;
mod markdown_row;
mod source;
mod text;

pub use assemble::assemble_groups;
pub use cache::GroupsCache;
pub use collate::locale_compare;
pub use columns::{RowCells, resolve_column};
pub use csv_row::{parse_csv_row, split_csv_lines};
pub use extract::CellParser;
pub use lookup::build_lookup;
pub use markdown_row::{parse_markdown_row, table_lines};
pub use source::{DataSource, DiscoveredSources, FsDataSource};
pub use text::{is_empty_cell, strip_bom, unescape_markdown};
