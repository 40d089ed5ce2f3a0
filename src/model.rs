use serde::{Deserialize, Serialize};

/// A display label with an optional hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supergroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub org: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_url: Option<String>,
    pub mission: String,
    pub goals: String,
    pub vision: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_url: Option<String>,
    pub groups: Vec<LinkedItem>,
    pub subgroups: Vec<LinkedItem>,
    pub teams: Vec<LinkedItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsData {
    pub supergroups: Vec<Supergroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub filename: String,
    pub sha256: String,
    pub line_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInventory {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source_directory: String,
    pub table_source: Option<SourceEntry>,
    pub lookup_source: Option<SourceEntry>,
    pub table_line_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub manifest_version: u32,
    pub generated_at: String,
    pub inventory: SourceInventory,
    pub supergroup_count: usize,
    pub data: &'a GroupsData,
}
