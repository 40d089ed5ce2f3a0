/// Cells of one data row keyed by column name, in header order.
#[derive(Debug, Clone, Default)]
pub struct RowCells {
    entries: Vec<(String, String)>,
}

impl RowCells {
    /// Zips headers with cells; a row shorter than the header gets empty cells.
    pub fn from_cells(headers: &[String], cells: &[String]) -> Self {
        let mut row = Self::default();
        for (index, header) in headers.iter().enumerate() {
            let value = cells.get(index).cloned().unwrap_or_default();
            row.insert(header, value);
        }
        row
    }

    /// A repeated column name keeps its first position and takes the new value.
    pub fn insert(&mut self, name: &str, value: String) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Value of the first alias that matches a column name, ignoring case.
///
/// Aliases are tried in order, so an earlier alias wins even when a later one
/// matches a column further left.
pub fn resolve_column<'a>(row: &'a RowCells, aliases: &[&str]) -> &'a str {
    for alias in aliases {
        let wanted = alias.to_lowercase();
        if let Some((_, value)) = row.iter().find(|(key, _)| key.to_lowercase() == wanted) {
            return value;
        }
    }
    ""
}
