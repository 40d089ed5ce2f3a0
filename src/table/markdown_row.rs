/// Splits one pipe-table row into trimmed cells.
///
/// One leading and one trailing `|` are dropped only when they are the very
/// first and last characters of the line. Escaped pipes (`\|`) still split.
pub fn parse_markdown_row(line: &str) -> Vec<String> {
    let line = line.strip_prefix('|').unwrap_or(line);
    let line = line.strip_suffix('|').unwrap_or(line);

    line.split('|')
        .map(str::trim)
        .map(ToOwned::to_owned)
        .collect()
}

/// Lines of a markdown document that belong to a pipe table.
pub fn table_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .filter(|line| line.trim().starts_with('|'))
        .collect()
}
