/// Splits a single CSV line into fields.
///
/// Quoted fields may contain commas and doubled quotes (`""` → `"`). The
/// tokenizer sees one line at a time, so a quoted value spanning several
/// lines is split at the line break.
pub fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
            continue;
        }

        match ch {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Splits file contents on `\r?\n`.
pub fn split_csv_lines(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = text.split('\n').collect();
    let last = segments.len().saturating_sub(1);

    // Only a `\r` directly before a `\n` belongs to the line break.
    segments
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if index < last {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}
