/// Replaces every backslash escape `\X` with the literal `X`.
///
/// A trailing backslash, or one followed by a line terminator, is kept as-is.
pub fn unescape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\\'
            && let Some(&next) = chars.peek()
            && !is_line_terminator(next)
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(ch);
    }

    out
}

/// True for cells that carry no data: blank, `-` or the escaped `\-`.
pub fn is_empty_cell(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed == "-" || trimmed == "\\-"
}

/// Drops a leading byte-order mark left by editors that save UTF-8 with one.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
