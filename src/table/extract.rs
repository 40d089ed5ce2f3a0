use anyhow::{Context, Result};
use regex::Regex;

use super::text::{is_empty_cell, unescape_markdown};
use crate::model::LinkedItem;

/// Words that, after a capitalized word, mark the start of a new goal
/// statement in run-together goal text.
const GOAL_LEAD_WORDS: &str = "a|an|the|our|their|its|to|into|in|for|from|with";

/// Compiled patterns for turning raw table cells into domain values.
#[derive(Debug)]
pub struct CellParser {
    link: Regex,
    url_link: Regex,
    header_label: Regex,
    whitespace_run: Regex,
    goal_lead: Regex,
    goal_tail: Regex,
}

impl CellParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            link: Regex::new(r"\[([^\]]+)\]\(([^)]+)\)")
                .context("failed to compile markdown link regex")?,
            url_link: Regex::new(r"\[([^\]]*)\]\(([^)]+)\)")
                .context("failed to compile url link regex")?,
            header_label: Regex::new(r"\[([^\]]+)\]")
                .context("failed to compile header label regex")?,
            whitespace_run: Regex::new(r"\s+").context("failed to compile whitespace regex")?,
            goal_lead: Regex::new(&format!(
                r"^[A-Z][a-z]+\s+(?:{GOAL_LEAD_WORDS})(?:[^A-Za-z0-9_]|$)"
            ))
            .context("failed to compile goal boundary regex")?,
            goal_tail: Regex::new(r"\.?\s*$").context("failed to compile goal tail regex")?,
        })
    }

    /// Column name for a header cell: the bracketed label if present, else the text.
    pub fn header_name(&self, cell: &str) -> String {
        match self.header_label.captures(cell).and_then(|caps| caps.get(1)) {
            Some(label) => label.as_str().to_string(),
            None => cell.trim().to_string(),
        }
    }

    pub fn extract_linked_items(&self, cell: &str) -> Vec<LinkedItem> {
        if is_empty_cell(cell) {
            return Vec::new();
        }

        self.link
            .captures_iter(cell)
            .map(|caps| LinkedItem {
                name: unescape_markdown(&caps[1]),
                url: Some(caps[2].to_string()),
            })
            .collect()
    }

    /// First link in the cell, or the whole cell as a plain name.
    ///
    /// Blank and placeholder cells are not special here; `-` becomes the name `-`.
    pub fn extract_single_link(&self, cell: &str) -> LinkedItem {
        let cleaned = cell.trim();
        match self.link.captures(cleaned) {
            Some(caps) => LinkedItem {
                name: unescape_markdown(&caps[1]),
                url: Some(caps[2].to_string()),
            },
            None => LinkedItem {
                name: unescape_markdown(cleaned),
                url: None,
            },
        }
    }

    pub fn extract_text(&self, cell: &str) -> String {
        if is_empty_cell(cell) {
            return String::new();
        }
        unescape_markdown(cell.trim())
    }

    /// Target of the first link with trailing slashes removed.
    pub fn extract_url(&self, cell: &str) -> Option<String> {
        if is_empty_cell(cell) {
            return None;
        }

        self.url_link
            .captures(cell.trim())
            .map(|caps| caps[2].trim_end_matches('/').to_string())
    }

    /// Rebuilds sentence boundaries in goal text that was pasted without
    /// punctuation, joining the recovered statements with `. `.
    ///
    /// A boundary is a whitespace run either between `)` and an uppercase
    /// letter, or between a lowercase letter and a capitalized word followed
    /// by a lead word such as `the`, `to` or `with`.
    pub fn extract_goals(&self, cell: &str) -> String {
        let text = self.extract_text(cell);
        if text.is_empty() {
            return String::new();
        }

        let mut pieces = Vec::new();
        let mut start = 0;
        for run in self.whitespace_run.find_iter(&text) {
            if self.is_goal_boundary(&text, run.start(), run.end()) {
                pieces.push(&text[start..run.start()]);
                start = run.end();
            }
        }
        pieces.push(&text[start..]);

        let joined = pieces.join(". ");
        self.goal_tail.replace(&joined, ".").into_owned()
    }

    fn is_goal_boundary(&self, text: &str, run_start: usize, run_end: usize) -> bool {
        let Some(before) = text[..run_start].chars().next_back() else {
            return false;
        };
        let after = &text[run_end..];

        if before == ')' && after.chars().next().is_some_and(|ch| ch.is_ascii_uppercase()) {
            return true;
        }

        before.is_ascii_lowercase() && self.goal_lead.is_match(after)
    }
}
