//! Text normalization helpers.
//!
//! Search matching and lyrics cleanup both work on provider strings that
//! vary in casing, punctuation and whitespace. The helpers here produce
//! the canonical forms used for comparisons and final lyrics output.

use regex::Regex;
use std::sync::LazyLock;

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("section header pattern is valid"));

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank run pattern is valid"));

/// Canonical matching key: lowercased, punctuation stripped, whitespace
/// collapsed to single spaces.
///
/// Used for case/punctuation-insensitive comparisons between a query and a
/// search hit title ("Hello" matches "HELLO!" but not "Hello (Live)").
pub fn clean_str(s: &str) -> String {
    let mut cleaned = String::with_capacity(s.len());
    for c in s.to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
            cleaned.push(c);
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip `[Chorus]`-style section annotations and collapse the blank-line
/// runs the removal leaves behind.
pub fn remove_section_headers(lyrics: &str) -> String {
    let stripped = SECTION_HEADER.replace_all(lyrics, "");
    let collapsed = BLANK_RUNS.replace_all(&stripped, "\n");
    collapsed.trim().to_string()
}
