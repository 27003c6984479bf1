//! # KEGG Flat-File Parser Module
//!
//! ## Aim
//! This module holds the low-level primitives for KEGG flat-text records. A record is a block
//! of fixed-width text made of named UPPERCASE sections whose boundaries are implicit: a
//! section ends where the next top-level section header begins. Section content mixes free
//! text with bracketed cross-reference annotations such as `[EC:6.3.4.4]`, `[KO:K01939]`,
//! `[CPD:C00064]` and `[RN:R00256]`.
//!
//! ## Main Logic
//! - `extract_section()`: cuts the text span belonging to one section keyword
//! - `parse_ec_codes()` / `parse_ko_codes()`: collect bracketed cross-reference codes
//! - `split_equation()`: decomposes `"A + B = C + D"` into substrate and product name lists
//! - `parse_compound_line()`: normalizes `"name [CPD:id]"` lines to `"name [id]"`
//!
//! ## Interesting Features
//! - Section keywords are matched only at true line start, so a keyword appearing mid-line
//!   (e.g. the word GENE inside a description) can not be mistaken for a header
//! - Malformed lines are passed through or skipped, never treated as fatal: the record
//!   parsers built on top of this module degrade to fewer results instead of failing

use regex::Regex;

/// Returns the text span belonging to `keyword`: everything after the keyword token up to
/// the next line starting with one or more uppercase letters followed by whitespace, or up
/// to the end of the record. The keyword must start a line itself; `None` when the record
/// has no such section.
pub fn extract_section(text: &str, keyword: &str) -> Option<String> {
    let header = Regex::new(&format!(r"(?m)^{}\b", regex::escape(keyword))).unwrap();
    let found = header.find(text)?;
    let remaining_text = &text[found.end()..];
    let next_section = Regex::new(r"(?m)^[A-Z]+\s").unwrap();
    let end = next_section
        .find(remaining_text)
        .map(|m| m.start())
        .unwrap_or(remaining_text.len());
    Some(remaining_text[..end].to_string())
}

/// Extract EC numbers from text, e.g. `[EC:1.2.3.4]` or `[EC:1.2.3.4 1.2.3.5]`
pub fn parse_ec_codes(text: &str) -> Vec<String> {
    let ec_pattern = Regex::new(r"\[EC:([\d\.\s]+)\]").unwrap();
    let mut ec_numbers = Vec::new();
    for caps in ec_pattern.captures_iter(text) {
        ec_numbers.extend(caps[1].split_whitespace().map(|ec| ec.to_string()));
    }
    ec_numbers
}

/// Extract KO numbers from text, e.g. `[KO:K12345]`
pub fn parse_ko_codes(text: &str) -> Vec<String> {
    let ko_pattern = Regex::new(r"\[KO:([^\]]+)\]").unwrap();
    let mut ko_numbers = Vec::new();
    for caps in ko_pattern.captures_iter(text) {
        ko_numbers.extend(caps[1].split_whitespace().map(|ko| ko.to_string()));
    }
    ko_numbers
}

/// Split a reaction equation on the first `" = "` into substrate and product name lists.
/// An equation without `" = "` yields two empty lists, not an error.
pub fn split_equation(equation: &str) -> (Vec<String>, Vec<String>) {
    match equation.split_once(" = ") {
        Some((substrates_str, products_str)) => (
            substrates_str
                .split(" + ")
                .map(|s| s.trim().to_string())
                .collect(),
            products_str
                .split(" + ")
                .map(|p| p.trim().to_string())
                .collect(),
        ),
        None => (Vec::new(), Vec::new()),
    }
}

/// Parse one line of a SUBSTRATE or PRODUCT section, e.g. `"L-glutamine [CPD:C00064]"`
/// becomes `"L-glutamine [C00064]"`. Lines without the CPD bracket are returned trimmed
/// as they are, so extension lines survive unharmed.
pub fn parse_compound_line(compound_line: &str) -> String {
    let compound_pattern = Regex::new(r"^(.+?)\s+\[CPD:([^\]]+)\]").unwrap();
    let line = compound_line.trim();
    match compound_pattern.captures(line) {
        Some(caps) => format!("{} [{}]", caps[1].trim(), caps[2].trim()),
        None => line.to_string(),
    }
}
