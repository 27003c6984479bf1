//! # Reaction Record Module
//!
//! ## Aim
//! Builds `ReactionRecord`s for enzymes, starting from their EC codes. Two sub-modes are
//! tried in order against the EC record text:
//! - direct mode: the REACTION section lists full equations with `[RN:...]` annotations
//! - fallback mode: some EC records only carry an ALL_REAC line of bare reaction ids;
//!   each id is then fetched as its own record and its EQUATION / SUBSTRATE / PRODUCT
//!   sections are read for the detail the ALL_REAC line lacks
//!
//! ## Failure Policy
//! A retrieval failure for one EC code or one reaction id is logged and skipped, never
//! aborting the processing of sibling codes. The aggregate result for a list of EC codes
//! is the concatenation, in input order, of whatever each code yielded.

use std::thread;
use std::time::Duration;

use log::{error, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Kegg::KEGG_parser::{extract_section, parse_compound_line, split_equation};
use crate::Kegg::kegg_rest::RecordFetcher;

/// struct for reaction data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ReactionRecord {
    pub reaction_id: String,
    pub equation: String,
    pub substrates: Vec<String>,
    pub products: Vec<String>,
    /// normalized "name [id]" entries from the SUBSTRATE section; empty for records built
    /// from a REACTION line, which carries no compound detail
    pub substrate_compounds: Vec<String>,
    pub product_compounds: Vec<String>,
}

/// Parse a REACTION line from a KEGG EC entry, e.g.
/// `"L-glutamine + H2O = L-glutamate + NH3 [RN:R00256]"`
pub fn parse_reaction_line(reaction_line: &str) -> Option<ReactionRecord> {
    let reaction_pattern = Regex::new(r"^(.+)\s+\[RN:([^\]]+)\]").unwrap();
    let caps = reaction_pattern.captures(reaction_line)?;
    let equation = caps[1].trim().to_string();
    let reaction_id = caps[2].trim().to_string();
    let (substrates, products) = split_equation(&equation);
    Some(ReactionRecord {
        reaction_id,
        equation,
        substrates,
        products,
        substrate_compounds: Vec::new(),
        product_compounds: Vec::new(),
    })
}

/// Direct mode: every line of the REACTION section carrying an `[RN:...]` annotation
/// yields one record. Lines of any other shape are skipped.
pub fn reactions_from_ec_record(ec_text: &str) -> Vec<ReactionRecord> {
    let mut found = Vec::new();
    if let Some(reaction_section) = extract_section(ec_text, "REACTION") {
        for line in reaction_section.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Some(reaction) = parse_reaction_line(line) {
                found.push(reaction);
            }
        }
    }
    found
}

fn compound_section(reaction_text: &str, keyword: &str) -> Vec<String> {
    match extract_section(reaction_text, keyword) {
        Some(section) => section
            .lines()
            .map(str::trim)
            // the record terminator belongs to no section
            .filter(|line| !line.is_empty() && *line != "///")
            .map(parse_compound_line)
            .collect(),
        None => Vec::new(),
    }
}

/// Fallback mode: resolve every `R\d+` id of an ALL_REAC section by fetching the
/// reaction's own record. The EQUATION section contributes the equation (first line
/// only), the SUBSTRATE and PRODUCT sections the compound detail.
pub fn reactions_from_all_reac<F: RecordFetcher>(
    all_reac_section: &str,
    fetcher: &F,
) -> Vec<ReactionRecord> {
    let id_pattern = Regex::new(r"R\d+").unwrap();
    let mut found = Vec::new();

    for id_match in id_pattern.find_iter(all_reac_section) {
        let reaction_id = id_match.as_str();
        let reaction_text = match fetcher.fetch(&format!("rn:{}", reaction_id)) {
            Ok(text) => text,
            Err(e) => {
                error!("Error retrieving reaction {}: {}", reaction_id, e);
                continue;
            }
        };

        let equation = extract_section(&reaction_text, "EQUATION")
            .and_then(|section| {
                section
                    .lines()
                    .map(str::trim)
                    .find(|line| !line.is_empty())
                    .map(String::from)
            })
            .unwrap_or_default();
        let (substrates, products) = split_equation(&equation);

        found.push(ReactionRecord {
            reaction_id: reaction_id.to_string(),
            equation,
            substrates,
            products,
            substrate_compounds: compound_section(&reaction_text, "SUBSTRATE"),
            product_compounds: compound_section(&reaction_text, "PRODUCT"),
        });
    }
    found
}

/// Retrieve reaction information for a list of EC codes. Fetches are paced by `pace`
/// to respect the source's request-rate constraints. Codes that fail to retrieve are
/// skipped; the result keeps the input order of the codes that succeeded.
pub fn reactions_for_ec_codes<F: RecordFetcher>(
    ec_numbers: &[String],
    fetcher: &F,
    pace: Duration,
) -> Vec<ReactionRecord> {
    let mut reaction_data = Vec::new();

    for ec_number in ec_numbers {
        thread::sleep(pace);
        let ec_text = match fetcher.fetch(&format!("ec:{}", ec_number)) {
            Ok(text) => text,
            Err(e) => {
                error!("Error retrieving information for EC {}: {}", ec_number, e);
                continue;
            }
        };

        let mut found = reactions_from_ec_record(&ec_text);
        if found.is_empty() {
            if let Some(all_reac_section) = extract_section(&ec_text, "ALL_REAC") {
                found = reactions_from_all_reac(&all_reac_section, fetcher);
            }
        }
        info!("EC {}: {} reaction(s) found", ec_number, found.len());
        reaction_data.extend(found);
    }
    reaction_data
}
