//! # Pathway Record Parser Module
//!
//! ## Aim
//! Top-level orchestration over one pathway's flat-text record. A pathway is either
//! "global/overview" (map-level summary, no enzyme detail) or "detailed" (carries a GENE
//! section). Detailed pathways are decomposed gene line by gene line into enzyme stubs;
//! stubs with EC codes are enriched with reaction data retrieved per code.
//!
//! ## Main Data Structures and Logic
//! - `PathwayRecord`: name, id, overview flag and the enzymes found
//! - `PathwayParser<F>`: generic over the record fetcher (enables offline tests), owns
//!   the pacing interval for the per-EC fetches
//! - classification: first line containing "Global"/"Overview", or a record without any
//!   `[EC:` occurrence, terminates parsing with an overview record
//!
//! ## Usage
//! ```rust, ignore
//! let parser = PathwayParser::new();
//! if let Some(pathway) = parser.retrieve_pathway("hsa00250", "hsa") {
//!     pathway.pretty_print();
//! }
//! ```

use std::fs::File;
use std::io::Write;
use std::time::Duration;

use log::{error, info};
use prettytable::{Cell, Row, Table};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::Kegg::KEGG_parser::extract_section;
use crate::Kegg::enzyme_api::{EnzymeRecord, parse_gene_line};
use crate::Kegg::kegg_rest::{KeggRest, RecordFetcher};
use crate::Kegg::reaction_api::reactions_for_ec_codes;

/// struct for pathway data
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathwayRecord {
    pub pathway_name: String,
    pub kegg_id: String,
    pub is_overview: bool,
    pub enzymes: Vec<EnzymeRecord>,
}

impl PathwayRecord {
    /// Prints a pretty table of the enzymes found in this pathway with their EC and KO
    /// codes and the number of reactions retrieved for each.
    pub fn pretty_print(&self) {
        println!(
            "{} ({}), overview: {}",
            self.pathway_name, self.kegg_id, self.is_overview
        );
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("gene"),
            Cell::new("kegg gene id"),
            Cell::new("name"),
            Cell::new("EC"),
            Cell::new("KO"),
            Cell::new("reactions"),
        ]));
        for enzyme in &self.enzymes {
            table.add_row(Row::new(vec![
                Cell::new(&enzyme.gene_symbol),
                Cell::new(&enzyme.kegg_gene_id),
                Cell::new(&enzyme.enzyme_name),
                Cell::new(&enzyme.ec_numbers.join(" ")),
                Cell::new(&enzyme.ko_numbers.join(" ")),
                Cell::new(&enzyme.reactions.len().to_string()),
            ]));
        }
        table.printstd();
    }

    /// write the whole record tree as pretty-printed JSON
    pub fn save_to_json(&self, path: &str) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct PathwayParser<F: RecordFetcher> {
    fetcher: F,
    /// delay between successive per-EC fetches
    pub pace: Duration,
}

impl PathwayParser<KeggRest<Client>> {
    pub fn new() -> Self {
        Self {
            fetcher: KeggRest::new(),
            pace: Duration::from_millis(500),
        }
    }
}

impl Default for PathwayParser<KeggRest<Client>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RecordFetcher> PathwayParser<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            pace: Duration::from_millis(500),
        }
    }

    /// Fetch one pathway record and parse it. Any failure for this pathway is logged and
    /// collapses to `None` so that batch callers skip it and move on.
    pub fn retrieve_pathway(&self, pathway_id: &str, organism_abbr: &str) -> Option<PathwayRecord> {
        match self.fetcher.fetch(pathway_id) {
            Ok(raw_text) => self.parse_pathway(&raw_text, pathway_id, organism_abbr),
            Err(e) => {
                error!("Error processing pathway {}: {}", pathway_id, e);
                None
            }
        }
    }

    /// Parse one pathway record. Overview pathways (first line contains "Global" or
    /// "Overview", or no `[EC:` annotation anywhere) keep an empty enzyme list. For
    /// detailed pathways every GENE line becomes an enzyme stub; stubs without EC codes
    /// are discarded, the others are enriched with their reactions.
    pub fn parse_pathway(
        &self,
        raw_text: &str,
        pathway_id: &str,
        organism_abbr: &str,
    ) -> Option<PathwayRecord> {
        let pathway_name = extract_pathway_name(raw_text);

        let first_line = raw_text.lines().next().unwrap_or("");
        if first_line.contains("Global")
            || first_line.contains("Overview")
            || !raw_text.contains("[EC:")
        {
            return Some(PathwayRecord {
                pathway_name,
                kegg_id: pathway_id.to_string(),
                is_overview: true,
                enzymes: Vec::new(),
            });
        }

        let mut enzymes = Vec::new();
        if let Some(gene_section) = extract_section(raw_text, "GENE") {
            for gene_line in gene_section.lines() {
                let gene_line = gene_line.trim();
                if gene_line.is_empty() {
                    continue;
                }
                let Some(stub) = parse_gene_line(gene_line, organism_abbr) else {
                    continue;
                };
                // enrichment is conditional: stubs without EC codes are dropped entirely
                if stub.ec_numbers.is_empty() {
                    continue;
                }
                let reactions =
                    reactions_for_ec_codes(&stub.ec_numbers, &self.fetcher, self.pace);
                enzymes.push(stub.with_reactions(reactions));
            }
        }
        info!(
            "pathway {}: {} enzyme(s) with EC codes",
            pathway_id,
            enzymes.len()
        );

        Some(PathwayRecord {
            pathway_name,
            kegg_id: pathway_id.to_string(),
            is_overview: false,
            enzymes,
        })
    }
}

/// the first NAME line, keyword stripped and a trailing semicolon removed; "Unknown"
/// when the record has no NAME line
fn extract_pathway_name(raw_text: &str) -> String {
    for line in raw_text.lines() {
        if let Some(rest) = line.strip_prefix("NAME") {
            return rest.trim().trim_end_matches(';').to_string();
        }
    }
    "Unknown".to_string()
}
