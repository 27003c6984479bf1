//! Parsing of GENE section lines into enzyme stubs. One top-level GENE line carries the
//! gene id, the gene symbol, a description and the bracketed KO/EC annotations:
//!
//! `122622  ADSS1; adenylosuccinate synthase 1 [KO:K01939] [EC:6.3.4.4]`
//!
//! The stub is enriched with reaction data in a second, explicit step (`with_reactions`)
//! once its EC codes have been resolved against the enzyme database. Multi-line gene
//! descriptions are truncated to their first line.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::Kegg::KEGG_parser::{parse_ec_codes, parse_ko_codes};
use crate::Kegg::reaction_api::ReactionRecord;

/// struct for enzyme data collected from one GENE line
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EnzymeRecord {
    pub enzyme_name: String,
    pub ec_numbers: Vec<String>,
    pub gene_symbol: String,
    pub kegg_gene_id: String,
    pub ko_numbers: Vec<String>,
    pub reactions: Vec<ReactionRecord>,
}

impl EnzymeRecord {
    /// second construction phase: attach the reactions retrieved for this stub's EC codes
    pub fn with_reactions(mut self, reactions: Vec<ReactionRecord>) -> Self {
        self.reactions = reactions;
        self
    }
}

/// Parse a single GENE line from KEGG pathway data into an enzyme stub with empty
/// `reactions`. Lines without a run of two or more spaces between gene id and the rest
/// are not gene entries and yield `None`.
pub fn parse_gene_line(gene_line: &str, organism_abbr: &str) -> Option<EnzymeRecord> {
    let line = gene_line.trim();
    if line.is_empty() {
        return None;
    }

    // gene id and the rest of the line are separated by 2+ spaces
    let splitter = Regex::new(r"\s{2,}").unwrap();
    let mut parts = splitter.splitn(line, 2);
    let gene_id = parts.next()?.trim();
    let rest_of_line = parts.next()?.trim();

    // gene symbol before the first ';', description after it; lines without ';' carry
    // the same text in both roles
    let (gene_symbol, description) = match rest_of_line.split_once(';') {
        Some((symbol, description)) => (symbol.trim(), description.trim()),
        None => (rest_of_line, rest_of_line),
    };

    // bracketed annotations are extracted separately, not kept in the name
    let enzyme_name = match description.find('[') {
        Some(bracket) => description[..bracket].trim(),
        None => description,
    };

    let ec_numbers = parse_ec_codes(rest_of_line);
    let ko_numbers = parse_ko_codes(rest_of_line);

    Some(EnzymeRecord {
        enzyme_name: enzyme_name.to_string(),
        ec_numbers,
        gene_symbol: gene_symbol.to_string(),
        kegg_gene_id: format!("{}:{}", organism_abbr, gene_id),
        ko_numbers,
        reactions: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gene_line() {
        let line = "122622  ADSS1; adenylosuccinate synthase 1 [KO:K01939] [EC:6.3.4.4]";
        let enzyme = parse_gene_line(line, "hsa").unwrap();
        assert_eq!(enzyme.gene_symbol, "ADSS1");
        assert_eq!(enzyme.enzyme_name, "adenylosuccinate synthase 1");
        assert_eq!(enzyme.ec_numbers, vec!["6.3.4.4".to_string()]);
        assert_eq!(enzyme.ko_numbers, vec!["K01939".to_string()]);
        assert_eq!(enzyme.kegg_gene_id, "hsa:122622");
        assert!(enzyme.reactions.is_empty());
    }

    #[test]
    fn test_parse_gene_line_without_semicolon() {
        let line = "5315  PKM [KO:K00873] [EC:2.7.1.40]";
        let enzyme = parse_gene_line(line, "hsa").unwrap();
        assert_eq!(enzyme.enzyme_name, "PKM");
        assert_eq!(enzyme.ec_numbers, vec!["2.7.1.40".to_string()]);
        assert_eq!(enzyme.kegg_gene_id, "hsa:5315");
    }

    #[test]
    fn test_parse_gene_line_not_an_entry() {
        // a single run of text with no double-space separator is not a gene entry
        assert!(parse_gene_line("continuation of a description", "hsa").is_none());
        assert!(parse_gene_line("   ", "hsa").is_none());
    }

    #[test]
    fn test_parse_gene_line_without_annotations() {
        let line = "12345  ABC1; some protein of unknown function";
        let enzyme = parse_gene_line(line, "mmu").unwrap();
        assert_eq!(enzyme.enzyme_name, "some protein of unknown function");
        assert!(enzyme.ec_numbers.is_empty());
        assert!(enzyme.ko_numbers.is_empty());
    }

    #[test]
    fn test_with_reactions_keeps_stub_fields() {
        let stub = parse_gene_line("159  ADSS2; adenylosuccinate synthase 2 [EC:6.3.4.4]", "hsa")
            .unwrap();
        let reaction = ReactionRecord {
            reaction_id: "R01135".to_string(),
            equation: "GTP + IMP + L-aspartate = GDP + phosphate + N6-(1,2-dicarboxyethyl)-AMP"
                .to_string(),
            substrates: vec!["GTP".to_string(), "IMP".to_string(), "L-aspartate".to_string()],
            products: vec![
                "GDP".to_string(),
                "phosphate".to_string(),
                "N6-(1,2-dicarboxyethyl)-AMP".to_string(),
            ],
            substrate_compounds: Vec::new(),
            product_compounds: Vec::new(),
        };
        let enriched = stub.clone().with_reactions(vec![reaction]);
        assert_eq!(enriched.gene_symbol, stub.gene_symbol);
        assert_eq!(enriched.reactions.len(), 1);
        assert_eq!(enriched.reactions[0].reaction_id, "R01135");
    }
}
