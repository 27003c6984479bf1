//! Catalog of the KEGG `list` endpoints: the reference pathway listing and the organism
//! table, plus the pathway listing of one chosen organism. All three are tab-separated
//! text; lines with an unexpected field count are skipped.

use log::info;
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

use crate::Kegg::kegg_rest::{HttpClient, KeggError, KeggRest};

/// one line of a `list/pathway` answer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PathwayListing {
    pub kegg_id: String,
    pub pathway_name: String,
}

/// one line of the `list/organism` answer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrganismEntry {
    pub kegg_id: String,
    pub abbreviation: String,
    pub organism: String,
    pub taxonomy: String,
}

/// struct for the complete KEGG pathway and organism catalog
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct KeggCatalog {
    pub pathways: Vec<PathwayListing>,
    pub organisms: Vec<OrganismEntry>,
}

impl KeggCatalog {
    /// Collect the complete catalog: reference pathways and all organisms.
    pub fn collect<C: HttpClient>(rest: &KeggRest<C>) -> Result<Self, KeggError> {
        let general_info = rest.info("kegg")?;
        info!("general KEGG information:\n{}", general_info);

        let pathways = parse_pathway_listing(&rest.list("pathway")?);
        info!("total pathways retrieved: {}", pathways.len());

        let organisms = parse_organism_listing(&rest.list("organism")?);
        info!("total organisms retrieved: {}", organisms.len());

        Ok(Self {
            pathways,
            organisms,
        })
    }

    /// full organism name for an abbreviation; falls back to the abbreviation itself
    pub fn organism_name(&self, abbr: &str) -> String {
        self.organisms
            .iter()
            .find(|org| org.abbreviation == abbr)
            .map(|org| org.organism.clone())
            .unwrap_or_else(|| abbr.to_string())
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("pathways"),
            Cell::new("organisms"),
        ]));
        table.add_row(Row::new(vec![
            Cell::new(&self.pathways.len().to_string()),
            Cell::new(&self.organisms.len().to_string()),
        ]));
        table.printstd();
    }
}

/// pathways associated with one organism
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrganismPathways {
    pub organism_name: String,
    pub abbreviation: String,
    pub pathways: Vec<PathwayListing>,
}

impl OrganismPathways {
    pub fn pretty_print(&self) {
        println!("{} ({})", self.organism_name, self.abbreviation);
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("kegg id"), Cell::new("pathway")]));
        for pathway in &self.pathways {
            table.add_row(Row::new(vec![
                Cell::new(&pathway.kegg_id),
                Cell::new(&pathway.pathway_name),
            ]));
        }
        table.printstd();
    }
}

/// Retrieve the pathway listing of a specific organism, e.g. `"hsa"`.
pub fn retrieve_organism_pathways<C: HttpClient>(
    rest: &KeggRest<C>,
    catalog: &KeggCatalog,
    abbr: &str,
) -> Result<OrganismPathways, KeggError> {
    info!("retrieving pathways for organism: {}", abbr);
    let listing = rest.list(&format!("pathway/{}", abbr))?;
    let pathways = parse_pathway_listing(&listing);
    info!("total pathways retrieved from {}: {}", abbr, pathways.len());
    Ok(OrganismPathways {
        organism_name: catalog.organism_name(abbr),
        abbreviation: abbr.to_string(),
        pathways,
    })
}

pub fn parse_pathway_listing(listing: &str) -> Vec<PathwayListing> {
    let mut pathways = Vec::new();
    for line in listing.lines() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 {
            continue;
        }
        pathways.push(PathwayListing {
            kegg_id: fields[0].to_string(),
            pathway_name: fields[1].to_string(),
        });
    }
    pathways
}

pub fn parse_organism_listing(listing: &str) -> Vec<OrganismEntry> {
    let mut organisms = Vec::new();
    for line in listing.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 4 {
            continue;
        }
        organisms.push(OrganismEntry {
            kegg_id: fields[0].to_string(),
            abbreviation: fields[1].to_string(),
            organism: fields[2].to_string(),
            taxonomy: fields[3].to_string(),
        });
    }
    organisms
}
