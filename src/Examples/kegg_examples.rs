use crate::Kegg::kegg_rest::KeggRest;
use crate::Kegg::organism_api::{KeggCatalog, retrieve_organism_pathways};
use crate::Kegg::pathway_api::PathwayParser;

pub fn kegg_examples(kegg_examples: usize) {
    match kegg_examples {
        0 => {
            // complete catalog: all reference pathways and all organisms
            let rest = KeggRest::new();
            match KeggCatalog::collect(&rest) {
                Ok(catalog) => {
                    catalog.pretty_print();
                    for pathway in catalog.pathways.iter().take(10) {
                        println!("{} - {}", pathway.kegg_id, pathway.pathway_name);
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }

        1 => {
            // pathways associated with one organism
            let rest = KeggRest::new();
            match KeggCatalog::collect(&rest) {
                Ok(catalog) => {
                    match retrieve_organism_pathways(&rest, &catalog, "hsa") {
                        Ok(organism_pathways) => organism_pathways.pretty_print(),
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(e) => eprintln!("Error: {}", e),
            }
        }

        2 => {
            // one detailed pathway with enzymes and their reactions
            let parser = PathwayParser::new();
            let pathway_ids = ["hsa01100", "hsa00250", "hsa00010"];
            for pathway_id in pathway_ids {
                match parser.retrieve_pathway(pathway_id, "hsa") {
                    Some(pathway) => {
                        pathway.pretty_print();
                        let total_reactions: usize =
                            pathway.enzymes.iter().map(|e| e.reactions.len()).sum();
                        println!("total reactions: {}", total_reactions);
                        if let Some(enzyme) = pathway.enzymes.first() {
                            if let Some(reaction) = enzyme.reactions.first() {
                                println!("example reaction: {}", reaction.equation);
                            }
                        }
                    }
                    None => println!("failed to retrieve pathway {}", pathway_id),
                }
            }
        }

        3 => {
            // save one pathway record tree as JSON
            let parser = PathwayParser::new();
            match parser.retrieve_pathway("hsa00250", "hsa") {
                Some(pathway) => {
                    if let Err(e) = pathway.save_to_json("hsa00250.json") {
                        eprintln!("Error: {}", e);
                    }
                }
                None => println!("failed to retrieve pathway hsa00250"),
            }
        }
        _ => {
            println!("non existing examples");
        }
    }
}
