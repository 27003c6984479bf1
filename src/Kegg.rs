#[allow(non_snake_case)]
/// low-level flat-file primitives: section extraction, bracketed annotations,
/// equation decomposition, compound lines
pub mod KEGG_parser;
/// parsing of GENE lines into enzyme stubs
pub mod enzyme_api;
/// REST access to the KEGG database
pub mod kegg_rest;
/// catalog of pathways and organisms from the list endpoints
pub mod organism_api;
/// top-level pathway record parser
pub mod pathway_api;
/// tests
pub mod pathway_api_tests;
/// reaction records from EC entries, direct and ALL_REAC fallback modes
pub mod reaction_api;
