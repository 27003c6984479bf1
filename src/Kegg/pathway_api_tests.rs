#[cfg(test)]
mod tests {
    use crate::Kegg::kegg_rest::{KeggError, RecordFetcher};
    use crate::Kegg::pathway_api::PathwayParser;
    use std::collections::HashMap;
    use std::time::Duration;

    // Mock record fetcher serving canned flat-file records
    struct MockFetcher {
        records: HashMap<String, String>,
    }

    impl MockFetcher {
        fn new(records: &[(&str, &str)]) -> Self {
            Self {
                records: records
                    .iter()
                    .map(|(id, text)| (id.to_string(), text.to_string()))
                    .collect(),
            }
        }
    }

    impl RecordFetcher for MockFetcher {
        fn fetch(&self, identifier: &str) -> Result<String, KeggError> {
            self.records
                .get(identifier)
                .cloned()
                .ok_or_else(|| KeggError::RecordNotFound(identifier.to_string()))
        }
    }

    const PATHWAY_RECORD: &str = "\
ENTRY       hsa00250                    Pathway\n\
NAME        Alanine, aspartate and glutamate metabolism - Homo sapiens (human);\n\
CLASS       Metabolism; Amino acid metabolism\n\
GENE        122622  ADSS1; adenylosuccinate synthase 1 [KO:K01939] [EC:6.3.4.4]\n\
            159  ADSS2; adenylosuccinate synthase 2 [KO:K01939] [EC:6.3.4.4]\n\
            2744  GLS; glutaminase [KO:K01425] [EC:3.5.1.2]\n\
            80150  ASRGL1; asparaginase and isoaspartyl peptidase 1 [KO:K13051]\n\
COMPOUND    C00014  Ammonia\n\
            C00025  L-Glutamate\n\
REFERENCE   PMID:10331634\n\
///\n";

    const OVERVIEW_RECORD: &str = "\
ENTRY       hsa01100 Overview            Pathway\n\
NAME        Metabolic pathways - Homo sapiens (human)\n\
GENE        122622  ADSS1; adenylosuccinate synthase 1 [KO:K01939] [EC:6.3.4.4]\n\
///\n";

    const EC_6_3_4_4: &str = "\
ENTRY       EC 6.3.4.4                  Enzyme\n\
NAME        adenylosuccinate synthase\n\
REACTION    GTP + IMP + L-aspartate = GDP + phosphate + N6-(1,2-dicarboxyethyl)-AMP [RN:R01135]\n\
///\n";

    const EC_3_5_1_2: &str = "\
ENTRY       EC 3.5.1.2                  Enzyme\n\
NAME        glutaminase\n\
ALL_REAC    R00256\n\
///\n";

    const RN_R00256: &str = "\
ENTRY       R00256                      Reaction\n\
EQUATION    L-glutamine + H2O = L-glutamate + NH3\n\
SUBSTRATE   L-glutamine [CPD:C00064];\n\
            H2O [CPD:C00001]\n\
PRODUCT     L-glutamate [CPD:C00025];\n\
            NH3 [CPD:C00014]\n\
///\n";

    fn detailed_parser() -> PathwayParser<MockFetcher> {
        let fetcher = MockFetcher::new(&[
            ("hsa00250", PATHWAY_RECORD),
            ("ec:6.3.4.4", EC_6_3_4_4),
            ("ec:3.5.1.2", EC_3_5_1_2),
            ("rn:R00256", RN_R00256),
        ]);
        let mut parser = PathwayParser::with_fetcher(fetcher);
        parser.pace = Duration::from_millis(0);
        parser
    }

    #[test]
    fn test_detailed_pathway() {
        let parser = detailed_parser();
        let pathway = parser.retrieve_pathway("hsa00250", "hsa").unwrap();

        assert_eq!(
            pathway.pathway_name,
            "Alanine, aspartate and glutamate metabolism - Homo sapiens (human)"
        );
        assert_eq!(pathway.kegg_id, "hsa00250");
        assert!(!pathway.is_overview);

        // ASRGL1 has no EC code and must be discarded entirely
        let genes: Vec<&str> = pathway
            .enzymes
            .iter()
            .map(|e| e.gene_symbol.as_str())
            .collect();
        assert_eq!(genes, vec!["ADSS1", "ADSS2", "GLS"]);

        assert_eq!(pathway.enzymes[0].kegg_gene_id, "hsa:122622");
        assert_eq!(pathway.enzymes[0].reactions.len(), 1);
        assert_eq!(pathway.enzymes[0].reactions[0].reaction_id, "R01135");

        // GLS reactions come from the ALL_REAC fallback, with compound detail
        let gls = &pathway.enzymes[2];
        assert_eq!(gls.reactions.len(), 1);
        assert_eq!(gls.reactions[0].reaction_id, "R00256");
        assert_eq!(
            gls.reactions[0].substrate_compounds,
            vec!["L-glutamine [C00064]", "H2O [C00001]"]
        );
    }

    #[test]
    fn test_overview_by_first_line() {
        let parser = detailed_parser();
        let pathway = parser
            .parse_pathway(OVERVIEW_RECORD, "hsa01100", "hsa")
            .unwrap();
        // GENE content is present but must be ignored for overview pathways
        assert!(pathway.is_overview);
        assert!(pathway.enzymes.is_empty());
        assert_eq!(
            pathway.pathway_name,
            "Metabolic pathways - Homo sapiens (human)"
        );
    }

    #[test]
    fn test_overview_without_ec_annotations() {
        let record = "\
ENTRY       hsa04110                    Pathway\n\
NAME        Cell cycle - Homo sapiens (human)\n\
GENE        595  CCND1; cyclin D1 [KO:K04503]\n\
///\n";
        let parser = detailed_parser();
        let pathway = parser.parse_pathway(record, "hsa04110", "hsa").unwrap();
        assert!(pathway.is_overview);
        assert!(pathway.enzymes.is_empty());
    }

    #[test]
    fn test_pathway_name_fallback() {
        let record = "ENTRY       hsa99999                    Pathway\n///\n";
        let parser = detailed_parser();
        let pathway = parser.parse_pathway(record, "hsa99999", "hsa").unwrap();
        assert_eq!(pathway.pathway_name, "Unknown");
    }

    #[test]
    fn test_retrieve_unknown_pathway_is_none() {
        let parser = detailed_parser();
        assert!(parser.retrieve_pathway("hsa11111", "hsa").is_none());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let parser = detailed_parser();
        let first = parser.parse_pathway(PATHWAY_RECORD, "hsa00250", "hsa");
        let second = parser.parse_pathway(PATHWAY_RECORD, "hsa00250", "hsa");
        assert_eq!(first, second);
    }

    #[test]
    fn test_failing_ec_code_degrades_to_fewer_reactions() {
        // same pathway, but the fetcher knows none of the EC records
        let fetcher = MockFetcher::new(&[("hsa00250", PATHWAY_RECORD)]);
        let mut parser = PathwayParser::with_fetcher(fetcher);
        parser.pace = Duration::from_millis(0);

        let pathway = parser.retrieve_pathway("hsa00250", "hsa").unwrap();
        assert_eq!(pathway.enzymes.len(), 3);
        for enzyme in &pathway.enzymes {
            assert!(enzyme.reactions.is_empty());
        }
    }
}
