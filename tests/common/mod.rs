#![allow(dead_code)]

use linnaeus::{MergedRecord, NameRecord, NodeRecord, Taxon, TaxonId, TaxonomyDB};

/// A small but realistic slice of the NCBI taxonomy:
///
/// ```text
/// 1 root
/// └── 131567 cellular organisms
///     ├── 2 Bacteria (superkingdom)
///     │   └── 1224 Proteobacteria (phylum)
///     │       └── 1236 Gammaproteobacteria (class)
///     │           └── 91347 Enterobacterales (order)
///     │               └── 543 Enterobacteriaceae (family)
///     │                   ├── 561 Escherichia (genus)
///     │                   │   └── 562 Escherichia coli (species)
///     │                   └── 620 Shigella (genus)
///     │                       └── 622 Shigella dysenteriae (species)
///     ├── 2157 Archaea (superkingdom)
///     │   └── 2284 Sulfolobus (genus)
///     │       └── 2285 Sulfolobus acidocaldarius (species)
///     └── 2759 Eukaryota (superkingdom)
///         ├── 3497 Morus (genus, the mulberries)
///         └── 37577 Morus (genus, the gannets)
/// ```
///
/// Taxid 666666 is retired, merged into 562.
pub fn fixture_db() -> TaxonomyDB {
    let nodes = vec![
        NodeRecord::new(1u32, 1u32, "no rank"),
        NodeRecord::new(131567u32, 1u32, "no rank"),
        NodeRecord::new(2u32, 131567u32, "superkingdom"),
        NodeRecord::new(1224u32, 2u32, "phylum"),
        NodeRecord::new(1236u32, 1224u32, "class"),
        NodeRecord::new(91347u32, 1236u32, "order"),
        NodeRecord::new(543u32, 91347u32, "family"),
        NodeRecord::new(561u32, 543u32, "genus"),
        NodeRecord::new(562u32, 561u32, "species"),
        NodeRecord::new(620u32, 543u32, "genus"),
        NodeRecord::new(622u32, 620u32, "species"),
        NodeRecord::new(2157u32, 131567u32, "superkingdom"),
        NodeRecord::new(2284u32, 2157u32, "genus"),
        NodeRecord::new(2285u32, 2284u32, "species"),
        NodeRecord::new(2759u32, 131567u32, "superkingdom"),
        NodeRecord::new(3497u32, 2759u32, "genus"),
        NodeRecord::new(37577u32, 2759u32, "genus"),
    ];
    let names = vec![
        NameRecord::scientific(1u32, "root"),
        NameRecord::scientific(131567u32, "cellular organisms"),
        NameRecord::scientific(2u32, "Bacteria"),
        NameRecord::new(2u32, "eubacteria", "genbank common name"),
        NameRecord::scientific(1224u32, "Proteobacteria"),
        NameRecord::scientific(1236u32, "Gammaproteobacteria"),
        NameRecord::scientific(91347u32, "Enterobacterales"),
        NameRecord::scientific(543u32, "Enterobacteriaceae"),
        NameRecord::scientific(561u32, "Escherichia"),
        NameRecord::scientific(562u32, "Escherichia coli"),
        NameRecord::new(562u32, "E. coli", "common name"),
        NameRecord::scientific(620u32, "Shigella"),
        NameRecord::scientific(622u32, "Shigella dysenteriae"),
        NameRecord::scientific(2157u32, "Archaea"),
        NameRecord::scientific(2284u32, "Sulfolobus"),
        NameRecord::scientific(2285u32, "Sulfolobus acidocaldarius"),
        NameRecord::scientific(2759u32, "Eukaryota"),
        NameRecord::scientific(3497u32, "Morus"),
        NameRecord::scientific(37577u32, "Morus"),
    ];
    let merged = vec![MergedRecord::new(666666u32, 562u32)];
    TaxonomyDB::from_tables(nodes, names, Some(merged)).unwrap()
}

pub fn taxon(taxid: u32, db: &TaxonomyDB) -> Taxon<'_> {
    Taxon::new(TaxonId::new(taxid), db).unwrap()
}
