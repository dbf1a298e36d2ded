use crate::report::SummaryData;

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Variant Mutation Comparison Report\n");
    out.push_str("==================================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Mutation kind: {}\n", data.kind.as_str()));
    for input in &data.inputs {
        out.push_str(&format!(
            "{}: {} mutations ({})\n",
            input.label, input.n_mutations, input.path
        ));
    }
    out.push_str(&format!("Union: {} mutations\n\n", data.n_union));

    out.push_str("2. Exclusive mutations\n");
    for region in data.regions.iter().filter(|r| r.sets.len() == 1) {
        out.push_str(&format!("{}: {}\n", region.label, region.count));
    }
    out.push('\n');

    out.push_str("3. Shared mutations\n");
    let mut any_shared = false;
    for region in data.regions.iter().filter(|r| r.sets.len() > 1) {
        any_shared = true;
        out.push_str(&format!("{}: {}\n", region.label, region.count));
    }
    if !any_shared {
        out.push_str("none\n");
    }
    if !data.complete_decomposition {
        out.push_str("Note: too many sets to list every region; only observed regions are shown.\n");
    }
    out.push('\n');

    if let Some(genes) = &data.genes {
        out.push_str("4. Genes\n");
        let mut silent = Vec::new();
        for gene in genes {
            if gene.total == 0 {
                silent.push(gene.gene.as_str());
                continue;
            }
            let hit_regions = gene.regions.iter().filter(|r| r.count > 0).count();
            out.push_str(&format!(
                "{}: {} mutations across {} regions\n",
                gene.gene, gene.total, hit_regions
            ));
        }
        if !silent.is_empty() {
            out.push_str(&format!("Genes without mutations: {}\n", silent.join(", ")));
        }
        out.push('\n');
    }

    if !data.dropped.is_empty() {
        out.push_str("5. Caveats\n");
        out.push_str(&format!(
            "Dropped (gene outside universe): {}\n",
            data.dropped.join(", ")
        ));
    }

    out
}
