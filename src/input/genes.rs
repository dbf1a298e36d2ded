use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};

/// SARS-CoV-2 reference genes, in genome order.
const SARS_COV_2_GENES: &[&str] = &[
    "ORF1a", "ORF1b", "S", "ORF3a", "E", "M", "ORF6", "ORF7a", "ORF7b", "ORF8", "N", "ORF9b",
];

pub fn builtin_genes() -> &'static [&'static str] {
    SARS_COV_2_GENES
}

pub fn builtin_universe() -> Vec<String> {
    SARS_COV_2_GENES.iter().map(|g| g.to_string()).collect()
}

/// One gene per line; the first tab-separated column is used, blank lines
/// and `#` comments are skipped. Order is preserved.
pub fn load_gene_universe(path: &Path) -> Result<Vec<String>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut genes = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let gene = line.split('\t').next().unwrap_or("").trim();
        if !gene.is_empty() {
            genes.push(gene.to_string());
        }
    }

    if genes.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "gene universe file {} is empty",
            path.display()
        )));
    }

    Ok(genes)
}
