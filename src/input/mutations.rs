use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;

use crate::input::{InputError, open_maybe_gz};
use crate::model::NamedSet;

/// `<gene>:<position><change>` is an amino-acid mutation, anything else is
/// treated as a nucleotide mutation (`<position><base>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MutationKind {
    AminoAcid,
    Nucleotide,
}

impl MutationKind {
    pub fn detect(mutation: &str) -> Self {
        if mutation.contains(':') {
            MutationKind::AminoAcid
        } else {
            MutationKind::Nucleotide
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MutationKind::AminoAcid => "amino-acid",
            MutationKind::Nucleotide => "nucleotide",
        }
    }
}

/// Gene prefix of an amino-acid mutation (`"S:484K"` → `"S"`). Strings
/// without a `:` are returned whole.
pub fn gene_of(mutation: &str) -> &str {
    mutation
        .split_once(':')
        .map(|(gene, _)| gene)
        .unwrap_or(mutation)
}

/// Kind shared by every element of every set. Sets without any element
/// default to amino acid.
pub fn detect_kind(sets: &[NamedSet]) -> Result<MutationKind, InputError> {
    let mut found: Option<(MutationKind, &str)> = None;
    for set in sets {
        for element in &set.elements {
            let kind = MutationKind::detect(element);
            match found {
                None => found = Some((kind, element.as_str())),
                Some((first, first_element)) if first != kind => {
                    return Err(InputError::InvalidInput(format!(
                        "mixed mutation kinds: {first_element:?} is {} but {element:?} in set {:?} is {}",
                        first.as_str(),
                        set.label,
                        kind.as_str()
                    )));
                }
                Some(_) => {}
            }
        }
    }
    Ok(found.map(|(kind, _)| kind).unwrap_or(MutationKind::AminoAcid))
}

#[derive(Debug, Clone, Default)]
pub struct MutationList {
    pub mutations: BTreeSet<String>,
    pub n_records: usize,
    pub n_duplicates: usize,
    pub n_below_threshold: usize,
}

/// Parses a mutation list: one record per line, tab-separated
/// `mutation[\tproportion[\t...]]`, optional `mutation` header, `#`
/// comments. Records below `min_proportion` are skipped when the file has
/// a proportion column.
pub fn parse_mutation_list(
    path: &Path,
    min_proportion: Option<f64>,
) -> Result<MutationList, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut out = MutationList::default();
    let mut line_no = 0usize;
    let mut seen_record = false;
    let mut missing_proportion = false;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t').map(str::trim);
        let mutation = fields.next().unwrap_or("");
        if !seen_record && mutation.eq_ignore_ascii_case("mutation") {
            seen_record = true;
            continue;
        }
        seen_record = true;
        if mutation.is_empty() {
            return Err(InputError::Parse {
                path: path.display().to_string(),
                line: line_no,
                msg: "empty mutation column".to_string(),
            });
        }
        out.n_records += 1;

        let proportion = match fields.next().filter(|f| !f.is_empty()) {
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| InputError::Parse {
                path: path.display().to_string(),
                line: line_no,
                msg: format!("invalid proportion {raw:?}"),
            })?),
            None => None,
        };

        if let Some(min) = min_proportion {
            match proportion {
                Some(p) if p < min => {
                    out.n_below_threshold += 1;
                    continue;
                }
                Some(_) => {}
                None => missing_proportion = true,
            }
        }

        if !out.mutations.insert(mutation.to_string()) {
            out.n_duplicates += 1;
        }
    }

    if out.n_duplicates > 0 {
        tracing::warn!(
            path = %path.display(),
            n_duplicates = out.n_duplicates,
            "duplicate mutations collapsed"
        );
    }
    if missing_proportion {
        tracing::warn!(
            path = %path.display(),
            "records without a proportion column kept regardless of --min-proportion"
        );
    }

    Ok(out)
}
