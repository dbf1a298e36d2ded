use serde::Serialize;

use crate::input::mutations::MutationKind;
use crate::model::Signature;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub label: String,
    pub path: String,
    pub n_mutations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionSummary {
    pub key: String,
    pub label: String,
    pub sets: Vec<usize>,
    pub count: usize,
    pub mutations: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionCount {
    pub key: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneSummary {
    pub gene: String,
    pub total: usize,
    pub regions: Vec<RegionCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: String,
    pub version: String,
    pub kind: MutationKind,
    pub arity: usize,
    pub n_union: usize,
    pub complete_decomposition: bool,
    pub inputs: Vec<InputSummary>,
    pub regions: Vec<RegionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genes: Option<Vec<GeneSummary>>,
    pub dropped: Vec<String>,
}

/// Human-readable region name: `only A`, `A & C`, or `all` for the region
/// shared by every set.
pub fn region_label(signature: &Signature, labels: &[String]) -> String {
    let name = |idx: usize| {
        labels
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("#{idx}"))
    };
    match signature.indices() {
        [] => String::new(),
        [only] => format!("only {}", name(*only)),
        indices if indices.len() == labels.len() && labels.len() > 1 => "all".to_string(),
        indices => indices
            .iter()
            .map(|&idx| name(idx))
            .collect::<Vec<_>>()
            .join(" & "),
    }
}

pub fn join_mutations(mutations: &[String]) -> String {
    mutations.join(",")
}
