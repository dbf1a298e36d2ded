use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::input::SetSource;
use crate::input::mutations::MutationKind;
use crate::model::{GroupedPartition, NamedSet, PartitionResult, Signature};
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    GeneSummary, InputSummary, RegionCount, RegionSummary, SummaryData, join_mutations,
    region_label,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub sources: &'a [SetSource],
    pub sets: &'a [NamedSet],
    pub partition: &'a PartitionResult,
    pub grouped: Option<&'a GroupedPartition>,
    pub kind: MutationKind,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    let (signatures, complete) = report_signatures(input.partition);

    write_regions_tsv(input, &signatures, &out_dir.join("regions.tsv"))?;
    if let Some(grouped) = input.grouped {
        write_genes_tsv(input, grouped, &signatures, &out_dir.join("genes.tsv"))?;
    }

    let summary = build_summary(input, &signatures, complete);
    write_text(
        &out_dir.join("summary.json"),
        &render_summary_json(&summary)?,
    )?;
    write_text(&out_dir.join("report.txt"), &render_report_text(&summary))?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

/// Every region when the arity allows it, otherwise only the observed ones.
fn report_signatures(partition: &PartitionResult) -> (Vec<Signature>, bool) {
    match Signature::all_nonempty(partition.arity()) {
        Ok(all) => (all, true),
        Err(err) => {
            tracing::warn!(%err, "reporting observed regions only");
            let observed = partition
                .classes()
                .iter()
                .map(|c| c.signature.clone())
                .collect();
            (observed, false)
        }
    }
}

fn elements_of<'a>(partition: &'a PartitionResult, signature: &Signature) -> &'a [String] {
    partition
        .class(signature)
        .map(|c| c.elements.as_slice())
        .unwrap_or(&[])
}

fn write_regions_tsv(
    input: &ReportInput<'_>,
    signatures: &[Signature],
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "signature\tlabel\tn_sets\tcount\tmutations")?;
    let labels = input.partition.labels();
    for signature in signatures {
        let elements = elements_of(input.partition, signature);
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            signature.key(),
            region_label(signature, labels),
            signature.len(),
            elements.len(),
            join_mutations(elements),
        )?;
    }
    w.flush()
}

fn write_genes_tsv(
    input: &ReportInput<'_>,
    grouped: &GroupedPartition,
    signatures: &[Signature],
    path: &Path,
) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "gene\tsignature\tlabel\tcount\tmutations")?;
    let labels = input.partition.labels();
    for (gene, partition) in grouped.iter() {
        for signature in signatures {
            let elements = elements_of(partition, signature);
            writeln!(
                w,
                "{}\t{}\t{}\t{}\t{}",
                gene,
                signature.key(),
                region_label(signature, labels),
                elements.len(),
                join_mutations(elements),
            )?;
        }
    }
    w.flush()
}

fn build_summary(input: &ReportInput<'_>, signatures: &[Signature], complete: bool) -> SummaryData {
    let labels = input.partition.labels();

    let inputs = input
        .sources
        .iter()
        .zip(input.sets)
        .map(|(source, set)| InputSummary {
            label: set.label.clone(),
            path: source.path.display().to_string(),
            n_mutations: set.len(),
        })
        .collect();

    let regions = signatures
        .iter()
        .map(|signature| {
            let elements = elements_of(input.partition, signature);
            RegionSummary {
                key: signature.key(),
                label: region_label(signature, labels),
                sets: signature.indices().to_vec(),
                count: elements.len(),
                mutations: elements.to_vec(),
            }
        })
        .collect();

    let genes = input.grouped.map(|grouped| {
        grouped
            .iter()
            .map(|(gene, partition)| GeneSummary {
                gene: gene.to_string(),
                total: partition.len(),
                regions: signatures
                    .iter()
                    .map(|signature| RegionCount {
                        key: signature.key(),
                        count: elements_of(partition, signature).len(),
                    })
                    .collect(),
            })
            .collect()
    });

    SummaryData {
        tool: input.tool_name.clone(),
        version: input.tool_version.clone(),
        kind: input.kind,
        arity: input.partition.arity(),
        n_union: input.partition.len(),
        complete_decomposition: complete,
        inputs,
        regions,
        genes,
        dropped: input
            .grouped
            .map(|g| g.dropped().to_vec())
            .unwrap_or_default(),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_report.rs"]
mod tests;
