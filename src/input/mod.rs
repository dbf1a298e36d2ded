use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::model::NamedSet;

pub mod genes;
pub mod mutations;

use mutations::parse_mutation_list;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error in {path}:{line}: {msg}")]
    Parse {
        path: String,
        line: usize,
        msg: String,
    },
}

/// Where one compared set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetSource {
    pub label: String,
    pub path: PathBuf,
}

impl SetSource {
    /// Accepts `LABEL=PATH`, or a bare `PATH` labelled by its file stem
    /// (`alpha.tsv.gz` → `alpha`).
    pub fn parse(arg: &str) -> Result<Self, InputError> {
        let (label, path) = match arg.split_once('=') {
            Some((label, path)) => (label.trim().to_string(), PathBuf::from(path.trim())),
            None => {
                let path = PathBuf::from(arg.trim());
                (label_from_path(&path), path)
            }
        };
        if label.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "empty set label in {arg:?}"
            )));
        }
        if path.as_os_str().is_empty() {
            return Err(InputError::InvalidInput(format!("empty set path in {arg:?}")));
        }
        Ok(Self { label, path })
    }
}

fn label_from_path(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    pub min_proportion: Option<f64>,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Reads every source into a `NamedSet`, preserving source order.
pub fn load_input(sources: &[SetSource], options: &LoadOptions) -> Result<Vec<NamedSet>, InputError> {
    let mut sets = Vec::with_capacity(sources.len());
    for source in sources {
        if sets.iter().any(|s: &NamedSet| s.label == source.label) {
            tracing::warn!(label = %source.label, "duplicate set label; reports will be ambiguous");
        }
        let list = parse_mutation_list(&source.path, options.min_proportion)?;
        tracing::info!(
            label = %source.label,
            path = %source.path.display(),
            n_mutations = list.mutations.len(),
            n_below_threshold = list.n_below_threshold,
            "loaded mutation list"
        );
        sets.push(NamedSet {
            label: source.label.clone(),
            elements: list.mutations,
        });
    }
    Ok(sets)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
