use std::collections::{BTreeMap, HashMap};

use crate::model::{MembershipClass, NamedSet, PartitionResult, Signature, VennError};

/// Partitions the union of `sets` by exact membership signature.
///
/// A single pass records, for every element, the indices of the sets that
/// contain it; elements are then grouped by that finished signature. Only
/// observed signatures become classes. Elements within a class are sorted
/// lexicographically and classes are sorted by signature.
pub fn partition(sets: &[NamedSet]) -> Result<PartitionResult, VennError> {
    if sets.len() < 2 {
        return Err(VennError::InvalidArity { found: sets.len() });
    }

    let total: usize = sets.iter().map(NamedSet::len).sum();
    let mut membership: HashMap<&str, Vec<usize>> = HashMap::with_capacity(total);

    for (idx, set) in sets.iter().enumerate() {
        for element in &set.elements {
            let indices = membership.entry(element.as_str()).or_default();
            // sets are visited in index order, so indices stay sorted
            if indices.last() != Some(&idx) {
                indices.push(idx);
            }
        }
    }

    let mut grouped: BTreeMap<Signature, Vec<String>> = BTreeMap::new();
    for (element, indices) in membership {
        grouped
            .entry(Signature::from_sorted(indices))
            .or_default()
            .push(element.to_string());
    }

    let classes: Vec<MembershipClass> = grouped
        .into_iter()
        .map(|(signature, mut elements)| {
            elements.sort_unstable();
            MembershipClass {
                signature,
                elements,
            }
        })
        .collect();

    tracing::debug!(
        n_sets = sets.len(),
        n_pairs = total,
        n_classes = classes.len(),
        "membership partition computed"
    );

    let labels = sets.iter().map(|s| s.label.clone()).collect();
    Ok(PartitionResult::from_classes(sets.len(), labels, classes))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_partition.rs"]
mod tests;
