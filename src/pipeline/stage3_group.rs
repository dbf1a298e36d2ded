use std::collections::{BTreeMap, HashMap};

use crate::model::{GroupedPartition, MembershipClass, PartitionResult, VennError};

/// What to do with an element whose category is not in the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCategoryPolicy {
    #[default]
    Error,
    Drop,
}

/// Splits every membership class of `result` by `classify` and files the
/// pieces under their category. All categories of `universe` are present in
/// the output, in universe order, even when nothing classifies into them.
/// Duplicate universe entries collapse onto the first occurrence.
pub fn group_by_category<F, S>(
    result: &PartitionResult,
    mut classify: F,
    universe: &[S],
    policy: UnknownCategoryPolicy,
) -> Result<GroupedPartition, VennError>
where
    F: FnMut(&str) -> String,
    S: AsRef<str>,
{
    let mut slots: HashMap<&str, usize> = HashMap::with_capacity(universe.len());
    let mut categories: Vec<&str> = Vec::with_capacity(universe.len());
    for category in universe {
        let category = category.as_ref();
        if slots.contains_key(category) {
            tracing::warn!(category, "duplicate category in universe; keeping first");
            continue;
        }
        slots.insert(category, categories.len());
        categories.push(category);
    }

    let mut buckets: Vec<Vec<MembershipClass>> = vec![Vec::new(); categories.len()];
    let mut dropped = Vec::new();

    for class in result.classes() {
        let mut split: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for element in &class.elements {
            let category = classify(element);
            match slots.get(category.as_str()) {
                Some(&slot) => split.entry(slot).or_default().push(element.clone()),
                None => match policy {
                    UnknownCategoryPolicy::Error => {
                        return Err(VennError::UnknownCategory {
                            element: element.clone(),
                            category,
                        });
                    }
                    UnknownCategoryPolicy::Drop => dropped.push(element.clone()),
                },
            }
        }
        // classes arrive in signature order, so each bucket stays sorted
        for (slot, elements) in split {
            buckets[slot].push(MembershipClass {
                signature: class.signature.clone(),
                elements,
            });
        }
    }

    if !dropped.is_empty() {
        dropped.sort_unstable();
        tracing::warn!(
            n_dropped = dropped.len(),
            "elements outside the category universe were dropped"
        );
    }

    let entries = categories
        .into_iter()
        .zip(buckets)
        .map(|(category, classes)| {
            (
                category.to_string(),
                PartitionResult::from_classes(result.arity(), result.labels().to_vec(), classes),
            )
        })
        .collect();

    Ok(GroupedPartition::from_entries(
        result.arity(),
        entries,
        dropped,
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_group.rs"]
mod tests;
