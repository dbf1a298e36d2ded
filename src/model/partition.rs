use std::collections::HashMap;

use serde::Serialize;

use crate::model::error::VennError;
use crate::model::signature::Signature;

/// All elements whose exact membership equals `signature`, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MembershipClass {
    pub signature: Signature,
    pub elements: Vec<String>,
}

/// Disjoint partition of the union of `arity` input sets, one class per
/// observed signature, classes sorted by signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionResult {
    arity: usize,
    labels: Vec<String>,
    classes: Vec<MembershipClass>,
}

impl PartitionResult {
    /// `classes` must be sorted by signature with unique signatures.
    pub(crate) fn from_classes(
        arity: usize,
        labels: Vec<String>,
        classes: Vec<MembershipClass>,
    ) -> Self {
        debug_assert!(
            classes
                .windows(2)
                .all(|w| w[0].signature < w[1].signature)
        );
        Self {
            arity,
            labels,
            classes,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn classes(&self) -> &[MembershipClass] {
        &self.classes
    }

    /// Number of distinct elements across all classes.
    pub fn len(&self) -> usize {
        self.classes.iter().map(|c| c.elements.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.iter().all(|c| c.elements.is_empty())
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes
            .iter()
            .flat_map(|c| c.elements.iter().map(String::as_str))
    }

    /// Elements with exactly this membership; empty when the region was
    /// never observed. Fails only for signatures that cannot belong to this
    /// partition.
    pub fn elements_for(&self, signature: &Signature) -> Result<&[String], VennError> {
        self.check_signature(signature)?;
        Ok(self.lookup(signature))
    }

    pub fn class(&self, signature: &Signature) -> Option<&MembershipClass> {
        self.classes
            .binary_search_by(|c| c.signature.cmp(signature))
            .ok()
            .map(|idx| &self.classes[idx])
    }

    /// The full Venn decomposition: every non-empty signature of this arity
    /// with its elements, empty regions included.
    pub fn regions(&self) -> Result<Vec<(Signature, &[String])>, VennError> {
        let signatures = Signature::all_nonempty(self.arity)?;
        Ok(signatures
            .into_iter()
            .map(|sig| {
                let elements = self.lookup(&sig);
                (sig, elements)
            })
            .collect())
    }

    fn check_signature(&self, signature: &Signature) -> Result<(), VennError> {
        match signature.max_index() {
            None => Err(VennError::EmptySignature),
            Some(index) if index >= self.arity => Err(VennError::InvalidSignature {
                index,
                arity: self.arity,
            }),
            Some(_) => Ok(()),
        }
    }

    fn lookup(&self, signature: &Signature) -> &[String] {
        self.class(signature)
            .map(|c| c.elements.as_slice())
            .unwrap_or(&[])
    }
}

/// Category → partition restricted to that category. Every category of the
/// universe is present, in universe order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedPartition {
    arity: usize,
    entries: Vec<(String, PartitionResult)>,
    index: HashMap<String, usize>,
    dropped: Vec<String>,
}

impl GroupedPartition {
    pub(crate) fn from_entries(
        arity: usize,
        entries: Vec<(String, PartitionResult)>,
        dropped: Vec<String>,
    ) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, (category, _))| (category.clone(), idx))
            .collect();
        Self {
            arity,
            entries,
            index,
            dropped,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn get(&self, category: &str) -> Option<&PartitionResult> {
        self.index.get(category).map(|&idx| &self.entries[idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PartitionResult)> + '_ {
        self.entries.iter().map(|(c, p)| (c.as_str(), p))
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elements discarded because their category was outside the universe.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }
}
