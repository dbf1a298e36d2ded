use std::collections::BTreeSet;

/// One of the compared collections. The label is carried for diagnostics
/// and reports only; partitioning uses the position of the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedSet {
    pub label: String,
    pub elements: BTreeSet<String>,
}

impl NamedSet {
    pub fn new<L, I, S>(label: L, elements: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            elements: elements.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, element: &str) -> bool {
        self.elements.contains(element)
    }
}
