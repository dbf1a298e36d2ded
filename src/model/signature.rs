use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::model::error::VennError;

/// Largest arity for which every region of the Venn decomposition may be
/// enumerated (2^16 - 1 regions).
pub const MAX_REGION_ARITY: usize = 16;

/// Exact membership of an element: the subset of input indices whose sets
/// contain it. Equality is subset equality; ordering is by cardinality,
/// then lexicographically by index, so exclusive regions come first and the
/// region shared by every set comes last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Signature {
    indices: Vec<usize>,
}

impl Signature {
    pub fn new<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        let mut indices: Vec<usize> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Caller guarantees `indices` is strictly increasing.
    pub(crate) fn from_sorted(indices: Vec<usize>) -> Self {
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        Self { indices }
    }

    pub fn single(index: usize) -> Self {
        Self {
            indices: vec![index],
        }
    }

    /// The region shared by all `arity` sets.
    pub fn full(arity: usize) -> Self {
        Self {
            indices: (0..arity).collect(),
        }
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            indices: (0..64).filter(|i| (bits >> i) & 1 == 1).collect(),
        }
    }

    /// Bitmask form, or `None` when an index does not fit in 64 bits.
    pub fn bits(&self) -> Option<u64> {
        let mut bits = 0u64;
        for &idx in &self.indices {
            if idx >= 64 {
                return None;
            }
            bits |= 1u64 << idx;
        }
        Some(bits)
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn max_index(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    /// Compact machine key, e.g. `"0,2"`.
    pub fn key(&self) -> String {
        let parts: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        parts.join(",")
    }

    /// Every non-empty subset of `0..arity`, in signature order.
    pub fn all_nonempty(arity: usize) -> Result<Vec<Signature>, VennError> {
        if arity > MAX_REGION_ARITY {
            return Err(VennError::TooManyRegions {
                arity,
                max: MAX_REGION_ARITY,
            });
        }
        let mut out: Vec<Signature> = (1u64..(1u64 << arity)).map(Signature::from_bits).collect();
        out.sort();
        Ok(out)
    }
}

impl Ord for Signature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.indices
            .len()
            .cmp(&other.indices.len())
            .then_with(|| self.indices.cmp(&other.indices))
    }
}

impl PartialOrd for Signature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/signature.rs"]
mod tests;
