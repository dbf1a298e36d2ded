use thiserror::Error;

/// Errors raised by the partitioning core. All of them are caller or
/// configuration mistakes; none are transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VennError {
    #[error("at least 2 input sets are required to compare, got {found}")]
    InvalidArity { found: usize },

    #[error("signature index {index} is out of range for {arity} input sets")]
    InvalidSignature { index: usize, arity: usize },

    #[error("signature must name at least one input set")]
    EmptySignature,

    #[error("element {element:?} classified into unknown category {category:?}")]
    UnknownCategory { element: String, category: String },

    #[error("cannot enumerate all regions of {arity} sets (limit is {max})")]
    TooManyRegions { arity: usize, max: usize },
}
