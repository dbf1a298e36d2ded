//! Exact-membership partitioning of viral variant mutation sets.
//!
//! - [`partition`] splits the union of N >= 2 named sets into disjoint
//!   classes keyed by the exact subset of sets containing each element.
//! - [`group_by_category`] further splits every class by a caller-supplied
//!   category (e.g. the gene of a mutation), keeping every category of a
//!   fixed universe even when it has no hits.
//!
//! Both are pure and deterministic: elements are sorted within a class and
//! classes are sorted by signature.

pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use model::{
    GroupedPartition, MAX_REGION_ARITY, MembershipClass, NamedSet, PartitionResult, Signature,
    VennError,
};
pub use pipeline::stage2_partition::partition;
pub use pipeline::stage3_group::{UnknownCategoryPolicy, group_by_category};
