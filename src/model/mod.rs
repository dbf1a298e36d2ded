pub mod error;
pub mod named_set;
pub mod partition;
pub mod signature;

pub use error::VennError;
pub use named_set::NamedSet;
pub use partition::{GroupedPartition, MembershipClass, PartitionResult};
pub use signature::{MAX_REGION_ARITY, Signature};
