pub mod stage2_partition;
pub mod stage3_group;
pub mod stage4_report;
