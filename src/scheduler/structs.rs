pub mod checkpoint_report;
pub mod checkpoint_scheduler;
