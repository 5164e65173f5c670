//! Command handlers - one per workflow.

pub mod delete;
pub mod info;
pub mod list;
