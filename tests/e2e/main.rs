//! E2E test suite entry point.

#[path = "../common/mod.rs"]
mod common;
mod decree_workflow;
mod rewards_workflow;
