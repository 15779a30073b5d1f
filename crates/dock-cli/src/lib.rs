//! Dock planner CLI - adapters around the planning core.
//!
//! This crate provides the `dockplan` binary and its I/O pieces:
//! - ingest: location list parsing
//! - egress: flight coordinate export
//! - report: console report rendering

pub mod config;
pub mod egress;
pub mod ingest;
pub mod report;

pub use config::Config;
pub use ingest::{load_points, read_points, IngestOutcome};
