//! Schedlens - CPU scheduler trace analyzer
//!
//! This library provides the core functionality for analyzing scheduler
//! simulation traces: reconstructing contiguous execution runs from a
//! per-tick occupancy log, deriving scheduling-quality metrics, and
//! comparing algorithms side-by-side.

pub mod cli;
pub mod compare;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod metrics;
pub mod report;
pub mod runs;
pub mod trace;
