//! Core harness for running named pattern demonstrations.
//!
//! The pieces, leaves first:
//!
//! - [`demo`]: the [`Demo`](demo::Demo) trait and its result types. A demo
//!   is a named, self-contained routine that yields an ordered event
//!   transcript plus a final status.
//! - [`registry`]: [`DemoRegistry`](registry::DemoRegistry), an ordered,
//!   uniquely keyed collection of demos.
//! - [`runner`]: executes registered demos one at a time with isolation and
//!   a per-demo timeout, collecting a [`RunSummary`](runner::RunSummary).
//! - [`report`]: renders a summary to deterministic text lines.
//!
//! ```text
//! Runner --list()--> DemoRegistry
//!    |
//!    |  per demo: spawn_blocking(run) bounded by timeout
//!    v
//! RunSummary --render()--> Vec<String> --> stdout (CLI's job)
//! ```

pub mod demo;
pub mod registry;
pub mod report;
pub mod runner;

pub use demo::{Demo, DemoResult, DemoStatus, EventLog};
pub use registry::{DemoRegistry, RegistryError};
pub use report::render;
pub use runner::{RunOptions, RunSummary, run_all, run_selected};
