//! Application-level orchestration.
//!
//! This module owns the run pipeline: reading the results tree, aggregating
//! it into a report, and post-processing that report into charts. The CLI
//! layer calls into this module and handles output and exports itself.

mod collect;
mod pipeline;
mod post_process;

pub(crate) use pipeline::build_report;
pub(crate) use post_process::render_report;
