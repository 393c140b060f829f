// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Output adapters over a finished [`PartitionPlan`].
//!
//! The core produces one plan; two independent artifacts are rendered from
//! it. [`HeaderEmitter`] writes the constant tables the synthesis flow
//! compiles into the matcher, [`MapEmitter`] writes the pattern-to-id map
//! the testbench uses to check reported match ids. Both implement
//! [`PlanEmitter`] so callers can pick an adapter at runtime.
//!
//! Artifacts are written as raw bytes: patterns are not required to be
//! valid text and must survive byte-exactly.

pub mod header;
pub mod map;

pub use header::HeaderEmitter;
pub use map::MapEmitter;

use std::io;

use crate::plan::PartitionPlan;

/// Capability to render a plan as one output artifact.
pub trait PlanEmitter {
    /// Write the artifact for `plan` to `out`.
    fn emit(&self, plan: &PartitionPlan, out: &mut dyn io::Write) -> io::Result<()>;
}
