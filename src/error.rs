// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for plan construction.
//!
//! Both failures are detected deterministically from the input, so a retry
//! without changing the partition count or the pattern set is pointless; the
//! remediation is always to request more partitions.

use thiserror::Error;

/// Failures of the packing computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// More non-empty length tiers than requested partitions: every
    /// non-empty tier needs at least one partition of its own, so the
    /// request is infeasible as stated.
    #[error(
        "{tiers} length tiers are present but only {requested} partitions were requested; \
         each tier needs at least one partition"
    )]
    InfeasibleAllocation { tiers: usize, requested: usize },

    /// The hard byte limit forced more partitions than requested. The
    /// balance heuristic cannot compress further; `produced` is the minimum
    /// partition count that can hold this pattern set.
    #[error(
        "packing produced {produced} partitions but only {requested} were requested; \
         rerun with at least {produced} partitions"
    )]
    CapacityOverflow { produced: usize, requested: usize },
}
