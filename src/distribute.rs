// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greedy distributor: pack one tier's patterns into its allocated lanes.
//!
//! Patterns arrive in ascending length order and are appended to an
//! accumulator partition. Two rules close the accumulator and start a new
//! one, in priority order:
//!
//! 1. **Hard limit**: adding the pattern would push the accumulator past the
//!    lane's byte capacity. This rule fires unconditionally, even after the
//!    allocated partition count has been reached, so a pathological size
//!    distribution can produce more partitions than allocated. The
//!    orchestrator detects that as an overflow; this module never hides it.
//! 2. **Balance target**: the accumulator already holds its fair share
//!    (`tier_bytes / allocated`) of the tier's bytes. This rule only fires
//!    while fewer than `allocated - 1` partitions are closed, so the last
//!    lane absorbs the tail.
//!
//! A pattern longer than the lane capacity closes the accumulator (even a
//! still-empty one) and then sits alone in an over-limit partition; the lane
//! capacity cannot split a single pattern.

use crate::pattern::Pattern;
use crate::plan::Partition;

/// Pack an ascending-length pattern sequence into `allocated` partitions
/// under `hard_limit` bytes per partition.
///
/// Emits exactly `allocated` empty partitions when `patterns` is empty.
/// Otherwise the count is usually `allocated`, but may fall short when the
/// balance target is never reached (the orchestrator pads) or overshoot
/// when the hard limit forces extra closes (the orchestrator reports an
/// overflow).
pub fn distribute(patterns: Vec<Pattern>, allocated: usize, hard_limit: usize) -> Vec<Partition> {
    if allocated < 1 {
        return Vec::new();
    }
    if patterns.is_empty() {
        return (0..allocated).map(|_| Partition::empty()).collect();
    }

    let total_bytes: usize = patterns.iter().map(Pattern::len).sum();
    let target_bytes = total_bytes as f64 / allocated as f64;

    let mut partitions: Vec<Partition> = Vec::with_capacity(allocated);
    let mut current: Vec<Pattern> = Vec::new();
    let mut current_bytes = 0usize;

    for pattern in patterns {
        let len = pattern.len();

        if current_bytes + len > hard_limit {
            partitions.push(Partition::new(std::mem::take(&mut current)));
            current.push(pattern);
            current_bytes = len;
            continue;
        }

        if current_bytes as f64 >= target_bytes && partitions.len() < allocated - 1 {
            partitions.push(Partition::new(std::mem::take(&mut current)));
            current.push(pattern);
            current_bytes = len;
        } else {
            current.push(pattern);
            current_bytes += len;
        }
    }

    partitions.push(Partition::new(current));
    partitions
}
