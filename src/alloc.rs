// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Allocation planner: divide the lane budget between the tiers.
//!
//! Each non-empty tier must receive at least one partition (its matcher
//! variant exists in hardware exactly when it has patterns to hold). The
//! rest of the budget is handed out proportionally to byte volume, and any
//! rounding slack goes to the heaviest tier.
//!
//! # Algorithm
//!
//! Given per-tier byte totals and a budget of N partitions:
//!
//! 1. Every tier with a non-zero byte total gets a baseline of 1 partition.
//!    If that alone exceeds N, the request is infeasible
//!    ([`PackError::InfeasibleAllocation`]).
//! 2. Each non-empty tier's proportional share is
//!    `(tier_bytes / total_bytes) * N`, rounded half-to-even. The share
//!    minus the baseline, when positive, is granted from the remaining
//!    budget (never more than what remains), in tier order.
//! 3. Remaining budget is granted one partition at a time to the tier with
//!    the largest byte total; on a tie the earliest tier wins.
//!
//! The result always sums to exactly N.

use strum::IntoEnumIterator;

use crate::error::PackError;
use crate::tier::{Tier, NTIERS};

/// Round half-to-even, for non-negative values.
///
/// Proportional shares are resolved to whole partitions in exactly one
/// place, and the tables shipped with the hardware were generated under
/// banker's rounding, so 0.5 → 0, 1.5 → 2, 2.5 → 2.
fn round_half_even(x: f64) -> usize {
    debug_assert!(x >= 0.0, "round_half_even expects non-negative input");
    let floor = x.floor();
    let frac = x - floor;
    let floor = floor as usize;
    if frac > 0.5 {
        floor + 1
    } else if frac < 0.5 {
        floor
    } else if floor % 2 == 0 {
        floor
    } else {
        floor + 1
    }
}

/// Per-tier partition counts, summing to the requested total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation([usize; NTIERS]);

impl Allocation {
    /// Number of partitions reserved for one tier.
    pub fn get(&self, tier: Tier) -> usize {
        self.0[tier.index()]
    }

    /// Counts in tier order.
    pub fn counts(&self) -> [usize; NTIERS] {
        self.0
    }

    /// Sum of all tier counts (equals the requested total on success).
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }
}

/// Compute how many of `total_partitions` each tier receives.
///
/// `tier_bytes` are the per-tier byte totals in tier order. The caller
/// handles the all-empty case before planning; with at least one non-empty
/// tier the returned counts sum to exactly `total_partitions`.
///
/// # Errors
///
/// [`PackError::InfeasibleAllocation`] when more tiers are non-empty than
/// there are partitions to hand out.
pub fn plan(tier_bytes: [usize; NTIERS], total_partitions: usize) -> Result<Allocation, PackError> {
    let total_bytes: usize = tier_bytes.iter().sum();
    debug_assert!(total_bytes > 0, "plan requires at least one pattern byte");

    let mut allocations = [0usize; NTIERS];
    let nonempty = tier_bytes.iter().filter(|&&b| b > 0).count();

    if nonempty > total_partitions {
        return Err(PackError::InfeasibleAllocation {
            tiers: nonempty,
            requested: total_partitions,
        });
    }

    // Baseline: one partition per non-empty tier.
    let mut remaining = total_partitions - nonempty;
    for tier in Tier::iter() {
        if tier_bytes[tier.index()] > 0 {
            allocations[tier.index()] = 1;
        }
    }

    // Proportional extras, in tier order.
    if remaining > 0 {
        for tier in Tier::iter() {
            let bytes = tier_bytes[tier.index()];
            if bytes == 0 {
                continue;
            }
            let share = (bytes as f64 / total_bytes as f64) * total_partitions as f64;
            let rounded = round_half_even(share);
            if rounded > 1 {
                let take = (rounded - 1).min(remaining);
                allocations[tier.index()] += take;
                remaining -= take;
            }
        }
    }

    // Rounding slack goes to the heaviest tier, earliest tier on ties.
    while remaining > 0 {
        let heaviest = Tier::iter()
            .max_by_key(|t| (tier_bytes[t.index()], std::cmp::Reverse(t.index())))
            .unwrap();
        allocations[heaviest.index()] += 1;
        remaining -= 1;
    }

    let allocation = Allocation(allocations);
    debug_assert_eq!(allocation.total(), total_partitions);
    Ok(allocation)
}
