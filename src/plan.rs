// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plan orchestration: from a raw pattern collection to a complete plan.
//!
//! [`build_plan`] is the single entry point of the core. It deduplicates,
//! sorts, buckets by tier, plans the allocation, distributes each tier, and
//! concatenates the results in tier order, padding with empty partitions up
//! to the requested count. The whole computation is a pure function of the
//! pattern collection, the partition count and the configuration.
//!
//! # Invariants of a returned plan
//!
//! - Exactly `total_partitions` partitions, always.
//! - Every unique input pattern appears in exactly one partition.
//! - No partition mixes tiers.
//! - No partition exceeds the hard byte limit, except one holding a single
//!   pattern that is itself over the limit.

use std::collections::HashSet;

use log::{debug, info};
use strum::IntoEnumIterator;

use crate::alloc;
use crate::config::PackConfig;
use crate::distribute::distribute;
use crate::error::PackError;
use crate::pattern::Pattern;
use crate::tier::{Tier, TierBuckets};

/// One matcher lane's worth of patterns.
///
/// Ordered, holds patterns of a single tier (or none), created once by the
/// distributor and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    patterns: Vec<Pattern>,
}

impl Partition {
    /// A partition holding the given patterns.
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// A partition holding nothing (an idle lane).
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Number of patterns held.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True for an idle lane.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The patterns, in packing order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Consume the partition, yielding its patterns.
    pub fn into_patterns(self) -> Vec<Pattern> {
        self.patterns
    }

    /// Sum of member pattern lengths.
    pub fn byte_total(&self) -> usize {
        self.patterns.iter().map(Pattern::len).sum()
    }

    /// Length of the longest member, or 0 when empty.
    pub fn max_pattern_len(&self) -> usize {
        self.patterns.iter().map(Pattern::len).max().unwrap_or(0)
    }

    /// Length of the shortest member, or 0 when empty.
    pub fn min_pattern_len(&self) -> usize {
        self.patterns.iter().map(Pattern::len).min().unwrap_or(0)
    }
}

/// The complete packing result: exactly the requested number of partitions,
/// tier sections in tier order, idle lanes padded on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    partitions: Vec<Partition>,
}

impl PartitionPlan {
    /// Number of partitions (always the requested count).
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    /// True only for a zero-partition request.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// The partitions, in lane order.
    pub fn partitions(&self) -> &[Partition] {
        &self.partitions
    }

    /// Iterate over the partitions in lane order.
    pub fn iter(&self) -> std::slice::Iter<'_, Partition> {
        self.partitions.iter()
    }

    /// Total number of patterns across all partitions.
    pub fn total_patterns(&self) -> usize {
        self.partitions.iter().map(Partition::len).sum()
    }
}

impl<'a> IntoIterator for &'a PartitionPlan {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pack `raw_patterns` into exactly `total_partitions` partitions.
///
/// Duplicate patterns are dropped (first occurrence wins), then patterns are
/// stably sorted by length, bucketed by tier, and distributed. Zero input
/// patterns is not an error: the result is all idle lanes.
///
/// # Errors
///
/// - [`PackError::InfeasibleAllocation`]: more non-empty tiers than
///   `total_partitions`.
/// - [`PackError::CapacityOverflow`]: the hard byte limit forced more
///   partitions than `total_partitions`; the error carries the minimum
///   count that would succeed.
pub fn build_plan(
    raw_patterns: Vec<Pattern>,
    total_partitions: usize,
    config: &PackConfig,
) -> Result<PartitionPlan, PackError> {
    let mut unique = dedupe(raw_patterns);
    debug!("{} unique patterns after deduplication", unique.len());

    // Stable by-length sort: input order is the tie-break among equal
    // lengths, keeping the plan deterministic.
    unique.sort_by_key(Pattern::len);

    let mut buckets = TierBuckets::build(unique, config);
    if buckets.total_bytes() == 0 {
        return Ok(PartitionPlan {
            partitions: (0..total_partitions).map(|_| Partition::empty()).collect(),
        });
    }

    let allocation = alloc::plan(buckets.byte_totals(), total_partitions)?;
    for tier in Tier::iter() {
        info!(
            "{} tier: {} bytes -> {} partitions",
            tier,
            buckets.bytes(tier),
            allocation.get(tier)
        );
    }

    let mut partitions: Vec<Partition> = Vec::with_capacity(total_partitions);
    for tier in Tier::iter() {
        let allocated = allocation.get(tier);
        if allocated > 0 {
            let tier_patterns = buckets.take_patterns(tier);
            partitions.extend(distribute(tier_patterns, allocated, config.hard_byte_limit));
        }
    }

    if partitions.len() > total_partitions {
        return Err(PackError::CapacityOverflow {
            produced: partitions.len(),
            requested: total_partitions,
        });
    }
    while partitions.len() < total_partitions {
        partitions.push(Partition::empty());
    }

    Ok(PartitionPlan { partitions })
}

/// Drop exact duplicates, keeping the first occurrence of each pattern.
fn dedupe(patterns: Vec<Pattern>) -> Vec<Pattern> {
    let mut seen: HashSet<Pattern> = HashSet::with_capacity(patterns.len());
    patterns
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}
