// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

// Each integration test binary compiles this module independently and not
// all of them use every helper.
#![allow(dead_code)]

use lanepack::{Partition, PartitionPlan, Pattern};

/// Build distinct patterns with the given lengths.
///
/// The first bytes encode the index so equal-length patterns stay unique.
pub fn patterns_of_lens(lens: &[usize]) -> Vec<Pattern> {
    lens.iter()
        .enumerate()
        .map(|(i, &len)| {
            let mut bytes = vec![b'x'; len];
            bytes[0] = (i & 0xFF) as u8;
            if len > 1 {
                bytes[1] = ((i >> 8) & 0xFF) as u8;
            }
            Pattern::new(bytes)
        })
        .collect()
}

/// All patterns of a plan, flattened in lane order.
pub fn flatten(plan: &PartitionPlan) -> Vec<Pattern> {
    plan.iter()
        .flat_map(|p| p.patterns().iter().cloned())
        .collect()
}

/// Assert the plan holds exactly the given patterns, each exactly once.
pub fn assert_conserves(plan: &PartitionPlan, expected: &[Pattern]) {
    let mut actual = flatten(plan);
    let mut expected: Vec<Pattern> = expected.to_vec();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected, "plan gained or lost patterns");
}

/// Assert no partition exceeds `limit` bytes unless it holds a single
/// pattern that is itself over the limit.
pub fn assert_capacity(plan: &PartitionPlan, limit: usize) {
    for (i, partition) in plan.iter().enumerate() {
        let over_limit_single = partition.len() == 1 && partition.byte_total() > limit;
        assert!(
            partition.byte_total() <= limit || over_limit_single,
            "partition {} holds {} bytes over the {} limit",
            i,
            partition.byte_total(),
            limit
        );
    }
}

/// Assert every partition holds patterns of a single length tier.
pub fn assert_tier_purity(plan: &PartitionPlan, config: &lanepack::PackConfig) {
    for (i, partition) in plan.iter().enumerate() {
        let tiers: std::collections::HashSet<lanepack::Tier> = partition
            .patterns()
            .iter()
            .map(|p| lanepack::Tier::classify(p.len(), config))
            .collect();
        assert!(tiers.len() <= 1, "partition {} mixes tiers {:?}", i, tiers);
    }
}

/// Non-empty partitions of a plan.
pub fn occupied(plan: &PartitionPlan) -> Vec<&Partition> {
    plan.iter().filter(|p| !p.is_empty()).collect()
}
