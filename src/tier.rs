// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Length tiers: which matcher hardware handles a pattern.
//!
//! Patterns are matched by one of three hardware variants chosen purely by
//! pattern length: a 32-wide shift-register matcher, a 64-wide one, and a
//! long-pattern matcher. A lane is built from exactly one variant, so a lane
//! never holds patterns from two tiers.
//!
//! Tier order is load-bearing: `Short < Medium < Long` decides allocation
//! tie-breaks and the concatenation order of the final plan. Both iteration
//! ([`strum::IntoEnumIterator`]) and `Ord` follow declaration order.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

use crate::config::PackConfig;
use crate::pattern::Pattern;

/// Length classification of a pattern, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro, EnumIter)]
pub enum Tier {
    /// Length ≤ `tier_threshold_a` (default 32).
    Short,
    /// `tier_threshold_a` < length ≤ `tier_threshold_b` (default 33–64).
    Medium,
    /// Length > `tier_threshold_b` (default > 64).
    Long,
}

impl Tier {
    /// Classify a pattern length. Pure and total: every length maps to
    /// exactly one tier.
    pub fn classify(length: usize, config: &PackConfig) -> Tier {
        if length <= config.tier_threshold_a {
            Tier::Short
        } else if length <= config.tier_threshold_b {
            Tier::Medium
        } else {
            Tier::Long
        }
    }

    /// Position in tier order (for array indexing).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Short => write!(f, "short"),
            Tier::Medium => write!(f, "medium"),
            Tier::Long => write!(f, "long"),
        }
    }
}

/// Number of tiers, for fixed-size per-tier arrays.
pub const NTIERS: usize = <Tier as strum::EnumCount>::COUNT;

/// Per-tier pattern sequences with their byte totals.
///
/// Built by one pass over an ascending-length pattern sequence, so each
/// bucket is itself in ascending length order with relative input order
/// preserved among equal lengths.
#[derive(Debug, Default)]
pub struct TierBuckets {
    patterns: [Vec<Pattern>; NTIERS],
    bytes: [usize; NTIERS],
}

impl TierBuckets {
    /// Bucket an ascending-length pattern sequence by tier.
    pub fn build(patterns: Vec<Pattern>, config: &PackConfig) -> Self {
        let mut buckets = TierBuckets {
            patterns: Default::default(),
            bytes: [0; NTIERS],
        };
        for p in patterns {
            let tier = Tier::classify(p.len(), config);
            buckets.bytes[tier.index()] += p.len();
            buckets.patterns[tier.index()].push(p);
        }
        buckets
    }

    /// Patterns of one tier, ascending by length.
    pub fn patterns(&self, tier: Tier) -> &[Pattern] {
        &self.patterns[tier.index()]
    }

    /// Take ownership of one tier's patterns, leaving that bucket empty.
    pub fn take_patterns(&mut self, tier: Tier) -> Vec<Pattern> {
        std::mem::take(&mut self.patterns[tier.index()])
    }

    /// Byte total of one tier.
    pub fn bytes(&self, tier: Tier) -> usize {
        self.bytes[tier.index()]
    }

    /// Byte totals in tier order.
    pub fn byte_totals(&self) -> [usize; NTIERS] {
        self.bytes
    }

    /// Byte total across all tiers.
    pub fn total_bytes(&self) -> usize {
        self.bytes.iter().sum()
    }

    /// Number of tiers with at least one pattern.
    pub fn nonempty_tiers(&self) -> usize {
        Tier::iter().filter(|t| self.bytes(*t) > 0).count()
    }
}
