// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packing configuration.
//!
//! The three tunables of the target hardware, passed explicitly into the
//! orchestrator rather than living as process-wide constants so that several
//! configurations can be explored in one process.

/// Hardware parameters of the matcher lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig {
    /// Maximum total pattern bytes a single lane can hold.
    ///
    /// A single pattern longer than this cannot be split and ends up alone
    /// in an over-limit lane; see [`crate::plan`] for how that is reported.
    pub hard_byte_limit: usize,

    /// Upper length bound (inclusive) of the [`crate::Tier::Short`] matcher.
    pub tier_threshold_a: usize,

    /// Upper length bound (inclusive) of the [`crate::Tier::Medium`] matcher.
    /// Everything longer is [`crate::Tier::Long`].
    pub tier_threshold_b: usize,
}

impl Default for PackConfig {
    /// The shipped hardware: 8191-byte lanes, shift-register matchers of
    /// width 32 and 64, and a long-pattern matcher above that.
    fn default() -> Self {
        Self {
            hard_byte_limit: 8191,
            tier_threshold_a: 32,
            tier_threshold_b: 64,
        }
    }
}
