// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build-time partitioning of match patterns across parallel hardware lanes.
//!
//! A hardware string matcher runs a fixed number of matching lanes in
//! parallel. Each lane holds at most [`PackConfig::hard_byte_limit`] bytes of
//! pattern data, and each lane is built from one of three matcher variants
//! selected by pattern length ([`Tier`]). This crate computes, ahead of
//! synthesis, which pattern goes into which lane.
//!
//! # Architecture
//!
//! The computation is a pure single-pass heuristic, split into three stages:
//!
//! 1. **Classification** ([`tier`]): patterns are sorted by length and
//!    bucketed into three tiers. A lane never mixes tiers, because the tiers
//!    correspond to different matcher implementations.
//! 2. **Allocation** ([`alloc`]): the fixed lane budget is divided between
//!    the tiers, proportional to each tier's byte volume, with a guaranteed
//!    minimum of one lane per non-empty tier.
//! 3. **Distribution** ([`distribute`]): each tier's patterns are packed
//!    greedily into its allocated lanes, aiming for even byte load and never
//!    exceeding the hard byte limit.
//!
//! The [`plan`] module orchestrates the stages and enforces the global
//! invariants (exact lane count, conservation of patterns, tier purity).
//! Two output adapters ([`emit`]) render the resulting [`PartitionPlan`] as
//! either a constant-table C++ header for the synthesis flow or a flat
//! pattern-to-id map for the testbench.
//!
//! # Determinism
//!
//! Identical inputs always produce byte-identical plans. Tier order
//! (Short, Medium, Long) is the single ordering rule: it breaks allocation
//! ties and fixes the concatenation order of the final plan.

pub mod alloc;
pub mod config;
pub mod distribute;
pub mod emit;
pub mod error;
pub mod input;
pub mod pattern;
pub mod plan;
pub mod stats;
pub mod tier;

// Re-export commonly used types
pub use alloc::Allocation;
pub use config::PackConfig;
pub use error::PackError;
pub use pattern::Pattern;
pub use plan::{build_plan, Partition, PartitionPlan};
pub use tier::Tier;
