// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern-to-id map artifact.
//!
//! One line per pattern: the pattern bytes, a space, and the pattern's
//! global match id. Ids are assigned sequentially across the whole plan in
//! partition order, then intra-partition order, matching the id the matcher
//! hardware reports for a hit.

use std::io;

use crate::plan::PartitionPlan;

use super::PlanEmitter;

/// Emits the flat `pattern id` map consumed by the testbench.
#[derive(Debug, Default)]
pub struct MapEmitter;

impl PlanEmitter for MapEmitter {
    fn emit(&self, plan: &PartitionPlan, out: &mut dyn io::Write) -> io::Result<()> {
        let mut next_id = 0usize;
        for partition in plan {
            for pattern in partition.patterns() {
                out.write_all(pattern.as_bytes())?;
                writeln!(out, " {}", next_id)?;
                next_id += 1;
            }
        }
        Ok(())
    }
}
