// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-partition statistics table.
//!
//! A fixed-width summary of how the packing came out: per lane the length
//! range, pattern count, average and maximum length, and byte total. Meant
//! for a human eyeballing the balance before committing to a synthesis run.

use std::fmt::Write;

use crate::plan::PartitionPlan;

/// Render the per-partition statistics table.
pub fn render_table(plan: &PartitionPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} | {:<10} | {:<6} | {:<8} | {:<8} | {:<12}",
        "Part #", "Range", "Count", "Avg Len", "Max Len", "Bytes"
    );
    let _ = writeln!(out, "{}", "-".repeat(70));

    for (i, partition) in plan.iter().enumerate() {
        if partition.is_empty() {
            let _ = writeln!(
                out,
                "{:<8} | {:<10} | {:<6} | {:<8} | {:<8} | {:<12}",
                i, "EMPTY", 0, 0, 0, 0
            );
            continue;
        }

        let count = partition.len();
        let bytes = partition.byte_total();
        let avg = bytes as f64 / count as f64;
        let range = format!(
            "{}-{}",
            partition.min_pattern_len(),
            partition.max_pattern_len()
        );
        let _ = writeln!(
            out,
            "{:<8} | {:<10} | {:<6} | {:<8.1} | {:<8} | {:<12}",
            i,
            range,
            count,
            avg,
            partition.max_pattern_len(),
            bytes
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(70));
    out
}
