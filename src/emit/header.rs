// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constant-table C++ header artifact.
//!
//! The matcher kernel is synthesized against fixed-size constant arrays:
//! per-lane packed pattern bytes, per-pattern lengths and offsets within the
//! lane, and per-lane summary arrays. Row count is the partition count; row
//! widths are the largest byte total and pattern count observed anywhere in
//! the plan, clamped to at least 1 so an all-idle plan still compiles.

use std::io::{self, Write};

use crate::plan::PartitionPlan;

use super::PlanEmitter;

/// Emits the `patterns.hpp` constant tables consumed by the kernel sources.
#[derive(Debug, Default)]
pub struct HeaderEmitter;

/// Precomputed per-partition rows and their global maxima.
struct HeaderRows {
    data: Vec<Vec<u8>>,
    lengths: Vec<Vec<usize>>,
    offsets: Vec<Vec<usize>>,
    max_len_per_partition: Vec<usize>,
    counts: Vec<usize>,
    max_row_bytes: usize,
    max_patterns: usize,
    max_pattern_len: usize,
    total_patterns: usize,
}

impl HeaderRows {
    fn build(plan: &PartitionPlan) -> Self {
        let mut rows = HeaderRows {
            data: Vec::with_capacity(plan.len()),
            lengths: Vec::with_capacity(plan.len()),
            offsets: Vec::with_capacity(plan.len()),
            max_len_per_partition: Vec::with_capacity(plan.len()),
            counts: Vec::with_capacity(plan.len()),
            max_row_bytes: 0,
            max_patterns: 0,
            max_pattern_len: 0,
            total_patterns: 0,
        };

        for partition in plan {
            let mut row_data = Vec::with_capacity(partition.byte_total());
            let mut row_lengths = Vec::with_capacity(partition.len());
            let mut row_offsets = Vec::with_capacity(partition.len());
            let mut offset = 0usize;

            for pattern in partition.patterns() {
                row_data.extend_from_slice(pattern.as_bytes());
                row_lengths.push(pattern.len());
                row_offsets.push(offset);
                offset += pattern.len();
                rows.max_pattern_len = rows.max_pattern_len.max(pattern.len());
            }

            rows.max_row_bytes = rows.max_row_bytes.max(row_data.len());
            rows.max_patterns = rows.max_patterns.max(partition.len());
            rows.total_patterns += partition.len();
            rows.max_len_per_partition.push(partition.max_pattern_len());
            rows.counts.push(partition.len());
            rows.data.push(row_data);
            rows.lengths.push(row_lengths);
            rows.offsets.push(row_offsets);
        }
        rows
    }
}

impl PlanEmitter for HeaderEmitter {
    fn emit(&self, plan: &PartitionPlan, out: &mut dyn io::Write) -> io::Result<()> {
        let rows = HeaderRows::build(plan);
        // Array dimensions of 0 are not valid C++; idle plans degrade to
        // width-1 zero rows.
        let row_width = rows.max_row_bytes.max(1);
        let patterns_width = rows.max_patterns.max(1);

        writeln!(out, "#ifndef PATTERNS_HPP")?;
        writeln!(out, "#define PATTERNS_HPP")?;
        writeln!(out, "#include <ap_int.h>")?;
        writeln!(out)?;

        writeln!(out, "const int NUM_OF_PARTITIONS = {};", plan.len())?;
        writeln!(out, "const int MAX_ROW_SIZE = {};", row_width)?;
        writeln!(out, "const int MAX_PATTERNS_PER_PART = {};", patterns_width)?;
        writeln!(out, "const int TOTAL_NUM_PATTERNS = {};", rows.total_patterns)?;
        writeln!(
            out,
            "const int MAX_PATTERN_LEN_TOTAL = {};",
            rows.max_pattern_len
        )?;
        writeln!(out)?;

        writeln!(
            out,
            "const unsigned char PATTERN_DATA[{}][{}] = {{",
            plan.len(),
            row_width
        )?;
        for row in &rows.data {
            let cells: Vec<String> = row
                .iter()
                .copied()
                .chain(std::iter::repeat(0).take(row_width - row.len()))
                .map(|b| format!("0x{:02X}", b))
                .collect();
            writeln!(out, "    {{{}}},", cells.join(", "))?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;

        write_int_matrix(out, "PATTERN_LENGTHS", &rows.lengths, plan.len(), patterns_width)?;
        write_int_matrix(out, "PATTERN_OFFSETS", &rows.offsets, plan.len(), patterns_width)?;

        write_int_array(out, "NUM_PATTERNS_MATRIX", &rows.counts)?;
        write_int_array(out, "MAX_LEN_IN_PARTITION", &rows.max_len_per_partition)?;

        writeln!(out, "#endif")?;
        Ok(())
    }
}

fn write_int_matrix(
    out: &mut dyn Write,
    name: &str,
    rows: &[Vec<usize>],
    nrows: usize,
    width: usize,
) -> io::Result<()> {
    writeln!(out, "const int {}[{}][{}] = {{", name, nrows, width)?;
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .copied()
            .chain(std::iter::repeat(0).take(width - row.len()))
            .map(|v| v.to_string())
            .collect();
        writeln!(out, "    {{{}}},", cells.join(", "))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    Ok(())
}

fn write_int_array(out: &mut dyn Write, name: &str, values: &[usize]) -> io::Result<()> {
    let cells: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    writeln!(
        out,
        "const int {}[{}] = {{ {} }};",
        name,
        values.len(),
        cells.join(", ")
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackConfig;
    use crate::pattern::Pattern;
    use crate::plan::build_plan;

    fn emit_to_string(plan: &PartitionPlan) -> String {
        let mut buf = Vec::new();
        HeaderEmitter.emit(plan, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_constants() {
        let patterns = vec![
            Pattern::new(b"ab".to_vec()),
            Pattern::new(b"cdef".to_vec()),
        ];
        let plan = build_plan(patterns, 2, &PackConfig::default()).unwrap();
        let header = emit_to_string(&plan);

        assert!(header.starts_with("#ifndef PATTERNS_HPP\n#define PATTERNS_HPP\n"));
        assert!(header.contains("#include <ap_int.h>"));
        assert!(header.contains("const int NUM_OF_PARTITIONS = 2;"));
        assert!(header.contains("const int TOTAL_NUM_PATTERNS = 2;"));
        assert!(header.contains("const int MAX_PATTERN_LEN_TOTAL = 4;"));
        assert!(header.trim_end().ends_with("#endif"));
    }

    #[test]
    fn test_data_rows_hex_padded() {
        // "ab","cd" fill the first lane to the 3-byte balance target, "ef"
        // takes the second; the short row is padded to the widest row.
        let patterns = vec![
            Pattern::new(b"ab".to_vec()),
            Pattern::new(b"cd".to_vec()),
            Pattern::new(b"ef".to_vec()),
        ];
        let plan = build_plan(patterns, 2, &PackConfig::default()).unwrap();
        let header = emit_to_string(&plan);

        assert!(header.contains("const unsigned char PATTERN_DATA[2][4] = {"));
        assert!(header.contains("{0x61, 0x62, 0x63, 0x64},"));
        assert!(header.contains("{0x65, 0x66, 0x00, 0x00},"));
    }

    #[test]
    fn test_lengths_and_offsets() {
        // Both patterns are Short and land in one lane; offsets accumulate.
        let patterns = vec![
            Pattern::new(b"ab".to_vec()),
            Pattern::new(b"cdef".to_vec()),
        ];
        let plan = build_plan(patterns, 1, &PackConfig::default()).unwrap();
        let header = emit_to_string(&plan);

        assert!(header.contains("const int PATTERN_LENGTHS[1][2] = {"));
        assert!(header.contains("    {2, 4},"));
        assert!(header.contains("const int PATTERN_OFFSETS[1][2] = {"));
        assert!(header.contains("    {0, 2},"));
        assert!(header.contains("const int NUM_PATTERNS_MATRIX[1] = { 2 };"));
        assert!(header.contains("const int MAX_LEN_IN_PARTITION[1] = { 4 };"));
    }

    #[test]
    fn test_idle_plan_degrades_to_width_one() {
        let plan = build_plan(Vec::new(), 2, &PackConfig::default()).unwrap();
        let header = emit_to_string(&plan);

        assert!(header.contains("const int MAX_ROW_SIZE = 1;"));
        assert!(header.contains("const int MAX_PATTERNS_PER_PART = 1;"));
        assert!(header.contains("const int TOTAL_NUM_PATTERNS = 0;"));
        assert!(header.contains("const unsigned char PATTERN_DATA[2][1] = {"));
        assert!(header.contains("{0x00},"));
        assert!(header.contains("const int NUM_PATTERNS_MATRIX[2] = { 0, 0 };"));
    }
}
