// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! File-to-artifact round trips through the ingestion and emission adapters.

mod common;

use std::io::Write;

use common::patterns_of_lens;
use lanepack::emit::{HeaderEmitter, MapEmitter, PlanEmitter};
use lanepack::{build_plan, input, PackConfig, PartitionPlan};

fn emit(emitter: &dyn PlanEmitter, plan: &PartitionPlan) -> Vec<u8> {
    let mut buf = Vec::new();
    emitter.emit(plan, &mut buf).unwrap();
    buf
}

#[test]
fn pattern_file_to_map_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "alpha\nbeta\n\ngamma\nbeta\n").unwrap();
    file.flush().unwrap();

    let patterns = input::read_patterns_file(file.path()).unwrap();
    assert_eq!(patterns.len(), 4); // blank dropped, duplicate kept

    let plan = build_plan(patterns, 2, &PackConfig::default()).unwrap();
    let map = String::from_utf8(emit(&MapEmitter, &plan)).unwrap();

    // Duplicate "beta" packed once; ids are dense and sequential.
    let lines: Vec<&str> = map.lines().collect();
    assert_eq!(lines.len(), 3);
    for (i, line) in lines.iter().enumerate() {
        assert!(line.ends_with(&format!(" {}", i)), "line {:?}", line);
    }
    let names: Vec<&str> = lines
        .iter()
        .map(|l| l.rsplit_once(' ').unwrap().0)
        .collect();
    // Sorted by length: 4-byte patterns in ingestion order, then "gamma".
    assert_eq!(names, vec!["beta", "alpha", "gamma"]);
}

#[test]
fn header_tables_are_consistent_with_the_plan() {
    let patterns = patterns_of_lens(&[4, 8, 12, 40, 80]);
    let config = PackConfig::default();
    let plan = build_plan(patterns, 4, &config).unwrap();
    let header = String::from_utf8(emit(&HeaderEmitter, &plan)).unwrap();

    assert!(header.contains("const int NUM_OF_PARTITIONS = 4;"));
    assert!(header.contains(&format!(
        "const int TOTAL_NUM_PATTERNS = {};",
        plan.total_patterns()
    )));
    let max_row = plan.iter().map(|p| p.byte_total()).max().unwrap();
    assert!(header.contains(&format!("const int MAX_ROW_SIZE = {};", max_row)));
    let max_count = plan.iter().map(|p| p.len()).max().unwrap();
    assert!(header.contains(&format!(
        "const int MAX_PATTERNS_PER_PART = {};",
        max_count
    )));
    assert!(header.contains("const int MAX_PATTERN_LEN_TOTAL = 80;"));

    // One data row per partition.
    let data_rows = header
        .lines()
        .skip_while(|l| !l.starts_with("const unsigned char PATTERN_DATA"))
        .skip(1)
        .take_while(|l| l.starts_with("    {"))
        .count();
    assert_eq!(data_rows, 4);
}

#[test]
fn both_emitters_agree_on_pattern_order() {
    let patterns = patterns_of_lens(&[3, 5, 7, 40, 90]);
    let plan = build_plan(patterns, 4, &PackConfig::default()).unwrap();

    let map = emit(&MapEmitter, &plan);
    let map_count = map.iter().filter(|&&b| b == b'\n').count();
    assert_eq!(map_count, plan.total_patterns());

    // The header's length matrix flattens to the same sequence of pattern
    // lengths the map walks.
    let header = String::from_utf8(emit(&HeaderEmitter, &plan)).unwrap();
    let lengths_section: Vec<usize> = header
        .lines()
        .skip_while(|l| !l.starts_with("const int PATTERN_LENGTHS"))
        .skip(1)
        .take_while(|l| l.starts_with("    {"))
        .flat_map(|l| {
            l.trim()
                .trim_start_matches('{')
                .trim_end_matches("},")
                .split(", ")
                .map(|v| v.parse::<usize>().unwrap())
                .collect::<Vec<_>>()
        })
        .filter(|&v| v > 0)
        .collect();
    let plan_lengths: Vec<usize> = plan
        .iter()
        .flat_map(|p| p.patterns().iter().map(|pat| pat.len()))
        .collect();
    assert_eq!(lengths_section, plan_lengths);
}

#[test]
fn artifacts_are_deterministic() {
    let patterns = patterns_of_lens(&[6, 6, 6, 50, 120]);
    let config = PackConfig::default();

    let first = build_plan(patterns.clone(), 5, &config).unwrap();
    let second = build_plan(patterns, 5, &config).unwrap();
    assert_eq!(emit(&HeaderEmitter, &first), emit(&HeaderEmitter, &second));
    assert_eq!(emit(&MapEmitter, &first), emit(&MapEmitter, &second));
}
