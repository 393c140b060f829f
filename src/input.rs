// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Line-oriented pattern ingestion.
//!
//! Pattern files carry one pattern per line as raw literal text. Surrounding
//! ASCII whitespace is stripped and blank lines are skipped; everything else
//! becomes the pattern's byte sequence verbatim. Duplicates survive this
//! stage, deduplication belongs to [`crate::plan::build_plan`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::pattern::Pattern;

/// Parse patterns from a line-oriented reader.
///
/// Lines are split on `\n`; each line is trimmed of surrounding ASCII
/// whitespace (which also swallows `\r` from CRLF files) and skipped when
/// nothing remains.
pub fn parse_patterns<R: BufRead>(reader: R) -> io::Result<Vec<Pattern>> {
    let mut patterns = Vec::new();
    for line in reader.split(b'\n') {
        let line = line?;
        let trimmed = line.trim_ascii();
        if let Some(pattern) = Pattern::try_new(trimmed.to_vec()) {
            patterns.push(pattern);
        }
    }
    Ok(patterns)
}

/// Parse patterns from a file on disk.
pub fn read_patterns_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Pattern>> {
    parse_patterns(BufReader::new(File::open(path)?))
}
