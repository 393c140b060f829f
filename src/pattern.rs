// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pattern type: the unit of work being partitioned.
//!
//! A pattern is a non-empty byte sequence destined for one matcher lane.
//! Identity is exact byte equality; the length decides which [`crate::Tier`]
//! of matcher hardware handles it.

use std::fmt;

/// A non-empty byte sequence to be matched by one hardware lane.
///
/// This is a newtype wrapper to provide type safety and to enforce the
/// non-empty invariant at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<u8>);

impl Pattern {
    /// Create a new pattern, panicking if the byte sequence is empty.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is empty.
    pub fn new(bytes: Vec<u8>) -> Self {
        assert!(!bytes.is_empty(), "Pattern must not be empty");
        Self(bytes)
    }

    /// Try to create a new pattern, returning None for an empty sequence.
    pub fn try_new(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Number of bytes in the pattern.
    ///
    /// Always at least 1.
    #[allow(clippy::len_without_is_empty)] // Patterns are never empty
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Pattern {
    /// Lossy text rendering, for logs and statistics only.
    ///
    /// Emitters that must preserve patterns exactly write [`Self::as_bytes`]
    /// instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
