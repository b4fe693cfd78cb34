//! Stream position primitives.

use std::fmt;

/// Byte offset within a single input stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteOffset(u64);

impl ByteOffset {
    /// Creates a byte offset value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw offset value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the offset moved forward by `count` bytes, saturating.
    pub(crate) const fn advanced_by(self, count: usize) -> Self {
        Self(self.0.saturating_add(count as u64))
    }
}

impl fmt::Display for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
