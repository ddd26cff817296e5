//! Key position type.

/// 1-based position of a key in the rotation order, shown as `K<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ordinal(usize);

impl Ordinal {
    /// Ordinal for a zero-based list index.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// The 1-based position.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "K{}", self.0)
    }
}
