//! Traits implemented by the `texcaps_macros` derives

/// Number of variants in an enum
pub trait EnumCountT {
    /// Number of variants
    const COUNT : usize;
}

/// Convert an index back into an enum variant
pub trait EnumFromIndexT: Sized {
    /// Convert an index to a variant, `None` if the index does not name a variant
    fn from_idx(idx: usize) -> Option<Self>;

    /// Convert an index to a variant, falling back to `default` when out of range
    fn from_idx_or(idx: usize, default: Self) -> Self {
        Self::from_idx(idx).unwrap_or(default)
    }
}
