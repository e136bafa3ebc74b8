//! Copy-semantics pixel resolution

/// A width/height pair in pixels.
///
/// `Dimensions` is `Copy`: every assignment or by-value pass duplicates all
/// fields, so mutating one binding never affects another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels
    pub width: i64,

    /// Height in pixels
    pub height: i64,
}

impl Dimensions {
    /// Memberwise constructor, one argument per field in declaration order.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Return a copy of `self` with a different width.
    ///
    /// Takes `self` by value, so the caller's binding keeps its old width.
    pub fn widened(mut self, width: i64) -> Self {
        self.width = width;
        self
    }
}
