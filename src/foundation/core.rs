pub use kurbo::{BezPath, PathEl, Point};

/// Milliseconds on the controller's clock, or a duration in milliseconds.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Scale by a non-negative factor, rounding to the nearest millisecond.
    pub fn scale(self, factor: f64) -> Self {
        let v = (self.0 as f64 * factor).round();
        if v.is_finite() && v > 0.0 {
            Self(v as u64)
        } else {
            Self::ZERO
        }
    }

    /// Add `rhs` using saturating arithmetic.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtract `rhs` using saturating arithmetic.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Value as floating-point milliseconds.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl std::fmt::Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
