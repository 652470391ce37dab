//! Splitter fractions and resize limits.
//!
//! Both types are total: any `f64` is accepted and normalized rather than
//! rejected. Deserialization runs through the same normalization so persisted
//! state can never smuggle an out-of-range value back in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Share of the container's relevant dimension given to the first pane.
///
/// Always within `[0.0, 1.0]`. NaN collapses to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Fraction(f64);

impl Fraction {
    /// Empty first pane.
    pub const ZERO: Self = Self(0.0);
    /// Even split.
    pub const HALF: Self = Self(0.5);
    /// Full first pane.
    pub const ONE: Self = Self(1.0);

    /// Create a fraction, clamping into `[0.0, 1.0]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Raw value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Share left for the second pane.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::HALF
    }
}

impl From<f64> for Fraction {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Fraction> for f64 {
    fn from(value: Fraction) -> Self {
        value.0
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Inclusive bound restricting how far drag gestures may move the splitter.
///
/// `min <= max` always holds; the constructor reorders swapped inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "LimitsRepr", into = "LimitsRepr")]
pub struct ResizeLimits {
    min: Fraction,
    max: Fraction,
}

impl ResizeLimits {
    /// The whole `[0, 1]` range.
    pub const FULL: Self = Self {
        min: Fraction::ZERO,
        max: Fraction::ONE,
    };

    /// Create limits from two fractions in either order.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        let a = Fraction::new(a);
        let b = Fraction::new(b);
        if a.get() <= b.get() {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(self) -> Fraction {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(self) -> Fraction {
        self.max
    }

    /// Clamp a raw value into these limits. NaN lands on `min`.
    #[must_use]
    pub fn clamp(self, value: f64) -> Fraction {
        if value.is_nan() || value < self.min.get() {
            self.min
        } else if value > self.max.get() {
            self.max
        } else {
            Fraction(value)
        }
    }

    /// Whether a fraction already lies inside these limits.
    #[must_use]
    pub fn contains(self, fraction: Fraction) -> bool {
        self.min.get() <= fraction.get() && fraction.get() <= self.max.get()
    }
}

impl Default for ResizeLimits {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Serialize, Deserialize)]
struct LimitsRepr {
    min: f64,
    max: f64,
}

impl From<LimitsRepr> for ResizeLimits {
    fn from(repr: LimitsRepr) -> Self {
        Self::new(repr.min, repr.max)
    }
}

impl From<ResizeLimits> for LimitsRepr {
    fn from(limits: ResizeLimits) -> Self {
        Self {
            min: limits.min.get(),
            max: limits.max.get(),
        }
    }
}
