//! Display implementations for the demonstration types

use std::fmt;

use super::*;

/// Wrapper that renders an `f64` with at least one fractional digit.
///
/// `30.0` prints as `30.0` rather than `30`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float(pub f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_finite() && n.fract() == 0.0 {
            write!(f, "{:.1}", n)
        } else {
            write!(f, "{}", n)
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for VideoModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ", name)?;
        }
        write!(f, "{}", self.dimensions)?;
        if self.interlaced {
            write!(f, " interlaced")?;
        }
        write!(f, " @ {} fps", Float(self.frame_rate))
    }
}

impl fmt::Display for VideoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}
