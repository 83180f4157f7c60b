//! Straight-line membership.

use super::Membership;
use crate::core::error::{invalid_parameter, Result};

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Abscissa.
    pub x: f64,
    /// Ordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A non-vertical line `y = slope · x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Creates a line from slope and intercept.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if either coefficient is not finite.
    pub fn new(slope: f64, intercept: f64) -> Result<Self> {
        if !slope.is_finite() {
            return Err(invalid_parameter("slope", slope, "a finite slope"));
        }
        if !intercept.is_finite() {
            return Err(invalid_parameter("intercept", intercept, "a finite intercept"));
        }
        Ok(Self { slope, intercept })
    }

    /// Creates the line through two points.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if the points share an abscissa (a vertical line) or a coordinate is
    /// not finite.
    pub fn from_points(p: Point, q: Point) -> Result<Self> {
        let run = q.x - p.x;
        if run == 0.0 {
            return Err(invalid_parameter("x", q.x, "two distinct abscissae"));
        }
        let slope = (q.y - p.y) / run;
        Self::new(slope, p.y - slope * p.x)
    }

    /// Returns the slope.
    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the intercept.
    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the line at `x`.
    #[inline]
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// A line clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Linear {
    line: Line,
}

impl Linear {
    /// Wraps `line` as a membership function.
    #[must_use]
    pub const fn new(line: Line) -> Self {
        Self { line }
    }

    /// Returns the underlying line.
    #[must_use]
    pub const fn line(&self) -> Line {
        self.line
    }
}

impl Membership for Linear {
    fn membership(&self, x: f64) -> f64 {
        self.line.at(x).clamp(0.0, 1.0)
    }
}
