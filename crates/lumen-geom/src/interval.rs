// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Proper-time intervals with optionally open ends.

use crate::error::GeomError;

/// Proper time used in place of an open interval end.
///
/// Open ends are a drawing convention rather than a true infinity: an object
/// that "always existed" starts at `−UNBOUNDED_T` and one that "never ends"
/// stops at `+UNBOUNDED_T`, i.e. `±1000·C` once scaled to light-time.
pub const UNBOUNDED_T: f64 = 1000.0;

/// One end of a [`TimeInterval`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Bound {
    /// No limit on this side.
    #[default]
    Open,
    /// Limit at the given proper time.
    At(f64),
}

impl From<Option<f64>> for Bound {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Open, Self::At)
    }
}

/// Proper-time interval `[start, end]` during which an object exists.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInterval {
    start: Bound,
    end: Bound,
}

impl TimeInterval {
    /// Creates an interval from two bounds.
    pub fn new(start: impl Into<Bound>, end: impl Into<Bound>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Interval open on both sides.
    pub const fn always() -> Self {
        Self {
            start: Bound::Open,
            end: Bound::Open,
        }
    }

    /// Closed interval `[start, end]`.
    pub const fn between(start: f64, end: f64) -> Self {
        Self {
            start: Bound::At(start),
            end: Bound::At(end),
        }
    }

    /// Interval starting at `start` and never ending.
    pub const fn since(start: f64) -> Self {
        Self {
            start: Bound::At(start),
            end: Bound::Open,
        }
    }

    /// Interval that always existed and stops at `end`.
    pub const fn until(end: f64) -> Self {
        Self {
            start: Bound::Open,
            end: Bound::At(end),
        }
    }

    /// Start bound.
    pub const fn start(&self) -> Bound {
        self.start
    }

    /// End bound.
    pub const fn end(&self) -> Bound {
        self.end
    }

    /// Resolves open ends to `∓UNBOUNDED_T` and validates ordering.
    pub fn resolve(&self) -> Result<(f64, f64), GeomError> {
        let start = match self.start {
            Bound::Open => -UNBOUNDED_T,
            Bound::At(t) => t,
        };
        let end = match self.end {
            Bound::Open => UNBOUNDED_T,
            Bound::At(t) => t,
        };
        if !start.is_finite() || !end.is_finite() {
            return Err(GeomError::NonFinite("time interval"));
        }
        if end < start {
            return Err(GeomError::InvertedInterval { start, end });
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_ends_resolve_to_drawing_bounds() {
        assert_eq!(
            TimeInterval::always().resolve(),
            Ok((-UNBOUNDED_T, UNBOUNDED_T))
        );
        assert_eq!(TimeInterval::since(2.0).resolve(), Ok((2.0, UNBOUNDED_T)));
        assert_eq!(TimeInterval::until(-1.0).resolve(), Ok((-UNBOUNDED_T, -1.0)));
        assert_eq!(
            TimeInterval::new(None::<f64>, Some(3.0)),
            TimeInterval::until(3.0)
        );
    }

    #[test]
    fn inverted_interval_is_rejected() {
        assert_eq!(
            TimeInterval::between(2.0, 1.0).resolve(),
            Err(GeomError::InvertedInterval {
                start: 2.0,
                end: 1.0
            })
        );
        assert!(TimeInterval::between(1.0, f64::NAN).resolve().is_err());
    }
}
