// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors raised while building spacetime primitives.

use lumen_core::FrameError;
use thiserror::Error;

/// Errors emitted by primitive constructors.
///
/// Slicing itself never fails: a primitive that does not exist at the
/// requested instant simply yields an empty slice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// The frame the geometry is authored in cannot be built.
    #[error(transparent)]
    Frame(#[from] FrameError),
    /// A primitive was given no vertices or events.
    #[error("{0} needs at least one vertex")]
    EmptyGeometry(&'static str),
    /// A coordinate supplied by the caller is NaN or infinite.
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),
    /// The time interval ends before it starts.
    #[error("time interval ends at {end} before it starts at {start}")]
    InvertedInterval {
        /// Resolved start time (proper time).
        start: f64,
        /// Resolved end time (proper time).
        end: f64,
    },
    /// Chronometer period or duration is unusable.
    #[error("invalid chronometer: period {period}, duration {duration}")]
    InvalidChronometer {
        /// Requested tick period.
        period: f64,
        /// Requested duration.
        duration: f64,
    },
    /// Event markers need a strictly positive fade duration.
    #[error("spot duration must be positive, got {0}")]
    InvalidSpotDuration(f64),
    /// A light cone's terminal event precedes its apex.
    #[error("light cone terminal ct {terminal} precedes apex ct {apex}")]
    InvertedLightCone {
        /// Apex light-time.
        apex: f64,
        /// Terminal light-time.
        terminal: f64,
    },
}
