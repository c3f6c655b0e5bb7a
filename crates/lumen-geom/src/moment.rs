// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The viewing state every slice is computed against.

use lumen_core::math::{Event, Mat3, SLICE_EPSILON};
use lumen_core::{Frame, FrameError, FrameTransform};

/// Viewing boost, light speed and instant for one rendered frame.
///
/// The driver owns the clock and the viewing frame; it hands a `Moment` to
/// every slicing call so that slicing stays a pure function of its inputs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Moment {
    boost: Mat3,
    c: f64,
    ct: f64,
    epsilon: f64,
}

impl Moment {
    /// Creates a moment from the viewing boost (`R0 → viewer`), the light
    /// speed and the current light-time instant.
    pub const fn new(boost: Mat3, c: f64, ct: f64) -> Self {
        Self {
            boost,
            c,
            ct,
            epsilon: SLICE_EPSILON,
        }
    }

    /// Moment observed from R0 itself.
    pub const fn rest(c: f64, ct: f64) -> Self {
        Self::new(Mat3::identity(), c, ct)
    }

    /// Moment observed from `frame`, at light-time `ct` in that frame.
    pub fn observed_from(
        transform: &FrameTransform,
        frame: Frame,
        ct: f64,
    ) -> Result<Self, FrameError> {
        Ok(Self::new(transform.direct(frame)?, transform.c(), ct))
    }

    /// Overrides the tolerance used to decide whether a coordinate lies on
    /// the cutting plane.
    pub const fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Same view at another instant.
    pub const fn at(mut self, ct: f64) -> Self {
        self.ct = ct;
        self
    }

    /// Viewing boost mapping R0 to the viewer frame.
    pub const fn boost(&self) -> &Mat3 {
        &self.boost
    }

    /// Light speed.
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Current instant, in light-time of the viewer frame.
    pub const fn ct(&self) -> f64 {
        self.ct
    }

    /// Cutting-plane tolerance.
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Re-expresses an R0 event in the viewer frame.
    pub fn view(&self, event: &Event) -> Event {
        self.boost.transform_event(event)
    }
}
