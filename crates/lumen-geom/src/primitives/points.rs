// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_core::math::{Event, Point2};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::interval::TimeInterval;
use crate::moment::Moment;
use crate::primitive::Sliceable;
use crate::slice::slice_points_of_segments;

use super::{push_planar_cross, Persistent};

/// Default half-size of the cross drawn on a live point.
pub const POINT_CROSS_RADIUS: f64 = 0.05;

/// Independent points held over a time interval; one worldline each.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTrajectory {
    body: Persistent,
    cross_radius: f64,
}

impl PointTrajectory {
    /// Builds one worldline per point (proper-frame positions in `frame`).
    ///
    /// # Errors
    /// See [`Persistent::new`].
    pub fn new(
        transform: &FrameTransform,
        frame: Frame,
        interval: TimeInterval,
        points: &[Point2],
    ) -> Result<Self, GeomError> {
        let body = Persistent::new(transform, frame, interval, points, "point trajectory")?;
        Ok(Self {
            body,
            cross_radius: POINT_CROSS_RADIUS,
        })
    }

    /// Sets the cross half-size used by [`Self::slice_cross_vertices`].
    #[must_use]
    pub fn with_cross_radius(mut self, radius: f64) -> Self {
        self.cross_radius = radius;
        self
    }

    /// Cross half-size.
    #[must_use]
    pub const fn cross_radius(&self) -> f64 {
        self.cross_radius
    }

    /// Shared worldline storage.
    #[must_use]
    pub const fn body(&self) -> &Persistent {
        &self.body
    }

    /// Four cross vertices (`−x, +x, −y, +y`) per point alive at the instant.
    #[must_use]
    pub fn slice_cross_vertices(&self, moment: &Moment) -> Vec<Event> {
        let centers = self.slice(moment);
        let mut out = Vec::with_capacity(4 * centers.len());
        for center in centers {
            push_planar_cross(&mut out, center, self.cross_radius);
        }
        out
    }
}

impl Sliceable for PointTrajectory {
    type Item = Event;

    fn slice_into(&self, moment: &Moment, out: &mut Vec<Event>) -> usize {
        let viewed = self.body.worldlines().iter().map(|w| w.viewed(moment));
        slice_points_of_segments(moment.ct(), viewed, moment.epsilon(), out)
    }

    fn max_slice_len(&self) -> usize {
        self.body.len()
    }
}
