// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Time-extended primitives stored as absolute-frame (R0) geometry.
//!
//! Each primitive converts its proper-frame input once, at construction,
//! and never mutates the result. Slicing reads the stored events, applies
//! the viewing boost from a [`Moment`] and writes into caller buffers.

pub mod events;
/// Light-speed wavefronts.
pub mod light_cone;
/// Point worldlines.
pub mod points;
/// Polygon worldsheets.
pub mod prism;

use lumen_core::math::{Event, Point2, ProperEvent};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::interval::TimeInterval;
use crate::moment::Moment;

pub use events::{chronometer, chronometer_times, EventSet, Marker};
pub use light_cone::{LightCone, LIGHT_CONE_SAMPLES};
pub use points::PointTrajectory;
pub use prism::Prism;

/// One spatial point held over a time interval, as two R0 events.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worldline {
    start: Event,
    end: Event,
}

impl Worldline {
    /// Creates a worldline from its R0 end points.
    #[must_use]
    pub const fn new(start: Event, end: Event) -> Self {
        Self { start, end }
    }

    /// Event at the start of the interval.
    #[must_use]
    pub const fn start(&self) -> Event {
        self.start
    }

    /// Event at the end of the interval.
    #[must_use]
    pub const fn end(&self) -> Event {
        self.end
    }

    /// Both ends re-expressed in the viewer frame of `moment`.
    #[must_use]
    pub fn viewed(&self, moment: &Moment) -> (Event, Event) {
        (moment.view(&self.start), moment.view(&self.end))
    }
}

/// Worldlines shared by every persistent primitive: one per input vertex,
/// all authored in the same frame over the same interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Persistent {
    frame: Frame,
    interval: TimeInterval,
    worldlines: Vec<Worldline>,
}

impl Persistent {
    /// Lifts `vertices` (proper-frame positions in `frame`) over `interval`.
    ///
    /// # Errors
    /// [`GeomError::EmptyGeometry`] for no vertices, [`GeomError::NonFinite`]
    /// for NaN or infinite coordinates, interval errors from
    /// [`TimeInterval::resolve`] and frame errors from the transform.
    pub fn new(
        transform: &FrameTransform,
        frame: Frame,
        interval: TimeInterval,
        vertices: &[Point2],
        what: &'static str,
    ) -> Result<Self, GeomError> {
        if vertices.is_empty() {
            return Err(GeomError::EmptyGeometry(what));
        }
        if vertices.iter().any(|p| !(p.x().is_finite() && p.y().is_finite())) {
            return Err(GeomError::NonFinite(what));
        }
        let (tmin, tmax) = interval.resolve()?;
        let starts: Vec<ProperEvent> = vertices.iter().map(|p| ProperEvent::at(*p, tmin)).collect();
        let ends: Vec<ProperEvent> = vertices.iter().map(|p| ProperEvent::at(*p, tmax)).collect();
        let starts = transform.to_spacetime(frame, &starts)?;
        let ends = transform.to_spacetime(frame, &ends)?;
        let worldlines = starts
            .into_iter()
            .zip(ends)
            .map(|(start, end)| Worldline::new(start, end))
            .collect();
        Ok(Self {
            frame,
            interval,
            worldlines,
        })
    }

    /// Frame the vertices were authored in.
    #[must_use]
    pub const fn frame(&self) -> Frame {
        self.frame
    }

    /// Proper-time interval the vertices exist over.
    #[must_use]
    pub const fn interval(&self) -> TimeInterval {
        self.interval
    }

    /// Stored R0 worldlines, in vertex order.
    #[must_use]
    pub fn worldlines(&self) -> &[Worldline] {
        &self.worldlines
    }

    /// Number of worldlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.worldlines.len()
    }

    /// Always `false` for a constructed value; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.worldlines.is_empty()
    }

    /// Worldline end points in the viewer frame.
    #[must_use]
    pub fn viewed(&self, moment: &Moment) -> Vec<(Event, Event)> {
        self.worldlines.iter().map(|w| w.viewed(moment)).collect()
    }

    /// Line list of the `2·N` worldline end points in the viewer frame.
    #[must_use]
    pub fn worldline_vertices(&self, moment: &Moment) -> Vec<Event> {
        let mut out = Vec::with_capacity(2 * self.worldlines.len());
        for w in &self.worldlines {
            let (a, b) = w.viewed(moment);
            out.push(a);
            out.push(b);
        }
        out
    }
}

/// Appends a `±x, ±y` cross of half-size `radius` around `center`:
/// `−x, +x, −y, +y`.
pub(crate) fn push_planar_cross(out: &mut Vec<Event>, center: Event, radius: f64) {
    out.push(center.add(&Event::new(-radius, 0.0, 0.0)));
    out.push(center.add(&Event::new(radius, 0.0, 0.0)));
    out.push(center.add(&Event::new(0.0, -radius, 0.0)));
    out.push(center.add(&Event::new(0.0, radius, 0.0)));
}
