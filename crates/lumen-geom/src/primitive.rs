// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The slicing capability shared by every primitive.

use lumen_core::math::{Event, Point2};

use crate::moment::Moment;
use crate::primitives::{EventSet, LightCone, Marker, PointTrajectory, Prism};

/// Geometry that can be cut at an instant of a viewing frame.
pub trait Sliceable {
    /// Element of the slice buffer.
    type Item: Copy + Default;

    /// Appends the slice at `moment` to `out` and returns how many items
    /// were appended.
    fn slice_into(&self, moment: &Moment, out: &mut Vec<Self::Item>) -> usize;

    /// Upper bound on the items a single slice can produce.
    fn max_slice_len(&self) -> usize;

    /// Slice at `moment` in a fresh buffer.
    fn slice(&self, moment: &Moment) -> Vec<Self::Item> {
        let mut out = Vec::with_capacity(self.max_slice_len());
        self.slice_into(moment, &mut out);
        out
    }
}

/// Any primitive a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Polygon worldsheet.
    Prism(Prism),
    /// Independent point worldlines.
    Points(PointTrajectory),
    /// Fading event markers.
    Events(EventSet),
    /// Expanding light-speed wavefront.
    LightCone(LightCone),
}

/// Result of slicing a [`Primitive`].
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveSlice {
    /// Line list (pairs of points) from a prism.
    Lines(Vec<Point2>),
    /// Live points from a trajectory, lifted to `(x, y, ct)`.
    Points(Vec<Event>),
    /// Active event markers.
    Markers(Vec<Marker>),
    /// Closed circle from a light cone; empty outside the cone.
    Circle(Vec<Point2>),
}

impl PrimitiveSlice {
    /// Number of items in the slice.
    pub fn len(&self) -> usize {
        match self {
            Self::Lines(v) | Self::Circle(v) => v.len(),
            Self::Points(v) => v.len(),
            Self::Markers(v) => v.len(),
        }
    }

    /// `true` when the primitive does not meet the instant.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops the items, keeping the allocation.
    pub fn clear(&mut self) {
        match self {
            Self::Lines(v) | Self::Circle(v) => v.clear(),
            Self::Points(v) => v.clear(),
            Self::Markers(v) => v.clear(),
        }
    }
}

impl Primitive {
    /// Short label used in logs and diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Prism(_) => "prism",
            Self::Points(_) => "points",
            Self::Events(_) => "events",
            Self::LightCone(_) => "light_cone",
        }
    }

    /// See [`Sliceable::max_slice_len`].
    pub fn max_slice_len(&self) -> usize {
        match self {
            Self::Prism(p) => p.max_slice_len(),
            Self::Points(p) => p.max_slice_len(),
            Self::Events(e) => e.max_slice_len(),
            Self::LightCone(c) => c.max_slice_len(),
        }
    }

    /// Slice at `moment` in a fresh buffer.
    pub fn slice(&self, moment: &Moment) -> PrimitiveSlice {
        match self {
            Self::Prism(p) => PrimitiveSlice::Lines(p.slice(moment)),
            Self::Points(p) => PrimitiveSlice::Points(p.slice(moment)),
            Self::Events(e) => PrimitiveSlice::Markers(e.slice(moment)),
            Self::LightCone(c) => PrimitiveSlice::Circle(c.slice(moment)),
        }
    }

    /// Replaces the contents of `out` with the slice at `moment`.
    ///
    /// The buffer is reused when it already holds the right variant and
    /// replaced otherwise. Returns the number of items written.
    pub fn slice_into(&self, moment: &Moment, out: &mut PrimitiveSlice) -> usize {
        out.clear();
        match (self, out) {
            (Self::Prism(p), PrimitiveSlice::Lines(buf)) => p.slice_into(moment, buf),
            (Self::Points(p), PrimitiveSlice::Points(buf)) => p.slice_into(moment, buf),
            (Self::Events(e), PrimitiveSlice::Markers(buf)) => e.slice_into(moment, buf),
            (Self::LightCone(c), PrimitiveSlice::Circle(buf)) => c.slice_into(moment, buf),
            (_, out) => {
                *out = self.slice(moment);
                out.len()
            }
        }
    }
}

impl From<Prism> for Primitive {
    fn from(value: Prism) -> Self {
        Self::Prism(value)
    }
}

impl From<PointTrajectory> for Primitive {
    fn from(value: PointTrajectory) -> Self {
        Self::Points(value)
    }
}

impl From<EventSet> for Primitive {
    fn from(value: EventSet) -> Self {
        Self::Events(value)
    }
}

impl From<LightCone> for Primitive {
    fn from(value: LightCone) -> Self {
        Self::LightCone(value)
    }
}
