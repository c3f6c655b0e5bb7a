// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::Vec2;

/// Spacetime event in light-time coordinates `(x, y, ct)`.
///
/// * `x`, `y` are spatial coordinates in the frame the event is expressed in.
/// * `ct` is the time coordinate multiplied by the light speed, so all three
///   components share the same unit.
/// * Stored primitive geometry is always an `Event` in the absolute frame R0.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    data: [f64; 3],
}

impl Event {
    /// The origin of spacetime.
    pub const ORIGIN: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates an event from `(x, y, ct)`.
    pub const fn new(x: f64, y: f64, ct: f64) -> Self {
        Self { data: [x, y, ct] }
    }

    /// Returns `[x, y, ct]`.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    pub(crate) fn component(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    /// Spatial X coordinate.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Spatial Y coordinate.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Light-time coordinate `ct`.
    pub fn ct(&self) -> f64 {
        self.data[2]
    }

    /// Spatial projection `(x, y)`, dropping the time coordinate.
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }

    /// Returns a copy with the time coordinate replaced.
    pub fn with_ct(&self, ct: f64) -> Self {
        Self::new(self.x(), self.y(), ct)
    }

    /// Component-wise sum.
    pub fn add(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) + other.component(0),
            self.component(1) + other.component(1),
            self.component(2) + other.component(2),
        )
    }

    /// Component-wise difference.
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(
            self.component(0) - other.component(0),
            self.component(1) - other.component(1),
            self.component(2) - other.component(2),
        )
    }

    /// Converts back to proper time `t = ct / c`.
    pub fn to_proper(&self, c: f64) -> ProperEvent {
        ProperEvent::new(self.x(), self.y(), self.ct() / c)
    }

    /// Returns `true` when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 3]> for Event {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

/// User-facing event in proper-time coordinates `(x, y, t)`.
///
/// This is the convention scenes are authored in: positions and times as
/// measured in the frame the object is at rest in. Convert with
/// [`ProperEvent::to_light_time`] or, including the frame change,
/// [`crate::frame::to_spacetime`].
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProperEvent {
    data: [f64; 3],
}

impl ProperEvent {
    /// Creates a proper-time event from `(x, y, t)`.
    pub const fn new(x: f64, y: f64, t: f64) -> Self {
        Self { data: [x, y, t] }
    }

    /// Builds the event at time `t` for a planar position.
    pub fn at(position: Point2, t: f64) -> Self {
        Self::new(position.x(), position.y(), t)
    }

    /// Returns `[x, y, t]`.
    pub fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// Spatial X coordinate.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Spatial Y coordinate.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Proper time `t`.
    pub fn t(&self) -> f64 {
        self.data[2]
    }

    /// Scales the time coordinate by `c`, keeping the same frame.
    pub fn to_light_time(&self, c: f64) -> Event {
        Event::new(self.x(), self.y(), self.t() * c)
    }
}

impl From<[f64; 3]> for ProperEvent {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

/// Point of an instantaneous 2D slice.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    data: [f64; 2],
}

impl Point2 {
    /// Creates a point from `(x, y)`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    /// Returns `[x, y]`.
    pub fn to_array(self) -> [f64; 2] {
        self.data
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    /// Offsets the point by a planar vector.
    pub fn offset(&self, delta: Vec2) -> Self {
        Self::new(self.x() + delta.x(), self.y() + delta.y())
    }

    /// Lifts the point into spacetime at light-time `ct`.
    pub fn at_ct(&self, ct: f64) -> Event {
        Event::new(self.x(), self.y(), ct)
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
