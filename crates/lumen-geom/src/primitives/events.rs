// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Discrete events drawn as crosses that fade after they happen.

use lumen_core::math::{Event, ProperEvent};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::moment::Moment;
use crate::primitive::Sliceable;

use super::push_planar_cross;

/// Default fade duration of an event marker, in proper seconds.
pub const SPOT_DURATION: f64 = 0.30;
/// Default half-size of the spacetime cross drawn on each event.
pub const CROSS_RADIUS: f64 = 0.05;
/// Default half-size of a slice marker at the instant its event happens.
pub const SLICE_CROSS_RADIUS: f64 = 0.1;

/// Marker of an event visible in a slice.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker {
    /// Event position in the viewer frame, with `ct` set to the event's own
    /// viewer-frame time.
    pub center: Event,
    /// Current half-size; shrinks linearly to zero over the fade duration.
    pub radius: f64,
}

/// Ordered set of R0 events with fading slice markers.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSet {
    events: Vec<Event>,
    spot_duration: f64,
    cross_radius: f64,
    slice_cross_radius: f64,
}

impl EventSet {
    /// Converts proper-time events authored in `frame` into an event set.
    ///
    /// # Errors
    /// [`GeomError::EmptyGeometry`], [`GeomError::NonFinite`] or a frame
    /// error.
    pub fn new(
        transform: &FrameTransform,
        frame: Frame,
        events: &[ProperEvent],
    ) -> Result<Self, GeomError> {
        if events
            .iter()
            .any(|e| !e.to_array().iter().all(|v| v.is_finite()))
        {
            return Err(GeomError::NonFinite("event set"));
        }
        Self::from_spacetime(transform.to_spacetime(frame, events)?)
    }

    /// Wraps events that are already R0 light-time events.
    ///
    /// # Errors
    /// [`GeomError::EmptyGeometry`] or [`GeomError::NonFinite`].
    pub fn from_spacetime(events: Vec<Event>) -> Result<Self, GeomError> {
        if events.is_empty() {
            return Err(GeomError::EmptyGeometry("event set"));
        }
        if events.iter().any(|e| !e.is_finite()) {
            return Err(GeomError::NonFinite("event set"));
        }
        Ok(Self {
            events,
            spot_duration: SPOT_DURATION,
            cross_radius: CROSS_RADIUS,
            slice_cross_radius: SLICE_CROSS_RADIUS,
        })
    }

    /// Sets how long a marker stays visible after its event.
    ///
    /// # Errors
    /// [`GeomError::InvalidSpotDuration`] unless `seconds` is finite and
    /// strictly positive.
    pub fn with_spot_duration(mut self, seconds: f64) -> Result<Self, GeomError> {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Err(GeomError::InvalidSpotDuration(seconds));
        }
        self.spot_duration = seconds;
        Ok(self)
    }

    /// Sets the half-size of the spacetime crosses.
    #[must_use]
    pub fn with_cross_radius(mut self, radius: f64) -> Self {
        self.cross_radius = radius;
        self
    }

    /// Sets the initial half-size of slice markers.
    #[must_use]
    pub fn with_slice_cross_radius(mut self, radius: f64) -> Self {
        self.slice_cross_radius = radius;
        self
    }

    /// Stored R0 events.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always `false` for a constructed value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Fade duration in proper seconds.
    #[must_use]
    pub const fn spot_duration(&self) -> f64 {
        self.spot_duration
    }

    /// Spacetime cross half-size.
    #[must_use]
    pub const fn cross_radius(&self) -> f64 {
        self.cross_radius
    }

    /// Initial slice marker half-size.
    #[must_use]
    pub const fn slice_cross_radius(&self) -> f64 {
        self.slice_cross_radius
    }

    /// Six vertices per event in the viewer frame: arms along `x`, `y` and
    /// `ct` (`+x, −x, −y, +y, −ct, +ct`).
    #[must_use]
    pub fn cross_vertices(&self, moment: &Moment) -> Vec<Event> {
        let d = self.cross_radius;
        let mut out = Vec::with_capacity(6 * self.events.len());
        for e in &self.events {
            let center = moment.view(e);
            out.push(center.add(&Event::new(d, 0.0, 0.0)));
            out.push(center.add(&Event::new(-d, 0.0, 0.0)));
            out.push(center.add(&Event::new(0.0, -d, 0.0)));
            out.push(center.add(&Event::new(0.0, d, 0.0)));
            out.push(center.add(&Event::new(0.0, 0.0, -d)));
            out.push(center.add(&Event::new(0.0, 0.0, d)));
        }
        out
    }

    /// Four vertices (`−x, +x, −y, +y`) per marker active at the instant.
    #[must_use]
    pub fn slice_cross_vertices(&self, moment: &Moment) -> Vec<Event> {
        let markers = self.slice(moment);
        let mut out = Vec::with_capacity(4 * markers.len());
        for m in markers {
            push_planar_cross(&mut out, m.center, m.radius);
        }
        out
    }

    /// Capacity of [`Self::slice_cross_vertices`].
    #[must_use]
    pub fn max_cross_len(&self) -> usize {
        4 * self.events.len()
    }
}

impl Sliceable for EventSet {
    type Item = Marker;

    /// An event is active while `0 ≤ ct − e.ct ≤ spot_duration·c`, both ends
    /// widened by the moment's tolerance.
    fn slice_into(&self, moment: &Moment, out: &mut Vec<Marker>) -> usize {
        let rho = self.spot_duration * moment.c();
        let eps = moment.epsilon();
        let ct = moment.ct();
        let before = out.len();
        for e in &self.events {
            let center = moment.view(e);
            let elapsed = ct - center.ct();
            if elapsed < -eps || elapsed > rho + eps {
                continue;
            }
            let radius =
                (self.slice_cross_radius * (1.0 - elapsed / rho)).clamp(0.0, self.slice_cross_radius);
            out.push(Marker { center, radius });
        }
        out.len() - before
    }

    fn max_slice_len(&self) -> usize {
        self.events.len()
    }
}

/// Upper bound on the number of ticks a chronometer may generate.
pub const MAX_CHRONOMETER_TICKS: f64 = 1_048_576.0;

/// Proper times `t₀ + n·period` for `n = 0, 1, …` while not after
/// `t₀ + duration`.
///
/// # Errors
/// [`GeomError::InvalidChronometer`] for a non-positive or non-finite period,
/// a negative or non-finite duration, or more than
/// [`MAX_CHRONOMETER_TICKS`] ticks.
pub fn chronometer_times(t0: f64, period: f64, duration: f64) -> Result<Vec<f64>, GeomError> {
    let usable = t0.is_finite()
        && period.is_finite()
        && period > 0.0
        && duration.is_finite()
        && duration >= 0.0
        && duration / period <= MAX_CHRONOMETER_TICKS;
    if !usable {
        return Err(GeomError::InvalidChronometer { period, duration });
    }
    let end = t0 + duration;
    let mut times = Vec::new();
    let mut n = 0_u32;
    loop {
        let t = t0 + f64::from(n) * period;
        if t > end {
            break;
        }
        times.push(t);
        n += 1;
    }
    Ok(times)
}

/// Event set ticking every `period` proper seconds at the position of
/// `start`, for `duration` seconds of the clock's own frame.
///
/// # Errors
/// See [`chronometer_times`] and [`EventSet::new`].
pub fn chronometer(
    transform: &FrameTransform,
    frame: Frame,
    start: ProperEvent,
    period: f64,
    duration: f64,
) -> Result<EventSet, GeomError> {
    let ticks: Vec<ProperEvent> = chronometer_times(start.t(), period, duration)?
        .into_iter()
        .map(|t| ProperEvent::new(start.x(), start.y(), t))
        .collect();
    EventSet::new(transform, frame, &ticks)
}
