// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f64::consts::TAU;

use lumen_core::math::{Event, Point2, ProperEvent};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::moment::Moment;
use crate::primitive::Sliceable;

/// Number of points sampled on a light-cone circle; the loop is closed, so
/// the last sample repeats the first.
pub const LIGHT_CONE_SAMPLES: usize = 50;

/// Circular wavefront leaving `apex` at the light speed, drawn until
/// `terminal`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightCone {
    apex: Event,
    terminal: Event,
}

impl LightCone {
    /// Creates a cone from R0 light-time events.
    ///
    /// # Errors
    /// [`GeomError::NonFinite`] for NaN or infinite coordinates and
    /// [`GeomError::InvertedLightCone`] when `terminal` precedes `apex`.
    pub fn new(apex: Event, terminal: Event) -> Result<Self, GeomError> {
        if !apex.is_finite() || !terminal.is_finite() {
            return Err(GeomError::NonFinite("light cone"));
        }
        if terminal.ct() < apex.ct() {
            return Err(GeomError::InvertedLightCone {
                apex: apex.ct(),
                terminal: terminal.ct(),
            });
        }
        Ok(Self { apex, terminal })
    }

    /// Creates a cone from proper-time events authored in `frame`.
    ///
    /// # Errors
    /// [`GeomError::Frame`] when `frame` is not a valid observer for
    /// `transform`, otherwise the errors of [`LightCone::new`].
    pub fn from_proper(
        transform: &FrameTransform,
        frame: Frame,
        apex: ProperEvent,
        terminal: ProperEvent,
    ) -> Result<Self, GeomError> {
        let apex = transform.event_to_spacetime(frame, apex)?;
        let terminal = transform.event_to_spacetime(frame, terminal)?;
        Self::new(apex, terminal)
    }

    /// Apex in R0.
    #[must_use]
    pub const fn apex(&self) -> Event {
        self.apex
    }

    /// Terminal event in R0.
    #[must_use]
    pub const fn terminal(&self) -> Event {
        self.terminal
    }

    /// Apex followed by the rim at the terminal instant, in the viewer
    /// frame; suited to a triangle fan.
    #[must_use]
    pub fn fan_vertices(&self, moment: &Moment) -> Vec<Event> {
        let apex = moment.view(&self.apex);
        let terminal = moment.view(&self.terminal);
        let radius = moment.c() * (terminal.ct() - apex.ct());
        let mut out = Vec::with_capacity(1 + LIGHT_CONE_SAMPLES);
        out.push(apex);
        out.extend(circle(apex.xy(), radius).map(|p| p.at_ct(terminal.ct())));
        out
    }

    /// The slice circle lifted to `(x, y, ct)`; empty outside the cone.
    #[must_use]
    pub fn slice_vertices(&self, moment: &Moment) -> Vec<Event> {
        let ct = moment.ct();
        self.slice(moment).into_iter().map(|p| p.at_ct(ct)).collect()
    }
}

/// Closed loop of [`LIGHT_CONE_SAMPLES`] points around `center`, starting
/// straight up the `y` axis.
fn circle(center: Point2, radius: f64) -> impl Iterator<Item = Point2> {
    let steps = LIGHT_CONE_SAMPLES - 1;
    (0..steps)
        .map(move |k| {
            #[allow(clippy::cast_precision_loss)]
            let theta = TAU * k as f64 / steps as f64;
            Point2::new(
                center.x() + radius * theta.sin(),
                center.y() + radius * theta.cos(),
            )
        })
        .chain(std::iter::once(Point2::new(center.x(), center.y() + radius)))
}

impl Sliceable for LightCone {
    type Item = Point2;

    fn slice_into(&self, moment: &Moment, out: &mut Vec<Point2>) -> usize {
        let apex = moment.view(&self.apex);
        let terminal = moment.view(&self.terminal);
        let ct = moment.ct();
        let eps = moment.epsilon();
        if ct < apex.ct() - eps || ct > terminal.ct() + eps {
            return 0;
        }
        let radius = (moment.c() * (ct - apex.ct())).max(0.0);
        let before = out.len();
        out.extend(circle(apex.xy(), radius));
        out.len() - before
    }

    fn max_slice_len(&self) -> usize {
        LIGHT_CONE_SAMPLES
    }
}
