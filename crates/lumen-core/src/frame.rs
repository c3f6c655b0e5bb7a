// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frame-change transforms between the absolute frame R0 and inertial frames.
//!
//! A [`Frame`] is either R0 itself ([`Frame::Rest`]) or a frame moving at a
//! constant planar velocity relative to R0. [`direct`] builds the matrix that
//! re-expresses R0 events `(x, y, ct)` in that frame; [`inverse`] goes back.
//! [`to_spacetime`] is the single entry point turning user-authored
//! proper-time events into stored R0 light-time events.
//!
//! Two kinematics are supported: special-relativistic Lorentz boosts and
//! their Galilean limit (shear in `ct`, no time dilation). Both reject
//! velocities at or above the light speed so a frame can never produce
//! non-finite geometry.

use thiserror::Error;

use crate::math::{Event, Mat3, ProperEvent, Vec2};

/// Which family of boosts relates inertial frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kinematics {
    /// Special relativity: time dilation, length contraction, relativity of
    /// simultaneity.
    #[default]
    Lorentz,
    /// Classical limit: absolute time, velocities add linearly.
    Galilean,
}

/// An inertial frame, described by its velocity relative to R0.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Frame {
    /// The absolute reference frame R0.
    #[default]
    Rest,
    /// A frame moving at the given velocity relative to R0.
    Moving(Vec2),
}

impl Frame {
    /// Frame moving at `(vx, vy)` relative to R0.
    pub const fn moving(vx: f64, vy: f64) -> Self {
        Self::Moving(Vec2::new(vx, vy))
    }

    /// Velocity relative to R0 (zero for [`Frame::Rest`]).
    pub fn velocity(&self) -> Vec2 {
        match self {
            Self::Rest => Vec2::ZERO,
            Self::Moving(v) => *v,
        }
    }

    /// Frame moving at the opposite velocity.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Rest => Self::Rest,
            Self::Moving(v) => Self::Moving(-*v),
        }
    }
}

impl From<Option<Vec2>> for Frame {
    fn from(value: Option<Vec2>) -> Self {
        value.map_or(Self::Rest, Self::Moving)
    }
}

impl core::ops::Neg for Frame {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.reversed()
    }
}

/// Errors raised while building a frame transform.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FrameError {
    /// The frame moves at or above the light speed.
    #[error("frame speed {speed} is not below the light speed {c}")]
    Superluminal {
        /// Magnitude of the requested velocity.
        speed: f64,
        /// Light speed it was compared against.
        c: f64,
    },
    /// The light speed is zero, negative, or not finite.
    #[error("light speed must be finite and positive, got {0}")]
    InvalidLightSpeed(f64),
    /// The velocity has a NaN or infinite component.
    #[error("frame velocity is not finite")]
    NonFinite,
}

/// Checks that `c` is usable and that `frame` is strictly subluminal.
pub fn check_frame(frame: Frame, c: f64) -> Result<(), FrameError> {
    if !c.is_finite() || c <= 0.0 {
        return Err(FrameError::InvalidLightSpeed(c));
    }
    let v = frame.velocity();
    if !v.is_finite() {
        return Err(FrameError::NonFinite);
    }
    let v2 = v.length_squared();
    if v2 >= c * c {
        return Err(FrameError::Superluminal {
            speed: v2.sqrt(),
            c,
        });
    }
    Ok(())
}

/// Lorentz factor `γ = 1/√(1 − |v|²/c²)` of a frame.
pub fn gamma(frame: Frame, c: f64) -> Result<f64, FrameError> {
    check_frame(frame, c)?;
    let v2 = frame.velocity().length_squared();
    Ok(1.0 / (1.0 - v2 / (c * c)).sqrt())
}

/// Matrix mapping R0 coordinates `(x, y, ct)` to coordinates in `frame`.
///
/// For [`Kinematics::Lorentz`] the matrix is the symmetric boost
///
/// ```text
/// | 1 + (γ−1)v̂x²   (γ−1)v̂xv̂y    −γvx/c |
/// | (γ−1)v̂xv̂y     1 + (γ−1)v̂y²  −γvy/c |
/// | −γvx/c         −γvy/c         γ     |
/// ```
///
/// and for [`Kinematics::Galilean`] the shear `x' = x − (vx/c)·ct`,
/// `ct' = ct`. A zero velocity yields the identity in both cases.
///
/// # Examples
/// ```
/// use lumen_core::frame::{direct, Frame, Kinematics};
/// use lumen_core::math::Mat3;
/// let m = direct(Kinematics::Lorentz, Frame::Rest, 1.0).unwrap();
/// assert_eq!(m, Mat3::identity());
/// assert!(direct(Kinematics::Lorentz, Frame::moving(1.0, 0.0), 1.0).is_err());
/// ```
pub fn direct(kinematics: Kinematics, frame: Frame, c: f64) -> Result<Mat3, FrameError> {
    check_frame(frame, c)?;
    let v = frame.velocity();
    let v2 = v.length_squared();
    if v2 == 0.0 {
        return Ok(Mat3::identity());
    }
    let [vx, vy] = v.to_array();
    let m = match kinematics {
        Kinematics::Lorentz => {
            let vxx = vx * vx / v2;
            let vyy = vy * vy / v2;
            let vxy = vx * vy / v2;
            let g = 1.0 / (1.0 - v2 / (c * c)).sqrt();
            let g1 = g - 1.0;
            let gvxc = -g * vx / c;
            let gvyc = -g * vy / c;
            Mat3::from_rows([
                [1.0 + g1 * vxx, g1 * vxy, gvxc],
                [g1 * vxy, 1.0 + g1 * vyy, gvyc],
                [gvxc, gvyc, g],
            ])
        }
        Kinematics::Galilean => Mat3::from_rows([
            [1.0, 0.0, -vx / c],
            [0.0, 1.0, -vy / c],
            [0.0, 0.0, 1.0],
        ]),
    };
    Ok(m)
}

/// Matrix mapping coordinates in `frame` back to R0; `direct(−v)`.
pub fn inverse(kinematics: Kinematics, frame: Frame, c: f64) -> Result<Mat3, FrameError> {
    direct(kinematics, frame.reversed(), c)
}

/// Applies `m` to a batch of light-time events.
pub fn transform(m: &Mat3, events: &[Event]) -> Vec<Event> {
    events.iter().map(|e| m.transform_event(e)).collect()
}

/// Applies `m` to a batch of light-time events in place.
pub fn transform_in_place(m: &Mat3, events: &mut [Event]) {
    for e in events.iter_mut() {
        *e = m.transform_event(e);
    }
}

/// Converts proper-time events authored in `frame` into R0 light-time events.
///
/// Times are scaled by `c` first (`t → ct`), then the inverse boost of
/// `frame` is applied. For [`Frame::Rest`] only the scaling happens.
pub fn to_spacetime(
    kinematics: Kinematics,
    frame: Frame,
    c: f64,
    events: &[ProperEvent],
) -> Result<Vec<Event>, FrameError> {
    let scaled = events.iter().map(|e| e.to_light_time(c));
    match frame {
        Frame::Rest => {
            check_frame(frame, c)?;
            Ok(scaled.collect())
        }
        Frame::Moving(_) => {
            let m = inverse(kinematics, frame, c)?;
            Ok(scaled.map(|e| m.transform_event(&e)).collect())
        }
    }
}

/// Light speed and kinematics bundled together, as scenes use them.
///
/// Every primitive of a scene is built against the same `FrameTransform`,
/// and the per-frame driver builds its viewing boost from it too.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameTransform {
    kinematics: Kinematics,
    c: f64,
}

impl FrameTransform {
    /// Creates a transform family, validating the light speed.
    pub fn new(kinematics: Kinematics, c: f64) -> Result<Self, FrameError> {
        check_frame(Frame::Rest, c)?;
        Ok(Self { kinematics, c })
    }

    /// Lorentz transforms with light speed `c`.
    pub fn lorentz(c: f64) -> Result<Self, FrameError> {
        Self::new(Kinematics::Lorentz, c)
    }

    /// Galilean transforms with light speed `c`.
    pub fn galilean(c: f64) -> Result<Self, FrameError> {
        Self::new(Kinematics::Galilean, c)
    }

    /// Boost family.
    pub fn kinematics(&self) -> Kinematics {
        self.kinematics
    }

    /// Light speed.
    pub fn c(&self) -> f64 {
        self.c
    }

    /// See [`direct`].
    pub fn direct(&self, frame: Frame) -> Result<Mat3, FrameError> {
        direct(self.kinematics, frame, self.c)
    }

    /// See [`inverse`].
    pub fn inverse(&self, frame: Frame) -> Result<Mat3, FrameError> {
        inverse(self.kinematics, frame, self.c)
    }

    /// See [`to_spacetime`].
    pub fn to_spacetime(
        &self,
        frame: Frame,
        events: &[ProperEvent],
    ) -> Result<Vec<Event>, FrameError> {
        to_spacetime(self.kinematics, frame, self.c, events)
    }

    /// Converts a single proper-time event; see [`to_spacetime`].
    pub fn event_to_spacetime(&self, frame: Frame, event: ProperEvent) -> Result<Event, FrameError> {
        let m = self.inverse(frame)?;
        Ok(m.transform_event(&event.to_light_time(self.c)))
    }
}
