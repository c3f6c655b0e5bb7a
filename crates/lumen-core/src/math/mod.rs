// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Spacetime math: light-time events, proper-time events, planar velocities
//! and the 3×3 matrices that move events between inertial frames.
//!
//! Everything is `f64`. Stored geometry reaches `±1000·C` in `ct`, and slices
//! compare interpolated coordinates against the current instant, so the extra
//! mantissa keeps rounding well below [`SLICE_EPSILON`].

mod event;
mod mat3;
mod vec2;

pub use event::{Event, Point2, ProperEvent};
pub use mat3::Mat3;
pub use vec2::Vec2;

/// Degeneracy threshold for vector normalisation.
pub const EPSILON: f64 = 1e-12;

/// Absolute tolerance (in `ct` units) used when comparing a coordinate with
/// the slicing instant.
///
/// Corners whose `ct` differs from the instant by at most this amount are
/// treated as lying on the cutting plane.
pub const SLICE_EPSILON: f64 = 1e-9;
