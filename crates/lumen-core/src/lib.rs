// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lumen-core: spacetime math and frame transforms for 2+1D relativity.
//!
//! Events are `(x, y, ct)` triples in light-time units. Geometry is stored in
//! an absolute frame R0 and re-expressed in a viewing frame every animation
//! frame through the boost matrices built by [`frame`].
#![forbid(unsafe_code)]

pub mod frame;
pub mod math;

pub use frame::{
    direct, inverse, to_spacetime, transform, Frame, FrameError, FrameTransform, Kinematics,
};
pub use math::{Event, Mat3, Point2, ProperEvent, Vec2};
