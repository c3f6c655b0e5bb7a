// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Time-extended primitives and their instantaneous slices.

This crate provides:
- Worldline storage for point trajectories and polygon worldsheets (`Prism`).
- Event sets with fading markers, chronometers and light cones.
- Slicing of viewer-frame geometry with the plane `ct = const`, including the
  81-entry sign-pattern table used for quads.
- Edge-triggered notifiers.

Design notes:
- Geometry is converted to the absolute frame R0 once, at construction.
- Slicing is pure: it reads a `Moment` (viewing boost, light speed, instant)
  and writes into caller-owned buffers.
- Corners within `SLICE_EPSILON` of the instant lie on the cutting plane.
"]
#![forbid(unsafe_code)]

mod buffer;
mod error;
mod interval;
mod moment;
/// Watchers firing when the viewer's instant passes an event.
pub mod notifier;
mod primitive;
/// Prisms, point trajectories, event sets and light cones.
pub mod primitives;
/// Plane cuts of segments and quads.
pub mod slice;

pub use buffer::pad_into;
pub use error::GeomError;
pub use interval::{Bound, TimeInterval, UNBOUNDED_T};
pub use moment::Moment;
pub use notifier::{Notifier, NotifierState};
pub use primitive::{Primitive, PrimitiveSlice, Sliceable};
pub use primitives::{
    chronometer, EventSet, LightCone, Marker, PointTrajectory, Prism, Worldline,
    LIGHT_CONE_SAMPLES,
};
