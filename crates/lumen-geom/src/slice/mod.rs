// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Intersections of viewer-frame geometry with the plane `ct = const`.
//!
//! Everything here works on events that are already expressed in the viewer
//! frame; primitives apply the viewing boost before calling in.

pub mod quad;

use lumen_core::math::{Event, Point2};

pub use quad::{slice_lines_of_quad, CutKind, QuadCut, QUAD_CUTS};

/// Position of a coordinate relative to the cutting plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Side {
    /// Strictly before the instant.
    Below = -1,
    /// Within tolerance of the instant.
    At = 0,
    /// Strictly after the instant.
    Above = 1,
}

impl Side {
    /// Classifies `value` against `ct`, treating anything within `epsilon`
    /// as lying on the plane.
    #[must_use]
    pub fn classify(value: f64, ct: f64, epsilon: f64) -> Self {
        let d = value - ct;
        if d.abs() <= epsilon {
            Self::At
        } else if d < 0.0 {
            Self::Below
        } else {
            Self::Above
        }
    }
}

/// Point where the segment `a → b` crosses `ct`.
///
/// `λ = (ct − a.ct) / (b.ct − a.ct)`, clamped to `[0, 1]`. A segment lying in
/// the plane (both ends within `epsilon` of each other in `ct`) yields its
/// start point.
#[must_use]
pub fn ct_section(ct: f64, a: &Event, b: &Event, epsilon: f64) -> Point2 {
    let dz = b.ct() - a.ct();
    if dz.abs() <= epsilon {
        return a.xy();
    }
    let lambda = ((ct - a.ct()) / dz).clamp(0.0, 1.0);
    Point2::new(
        (1.0 - lambda) * a.x() + lambda * b.x(),
        (1.0 - lambda) * a.y() + lambda * b.y(),
    )
}

/// Slices a batch of worldlines, each given as its `(start, end)` pair.
///
/// A worldline contributes the interpolated point, lifted to `(x, y, ct)`,
/// when `ct` lies in `[min(a.ct, b.ct), max(a.ct, b.ct)]` widened by
/// `epsilon`. Returns the number of points appended.
pub fn slice_points_of_segments<I>(ct: f64, segments: I, epsilon: f64, out: &mut Vec<Event>) -> usize
where
    I: IntoIterator<Item = (Event, Event)>,
{
    let before = out.len();
    for (a, b) in segments {
        let lo = a.ct().min(b.ct());
        let hi = a.ct().max(b.ct());
        if ct >= lo - epsilon && ct <= hi + epsilon {
            out.push(ct_section(ct, &a, &b, epsilon).at_ct(ct));
        }
    }
    out.len() - before
}

/// Slices the quads between consecutive worldlines and appends the result
/// to `out` as a line list.
///
/// Returns the number of points appended, or `None` when there are fewer
/// than two worldlines or no quad meets the plane.
pub fn ct_slice_of_quads(
    ct: f64,
    worldlines: &[(Event, Event)],
    epsilon: f64,
    out: &mut Vec<Point2>,
) -> Option<usize> {
    if worldlines.len() < 2 {
        return None;
    }
    let before = out.len();
    for pair in worldlines.windows(2) {
        let (a, b) = pair[0];
        let (c, d) = pair[1];
        slice_lines_of_quad(ct, &[a, b, c, d], epsilon, out);
    }
    let added = out.len() - before;
    (added > 0).then_some(added)
}
