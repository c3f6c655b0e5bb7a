// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use lumen_core::math::{Event, Point2};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::interval::TimeInterval;
use crate::moment::Moment;
use crate::primitive::Sliceable;
use crate::slice::ct_slice_of_quads;

use super::Persistent;

/// Polygon held over a time interval: the worldsheet swept by its outline.
///
/// Adjacent worldlines bound planar quads, so `N` outline vertices give
/// `N − 1` quads. The outline is stored as given: an open polyline (a rail,
/// a mirror) stays open, and a polygon is closed by repeating its first
/// vertex last, or by building it with [`Prism::closed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    body: Persistent,
}

impl Prism {
    /// Builds the worldsheet of `outline` (proper-frame vertices in `frame`).
    ///
    /// # Errors
    /// See [`Persistent::new`].
    pub fn new(
        transform: &FrameTransform,
        frame: Frame,
        interval: TimeInterval,
        outline: &[Point2],
    ) -> Result<Self, GeomError> {
        let body = Persistent::new(transform, frame, interval, outline, "prism")?;
        Ok(Self { body })
    }

    /// Like [`Prism::new`], but repeats the first vertex of `polygon` last
    /// when it is not already there.
    ///
    /// # Errors
    /// See [`Persistent::new`].
    pub fn closed(
        transform: &FrameTransform,
        frame: Frame,
        interval: TimeInterval,
        polygon: &[Point2],
    ) -> Result<Self, GeomError> {
        let mut outline = polygon.to_vec();
        if let (Some(&first), Some(&last)) = (polygon.first(), polygon.last()) {
            if polygon.len() > 1 && first != last {
                outline.push(first);
            }
        }
        Self::new(transform, frame, interval, &outline)
    }

    /// Shared worldline storage.
    #[must_use]
    pub const fn body(&self) -> &Persistent {
        &self.body
    }

    /// Number of quads on the worldsheet.
    #[must_use]
    pub fn quad_count(&self) -> usize {
        self.body.len().saturating_sub(1)
    }

    /// Quad corners in the viewer frame, four per quad in `[A, B, D, C]`
    /// order (a renderer-friendly fan).
    #[must_use]
    pub fn face_vertices(&self, moment: &Moment) -> Vec<Event> {
        let viewed = self.body.viewed(moment);
        let mut out = Vec::with_capacity(4 * self.quad_count());
        for pair in viewed.windows(2) {
            let (a, b) = pair[0];
            let (c, d) = pair[1];
            out.extend_from_slice(&[a, b, d, c]);
        }
        out
    }
}

impl Sliceable for Prism {
    type Item = Point2;

    fn slice_into(&self, moment: &Moment, out: &mut Vec<Point2>) -> usize {
        let viewed = self.body.viewed(moment);
        ct_slice_of_quads(moment.ct(), &viewed, moment.epsilon(), out).unwrap_or(0)
    }

    fn max_slice_len(&self) -> usize {
        8 * self.quad_count()
    }
}
