// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sign-pattern table for cutting a planar spacetime quad with `ct = const`.
//!
//! A quad is the face swept between two neighbouring worldlines. Corners are
//! named after the worldlines they belong to:
//!
//! ```text
//!   B ──── D      ct ↑     A, B: start/end of worldline i
//!   │      │              C, D: start/end of worldline i + 1
//!   A ──── C
//! ```
//!
//! The boundary is walked `A → B → D → C → A`. Each corner is classified as
//! [`Side::Below`], [`Side::At`] or [`Side::Above`] the cutting plane, and
//! the 3⁴ = 81 resulting patterns index a table built at compile time. A
//! table entry lists segments whose ends are [`Feature`]s: a corner taken
//! verbatim, or the interpolated crossing of a boundary edge.
//!
//! Rules, in order:
//! 1. Boundary edges with both corners `At` lie in the plane; they are the
//!    whole cut (four of them when the quad lies in the plane).
//! 2. Otherwise the features are the `At` corners plus the edges whose
//!    corners sit strictly on opposite sides, in walk order:
//!    - two features form the cut;
//!    - none or one (a corner touching the plane) means no cut;
//!    - one corner and two crossings cannot happen on a convex planar quad;
//!      the corner is treated as a graze and the crossings form the cut;
//!    - four crossings (alternating sides) mean the quad is twisted and no
//!      cut is produced.

use lumen_core::math::{Event, Point2};

use super::{ct_section, Side};

/// Quad corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Start of the first worldline.
    A = 0,
    /// End of the first worldline.
    B = 1,
    /// Start of the second worldline.
    C = 2,
    /// End of the second worldline.
    D = 3,
}

impl Corner {
    /// All corners, in `[A, B, C, D]` order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Corners in boundary-walk order.
    pub const WALK: [Self; 4] = [Self::A, Self::B, Self::D, Self::C];

    /// Index into `[A, B, C, D]` arrays.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Boundary edge, named after its corners in walk order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    /// First worldline.
    AB,
    /// Cross-connection at the worldlines' ends.
    BD,
    /// Second worldline, walked backwards.
    DC,
    /// Cross-connection at the worldlines' starts.
    CA,
}

impl Edge {
    /// Edges in boundary-walk order.
    pub const WALK: [Self; 4] = [Self::AB, Self::BD, Self::DC, Self::CA];

    /// The two corners joined by this edge, in walk order.
    pub const fn corners(self) -> (Corner, Corner) {
        match self {
            Self::AB => (Corner::A, Corner::B),
            Self::BD => (Corner::B, Corner::D),
            Self::DC => (Corner::D, Corner::C),
            Self::CA => (Corner::C, Corner::A),
        }
    }
}

/// End point of a cut segment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    /// A corner lying on the cutting plane, used verbatim.
    Corner(Corner),
    /// The point where the plane crosses an edge.
    Crossing(Edge),
}

/// Shape of a table entry, kept for diagnostics and tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CutKind {
    /// The plane misses the quad.
    Miss,
    /// The plane touches a single corner.
    Touch,
    /// The plane cuts the quad along one segment.
    Segment,
    /// One or more boundary edges lie in the plane.
    InPlane,
    /// A corner grazes the plane next to a proper cut (rounding artefact).
    Graze,
    /// Alternating sides around the boundary: the quad is not planar.
    Twisted,
}

/// Table entry: the segments a sign pattern produces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct QuadCut {
    kind: CutKind,
    segments: [(Feature, Feature); 4],
    len: u8,
}

const PLACEHOLDER: (Feature, Feature) = (Feature::Corner(Corner::A), Feature::Corner(Corner::A));

impl QuadCut {
    const fn empty(kind: CutKind) -> Self {
        Self {
            kind,
            segments: [PLACEHOLDER; 4],
            len: 0,
        }
    }

    const fn single(kind: CutKind, from: Feature, to: Feature) -> Self {
        let mut cut = Self::empty(kind);
        cut.segments[0] = (from, to);
        cut.len = 1;
        cut
    }

    /// Shape of the cut.
    pub const fn kind(&self) -> CutKind {
        self.kind
    }

    /// Segments of the cut, in boundary-walk order.
    pub fn segments(&self) -> &[(Feature, Feature)] {
        &self.segments[..self.len as usize]
    }

    /// Number of points the cut contributes to a line list.
    pub const fn point_count(&self) -> usize {
        2 * self.len as usize
    }
}

/// Number of distinct sign patterns.
pub const PATTERN_COUNT: usize = 81;

/// Base-3 index of a sign pattern given in `[A, B, C, D]` order.
pub const fn pattern_index(signs: [Side; 4]) -> usize {
    let mut index = 0;
    let mut i = 0;
    while i < 4 {
        let digit = match signs[i] {
            Side::Below => 0,
            Side::At => 1,
            Side::Above => 2,
        };
        index = index * 3 + digit;
        i += 1;
    }
    index
}

/// Inverse of [`pattern_index`].
pub const fn pattern_signs(mut index: usize) -> [Side; 4] {
    let mut signs = [Side::At; 4];
    let mut i = 4;
    while i > 0 {
        i -= 1;
        signs[i] = match index % 3 {
            0 => Side::Below,
            1 => Side::At,
            _ => Side::Above,
        };
        index /= 3;
    }
    signs
}

const fn is_at(signs: &[Side; 4], corner: Corner) -> bool {
    signs[corner.index()] as i8 == Side::At as i8
}

const fn crosses(signs: &[Side; 4], edge: Edge) -> bool {
    let (p, q) = edge.corners();
    (signs[p.index()] as i8) * (signs[q.index()] as i8) < 0
}

const fn build_cut(signs: [Side; 4]) -> QuadCut {
    // Rule 1: edges lying in the plane.
    let mut in_plane = QuadCut::empty(CutKind::InPlane);
    let mut i = 0;
    while i < 4 {
        let edge = Edge::WALK[i];
        let (p, q) = edge.corners();
        if is_at(&signs, p) && is_at(&signs, q) {
            in_plane.segments[in_plane.len as usize] = (Feature::Corner(p), Feature::Corner(q));
            in_plane.len += 1;
        }
        i += 1;
    }
    if in_plane.len > 0 {
        return in_plane;
    }

    // Rule 2: touching corners and strict crossings, in walk order.
    let mut features = [Feature::Corner(Corner::A); 8];
    let mut count = 0;
    let mut corners = 0;
    let mut i = 0;
    while i < 4 {
        let corner = Corner::WALK[i];
        if is_at(&signs, corner) {
            features[count] = Feature::Corner(corner);
            count += 1;
            corners += 1;
        }
        let edge = Edge::WALK[i];
        if crosses(&signs, edge) {
            features[count] = Feature::Crossing(edge);
            count += 1;
        }
        i += 1;
    }

    match count {
        0 => QuadCut::empty(CutKind::Miss),
        1 => QuadCut::empty(CutKind::Touch),
        2 => QuadCut::single(CutKind::Segment, features[0], features[1]),
        3 if corners == 1 => {
            let mut crossings = [Feature::Corner(Corner::A); 2];
            let mut n = 0;
            let mut j = 0;
            while j < 3 {
                if let Feature::Crossing(_) = features[j] {
                    crossings[n] = features[j];
                    n += 1;
                }
                j += 1;
            }
            QuadCut::single(CutKind::Graze, crossings[0], crossings[1])
        }
        _ => QuadCut::empty(CutKind::Twisted),
    }
}

const fn build_table() -> [QuadCut; PATTERN_COUNT] {
    let mut table = [QuadCut::empty(CutKind::Miss); PATTERN_COUNT];
    let mut index = 0;
    while index < PATTERN_COUNT {
        table[index] = build_cut(pattern_signs(index));
        index += 1;
    }
    table
}

/// Every sign pattern's cut, indexed by [`pattern_index`].
pub static QUAD_CUTS: [QuadCut; PATTERN_COUNT] = build_table();

/// Looks up the cut for a sign pattern given in `[A, B, C, D]` order.
pub fn quad_cut(signs: [Side; 4]) -> &'static QuadCut {
    &QUAD_CUTS[pattern_index(signs)]
}

/// Resolves a feature to its planar point at light-time `ct`.
pub fn feature_point(feature: Feature, corners: &[Event; 4], ct: f64, epsilon: f64) -> Point2 {
    match feature {
        Feature::Corner(corner) => corners[corner.index()].xy(),
        Feature::Crossing(edge) => {
            let (p, q) = edge.corners();
            ct_section(ct, &corners[p.index()], &corners[q.index()], epsilon)
        }
    }
}

/// Cuts the quad `A, B, C, D` (already in the viewer frame) at `ct`.
///
/// Points are appended to `out` as a line list (two points per segment) and
/// the table entry used is returned. Corners within `epsilon` of `ct` count
/// as lying on the plane.
pub fn slice_lines_of_quad(
    ct: f64,
    corners: &[Event; 4],
    epsilon: f64,
    out: &mut Vec<Point2>,
) -> &'static QuadCut {
    let signs = [
        Side::classify(corners[0].ct(), ct, epsilon),
        Side::classify(corners[1].ct(), ct, epsilon),
        Side::classify(corners[2].ct(), ct, epsilon),
        Side::classify(corners[3].ct(), ct, epsilon),
    ];
    let cut = quad_cut(signs);
    match cut.kind() {
        CutKind::Graze => tracing::debug!(?signs, ct, "quad corner grazes the slice plane"),
        CutKind::Twisted => tracing::warn!(?signs, ct, "non-planar quad skipped"),
        _ => {}
    }
    for &(from, to) in cut.segments() {
        out.push(feature_point(from, corners, ct, epsilon));
        out.push(feature_point(to, corners, ct, epsilon));
    }
    cut
}
