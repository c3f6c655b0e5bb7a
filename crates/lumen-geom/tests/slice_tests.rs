// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lumen_core::math::{Event, Point2, ProperEvent};
use lumen_core::{Frame, FrameTransform};
use lumen_geom::{
    chronometer, pad_into, EventSet, GeomError, LightCone, Moment, PointTrajectory, Primitive,
    PrimitiveSlice, Prism, Sliceable, TimeInterval, LIGHT_CONE_SAMPLES,
};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

fn lorentz() -> FrameTransform {
    FrameTransform::lorentz(1.0).unwrap()
}

fn square() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ]
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOL
}

fn assert_points_close(got: &[Point2], want: &[Point2]) {
    assert_eq!(got.len(), want.len(), "{got:?}");
    for (g, w) in got.iter().zip(want) {
        assert!(g.distance(w) <= TOL, "{g:?} != {w:?}");
    }
}

#[test]
fn trajectory_slice_respects_interval_ends() {
    let points = PointTrajectory::new(
        &lorentz(),
        Frame::Rest,
        TimeInterval::between(0.0, 2.0),
        &[Point2::new(1.0, 1.0)],
    )
    .unwrap();
    assert_eq!(points.slice(&Moment::rest(1.0, 0.0)), vec![Event::new(1.0, 1.0, 0.0)]);
    assert_eq!(points.slice(&Moment::rest(1.0, 2.0)), vec![Event::new(1.0, 1.0, 2.0)]);
    assert!(points.slice(&Moment::rest(1.0, 3.0)).is_empty());
    assert!(points.slice(&Moment::rest(1.0, -0.5)).is_empty());
}

#[test]
fn open_interval_resolves_to_drawing_bound() {
    let c = 2.0;
    let points = PointTrajectory::new(
        &FrameTransform::lorentz(c).unwrap(),
        Frame::Rest,
        TimeInterval::always(),
        &[Point2::new(0.0, 0.0)],
    )
    .unwrap();
    let w = points.body().worldlines()[0];
    assert_eq!(w.start().ct(), -1000.0 * c);
    assert_eq!(w.end().ct(), 1000.0 * c);
}

#[test]
fn prism_of_square_slices_to_its_outline() {
    let prism = Prism::closed(&lorentz(), Frame::Rest, TimeInterval::between(0.0, 2.0), &square()).unwrap();
    assert_eq!(prism.quad_count(), 4);
    assert_eq!(prism.max_slice_len(), 32);

    let lines = prism.slice(&Moment::rest(1.0, 1.0));
    assert_eq!(lines.len(), 8);
    let expected = [
        (square()[0], square()[1]),
        (square()[1], square()[2]),
        (square()[2], square()[3]),
        (square()[3], square()[0]),
    ];
    for (pair, (p, q)) in lines.chunks(2).zip(expected) {
        assert_eq!(pair, &[p, q]);
    }
    assert!(prism.slice(&Moment::rest(1.0, 2.5)).is_empty());
}

#[test]
fn open_rail_slices_to_a_single_segment() {
    let rail = [Point2::new(-10.0, -0.25), Point2::new(10.0, -0.25)];
    let prism = Prism::new(&lorentz(), Frame::Rest, TimeInterval::always(), &rail).unwrap();
    assert_eq!(prism.quad_count(), 1);
    assert_points_close(&prism.slice(&Moment::rest(1.0, 1.0)), &rail);
}

#[test]
fn open_outline_keeps_its_missing_side() {
    let bulb = [
        Point2::new(-0.1, -0.2),
        Point2::new(-0.1, -0.02),
        Point2::new(0.1, -0.02),
        Point2::new(0.1, -0.2),
    ];
    let prism = Prism::new(&lorentz(), Frame::Rest, TimeInterval::always(), &bulb).unwrap();
    assert_eq!(prism.quad_count(), 3);
    let lines = prism.slice(&Moment::rest(1.0, 1.0));
    assert_points_close(&lines, &[bulb[0], bulb[1], bulb[1], bulb[2], bulb[2], bulb[3]]);
}

#[test]
fn closed_prism_does_not_repeat_a_closed_outline() {
    let mut ring = square();
    ring.push(ring[0]);
    let prism = Prism::closed(&lorentz(), Frame::Rest, TimeInterval::always(), &ring).unwrap();
    assert_eq!(prism.quad_count(), 4);
    assert_eq!(prism.body().len(), 5);
}

#[test]
fn prism_outline_at_interval_start_is_in_plane() {
    let prism = Prism::closed(&lorentz(), Frame::Rest, TimeInterval::between(0.0, 2.0), &square()).unwrap();
    let lines = prism.slice(&Moment::rest(1.0, 0.0));
    // Every quad's bottom edge lies on the plane.
    assert_eq!(lines.len(), 8);
}

#[test]
fn prism_input_errors_are_reported() {
    let err = Prism::new(&lorentz(), Frame::Rest, TimeInterval::always(), &[]);
    assert_eq!(err, Err(GeomError::EmptyGeometry("prism")));
    let err = Prism::new(
        &lorentz(),
        Frame::moving(1.5, 0.0),
        TimeInterval::always(),
        &square(),
    );
    assert!(matches!(err, Err(GeomError::Frame(_))));
    let err = Prism::new(&lorentz(), Frame::Rest, TimeInterval::between(2.0, 1.0), &square());
    assert!(matches!(err, Err(GeomError::InvertedInterval { .. })));
    let err = Prism::new(
        &lorentz(),
        Frame::Rest,
        TimeInterval::always(),
        &[Point2::new(f64::NAN, 0.0)],
    );
    assert_eq!(err, Err(GeomError::NonFinite("prism")));
}

#[test]
fn single_vertex_prism_has_no_slice() {
    let prism = Prism::new(
        &lorentz(),
        Frame::Rest,
        TimeInterval::always(),
        &[Point2::new(0.0, 0.0)],
    )
    .unwrap();
    assert_eq!(prism.quad_count(), 0);
    assert!(prism.slice(&Moment::rest(1.0, 0.0)).is_empty());
    assert!(prism.face_vertices(&Moment::rest(1.0, 0.0)).is_empty());
}

#[test]
fn face_vertices_follow_boundary_walk() {
    let prism = Prism::closed(&lorentz(), Frame::Rest, TimeInterval::between(0.0, 1.0), &square()).unwrap();
    let faces = prism.face_vertices(&Moment::rest(1.0, 0.0));
    assert_eq!(faces.len(), 16);
    assert_eq!(
        &faces[..4],
        &[
            Event::new(0.0, 0.0, 0.0),
            Event::new(0.0, 0.0, 1.0),
            Event::new(1.0, 0.0, 1.0),
            Event::new(1.0, 0.0, 0.0),
        ]
    );
    assert_eq!(prism.body().worldline_vertices(&Moment::rest(1.0, 0.0)).len(), 10);
}

#[test]
fn moving_observer_sees_contracted_square() {
    let transform = lorentz();
    let prism = Prism::closed(
        &transform,
        Frame::Rest,
        TimeInterval::between(-10.0, 10.0),
        &square(),
    )
    .unwrap();
    let moment = Moment::observed_from(&transform, Frame::moving(0.6, 0.0), 1.0).unwrap();
    let lines = prism.slice(&moment);
    assert_eq!(lines.len(), 8);
    let min_x = lines.iter().map(Point2::x).fold(f64::INFINITY, f64::min);
    let max_x = lines.iter().map(Point2::x).fold(f64::NEG_INFINITY, f64::max);
    assert!(close(min_x, -0.6), "{min_x}");
    assert!(close(max_x, 0.2), "{max_x}");
    assert!(close(max_x - min_x, 0.8));
}

#[test]
fn light_cone_circle_grows_at_light_speed() {
    let cone = LightCone::new(Event::ORIGIN, Event::new(0.0, 0.0, 4.0)).unwrap();
    let circle = cone.slice(&Moment::rest(1.0, 2.0));
    assert_eq!(circle.len(), LIGHT_CONE_SAMPLES);
    assert_eq!(circle.first(), circle.last());
    for p in &circle {
        assert!(close(p.distance(&Point2::new(0.0, 0.0)), 2.0), "{p:?}");
    }
    assert!(cone.slice(&Moment::rest(1.0, 5.0)).is_empty());
    assert!(cone.slice(&Moment::rest(1.0, -1.0)).is_empty());

    let fan = cone.fan_vertices(&Moment::rest(1.0, 0.0));
    assert_eq!(fan.len(), 1 + LIGHT_CONE_SAMPLES);
    assert_eq!(fan[0], Event::ORIGIN);
    assert!(fan[1..].iter().all(|e| close(e.ct(), 4.0)));

    let lifted = cone.slice_vertices(&Moment::rest(1.0, 2.0));
    assert!(lifted.iter().all(|e| close(e.ct(), 2.0)));
}

#[test]
fn light_cone_from_proper_scales_time_by_c() {
    let transform = FrameTransform::lorentz(2.0).unwrap();
    let cone = LightCone::from_proper(
        &transform,
        Frame::Rest,
        ProperEvent::new(1.0, 0.0, 1.0),
        ProperEvent::new(1.0, 0.0, 3.0),
    )
    .unwrap();
    assert_eq!(cone.apex(), Event::new(1.0, 0.0, 2.0));
    assert_eq!(cone.terminal(), Event::new(1.0, 0.0, 6.0));

    let err = LightCone::from_proper(
        &transform,
        Frame::moving(2.5, 0.0),
        ProperEvent::new(0.0, 0.0, 0.0),
        ProperEvent::new(0.0, 0.0, 1.0),
    );
    assert!(matches!(err, Err(GeomError::Frame(_))));
}

#[test]
fn inverted_light_cone_is_rejected() {
    let err = LightCone::new(Event::new(0.0, 0.0, 2.0), Event::ORIGIN);
    assert_eq!(
        err,
        Err(GeomError::InvertedLightCone {
            apex: 2.0,
            terminal: 0.0
        })
    );
}

#[test]
fn event_marker_fades_over_spot_duration() {
    let events = EventSet::from_spacetime(vec![Event::new(0.0, 0.0, 1.0)])
        .unwrap()
        .with_spot_duration(0.3)
        .unwrap();
    let full = events.slice(&Moment::rest(1.0, 1.0));
    assert_eq!(full.len(), 1);
    assert!(close(full[0].radius, events.slice_cross_radius()));

    let half = events.slice(&Moment::rest(1.0, 1.15));
    assert!(close(half[0].radius, 0.05));

    let gone = events.slice(&Moment::rest(1.0, 1.3));
    assert_eq!(gone.len(), 1);
    assert!(gone[0].radius.abs() <= TOL);

    assert!(events.slice(&Moment::rest(1.0, 1.31)).is_empty());
    assert!(events.slice(&Moment::rest(1.0, 0.99)).is_empty());
    assert_eq!(events.slice_cross_vertices(&Moment::rest(1.0, 1.0)).len(), 4);
    assert_eq!(events.cross_vertices(&Moment::rest(1.0, 0.0)).len(), 6);
    assert!(matches!(
        events.clone().with_spot_duration(0.0),
        Err(GeomError::InvalidSpotDuration(_))
    ));
}

#[test]
fn moving_chronometer_ticks_are_dilated() {
    let clock = chronometer(
        &lorentz(),
        Frame::moving(0.6, 0.0),
        ProperEvent::new(0.0, 0.0, 0.0),
        1.0,
        2.0,
    )
    .unwrap();
    let expected = [(0.0, 0.0), (0.75, 1.25), (1.5, 2.5)];
    assert_eq!(clock.len(), expected.len());
    for (e, (x, ct)) in clock.events().iter().zip(expected) {
        assert!(close(e.x(), x) && close(e.ct(), ct), "{e:?}");
    }
}

#[test]
fn identity_boost_reproduces_raw_projection() {
    let points = PointTrajectory::new(
        &lorentz(),
        Frame::Rest,
        TimeInterval::between(0.0, 4.0),
        &square(),
    )
    .unwrap();
    let slice = points.slice(&Moment::rest(1.0, 2.0));
    let xy: Vec<Point2> = slice.iter().map(Event::xy).collect();
    assert_eq!(xy, square());
    assert_eq!(points.slice_cross_vertices(&Moment::rest(1.0, 2.0)).len(), 16);
}

#[test]
fn primitive_reuses_matching_buffer() {
    let prism: Primitive = Prism::closed(&lorentz(), Frame::Rest, TimeInterval::between(0.0, 2.0), &square())
        .unwrap()
        .into();
    let mut buf = PrimitiveSlice::Circle(vec![Point2::new(9.0, 9.0)]);
    let n = prism.slice_into(&Moment::rest(1.0, 1.0), &mut buf);
    assert_eq!(n, 8);
    assert!(matches!(buf, PrimitiveSlice::Lines(ref v) if v.len() == 8));
    let n = prism.slice_into(&Moment::rest(1.0, 3.0), &mut buf);
    assert_eq!(n, 0);
    assert!(buf.is_empty());
    assert_eq!(prism.kind(), "prism");
}

#[test]
fn pad_into_zero_fills_and_truncates() {
    let mut buf = [Point2::new(7.0, 7.0); 3];
    assert_eq!(pad_into(&[Point2::new(1.0, 2.0)], &mut buf), 1);
    assert_eq!(buf[1], Point2::default());
    let many = [Point2::new(1.0, 1.0); 5];
    assert_eq!(pad_into(&many, &mut buf), 3);
}

proptest! {
    #[test]
    fn prism_slice_ends_lie_on_point_worldlines(
        vx in -0.9f64..0.9, vy in -0.4f64..0.4, ct in -3.0f64..3.0
    ) {
        let transform = lorentz();
        let interval = TimeInterval::between(-20.0, 20.0);
        let prism = Prism::closed(&transform, Frame::Rest, interval, &square()).unwrap();
        let mut closed = square();
        closed.push(closed[0]);
        let points = PointTrajectory::new(&transform, Frame::Rest, interval, &closed).unwrap();
        let moment = Moment::observed_from(&transform, Frame::moving(vx, vy), ct).unwrap();

        let lines = prism.slice(&moment);
        let live = points.slice(&moment);
        prop_assert_eq!(lines.len(), 8);
        prop_assert_eq!(live.len(), 5);
        for (k, pair) in lines.chunks(2).enumerate() {
            prop_assert!(pair[0].distance(&live[k].xy()) <= 1e-6);
            prop_assert!(pair[1].distance(&live[k + 1].xy()) <= 1e-6);
        }
    }
}
