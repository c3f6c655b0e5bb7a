// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lumen_core::math::{Event, Point2};
use lumen_core::{Frame, FrameError};
use lumen_geom::{LightCone, Notifier, PrimitiveSlice, Prism, TimeInterval};
use lumen_universe::{SliceBuffers, Universe, UniverseConfig, UniverseError};
use proptest::prelude::*;

fn config(t_max: f64) -> UniverseConfig {
    UniverseConfig {
        t_max,
        ..UniverseConfig::default()
    }
}

fn counter() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
    let hits = Arc::new(AtomicUsize::new(0));
    let read = Arc::clone(&hits);
    (hits, move || read.load(Ordering::SeqCst))
}

#[test]
fn universe_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Universe>();
}

#[test]
fn clock_advances_in_light_time() {
    let mut u = Universe::new(UniverseConfig {
        c: 2.0,
        ..UniverseConfig::default()
    })
    .unwrap();
    let report = u.tick(0.5).unwrap();
    assert_eq!(report.frame, 1);
    assert_eq!(u.ct(), 1.0);
    assert_eq!(report.moment.ct(), 1.0);
    assert_eq!(report.ct_max, 10.0);
    assert!(!report.restarted);
}

#[test]
fn clock_wraps_past_t_max_and_runs_callbacks() {
    let mut u = Universe::new(config(1.0)).unwrap();
    let (hits, count) = counter();
    u.on_restart(move || {
        hits.fetch_add(1, Ordering::SeqCst);
    });
    for _ in 0..3 {
        assert!(!u.tick(0.3).unwrap().restarted);
    }
    let report = u.tick(0.3).unwrap();
    assert!(report.restarted);
    assert_eq!(u.ct(), 0.0);
    assert_eq!(u.restarts(), 1);
    assert_eq!(count(), 1);
}

#[test]
fn notifiers_fire_once_per_pass() {
    let mut u = Universe::new(config(1.0)).unwrap();
    let (hits, count) = counter();
    let id = u.add_notifier(
        Notifier::from_spacetime(Event::new(0.0, 0.0, 0.5), move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap(),
    );
    let mut fired_on = Vec::new();
    for frame in 1..=7 {
        let report = u.tick(0.25).unwrap();
        if report.fired.iter().any(|(n, _)| *n == id) {
            fired_on.push(frame);
        }
    }
    // ct per frame: .25 .5 .75 1.0 0 (wrapped) .25 .5
    assert_eq!(fired_on, vec![2, 7]);
    assert_eq!(count(), 2);
}

#[test]
fn viewing_velocity_eases_toward_target() {
    let mut u = Universe::new(UniverseConfig::default()).unwrap();
    u.set_view_frame(Frame::moving(0.5, 0.0)).unwrap();
    u.tick(0.0).unwrap();
    assert!((u.view_frame().velocity().x() - 0.05).abs() < 1e-12);
    for _ in 0..200 {
        u.tick(0.0).unwrap();
    }
    assert!((u.view_frame().velocity().x() - 0.5).abs() < 1e-6);
    assert_eq!(u.target_frame(), Frame::moving(0.5, 0.0));

    u.force_view_frame(Frame::Rest).unwrap();
    assert_eq!(u.view_frame(), Frame::Rest);
    assert!(matches!(
        u.set_view_frame(Frame::moving(1.0, 0.0)),
        Err(UniverseError::Frame(FrameError::Superluminal { .. }))
    ));
    assert_eq!(u.target_frame(), Frame::Rest);
}

#[test]
fn adjusted_t_max_follows_time_dilation() {
    let mut u = Universe::new(UniverseConfig {
        adjust_t_max: true,
        ..UniverseConfig::default()
    })
    .unwrap();
    u.force_view_frame(Frame::moving(0.6, 0.0)).unwrap();
    let report = u.tick(0.1).unwrap();
    assert!((report.ct_max - 6.25).abs() < 1e-9);

    let mut plain = Universe::new(UniverseConfig::default()).unwrap();
    plain.force_view_frame(Frame::moving(0.6, 0.0)).unwrap();
    assert_eq!(plain.tick(0.1).unwrap().ct_max, 5.0);
}

#[test]
fn bad_time_steps_are_rejected() {
    let mut u = Universe::new(UniverseConfig::default()).unwrap();
    assert!(matches!(u.tick(-1.0), Err(UniverseError::InvalidDt(_))));
    assert!(matches!(u.tick(f64::NAN), Err(UniverseError::InvalidDt(_))));
    assert_eq!(u.ct(), 0.0);
}

#[test]
fn unknown_primitive_is_reported() {
    let mut u = Universe::new(UniverseConfig::default()).unwrap();
    let id = u.add(LightCone::new(Event::ORIGIN, Event::new(0.0, 0.0, 4.0)).unwrap());
    assert!(u.primitive(id).is_ok());
    assert!(u.remove(id).is_ok());
    assert!(matches!(u.remove(id), Err(UniverseError::UnknownPrimitive(x)) if x == id));
    assert!(u.is_empty());
}

#[test]
fn slices_follow_registration_order() {
    let mut u = Universe::new(UniverseConfig::default()).unwrap();
    let square = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let prism = Prism::closed(u.transform(), Frame::Rest, TimeInterval::between(0.0, 4.0), &square).unwrap();
    let prism_id = u.add(prism);
    let cone_id = u.add(LightCone::new(Event::ORIGIN, Event::new(0.0, 0.0, 4.0)).unwrap());

    let report = u.tick(2.0).unwrap();
    let slices = u.slice_all(&report.moment);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].0, prism_id);
    assert!(matches!(&slices[0].1, PrimitiveSlice::Lines(v) if v.len() == 8));
    assert!(matches!(&slices[1].1, PrimitiveSlice::Circle(v) if v.len() == 50));

    let mut buffers = SliceBuffers::new();
    u.slice_into(&report.moment, &mut buffers);
    assert_eq!(buffers.len(), 2);
    u.remove(cone_id).unwrap();
    u.slice_into(&report.moment, &mut buffers);
    assert_eq!(buffers.len(), 1);
    assert!(buffers.get(cone_id).is_none());
    assert_eq!(buffers.get(prism_id).map(PrimitiveSlice::len), Some(8));
}

#[test]
fn invalid_config_is_rejected() {
    assert!(matches!(
        Universe::new(UniverseConfig {
            easing: 0.0,
            ..UniverseConfig::default()
        }),
        Err(UniverseError::InvalidConfig(_))
    ));
    assert!(matches!(
        Universe::new(UniverseConfig {
            c: -1.0,
            ..UniverseConfig::default()
        }),
        Err(UniverseError::Frame(FrameError::InvalidLightSpeed(_)))
    ));
    assert!(matches!(
        Universe::new(config(0.0)),
        Err(UniverseError::InvalidConfig(_))
    ));
}

proptest! {
    #[test]
    fn clock_stays_within_scene(steps in proptest::collection::vec(0.0f64..0.7, 1..60)) {
        let mut u = Universe::new(config(2.0)).unwrap();
        for dt in steps {
            let report = u.tick(dt).unwrap();
            prop_assert!(u.ct() >= 0.0);
            prop_assert!(u.ct() <= report.ct_max);
        }
    }
}
