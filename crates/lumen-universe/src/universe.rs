// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::collections::BTreeMap;
use std::fmt;

use lumen_core::math::{Event, Mat3, Vec2};
use lumen_core::{Frame, FrameTransform};
use lumen_geom::{Moment, Notifier, Primitive, PrimitiveSlice};
use tracing::{debug, info, instrument};

use crate::config::UniverseConfig;
use crate::error::UniverseError;

/// Handle of a primitive registered with a [`Universe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

impl PrimitiveId {
    /// Raw index, in registration order.
    pub const fn index(self) -> u64 {
        self.0
    }
}

/// Handle of a notifier registered with a [`Universe`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotifierId(u64);

impl NotifierId {
    /// Raw index, in registration order.
    pub const fn index(self) -> u64 {
        self.0
    }
}

type RestartFn = Box<dyn FnMut() + Send>;

/// Outcome of one [`Universe::tick`].
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    /// Frame counter, starting at 1 for the first tick.
    pub frame: u64,
    /// Viewing state to slice against.
    pub moment: Moment,
    /// Instant at which the clock wraps, in viewer light-time.
    pub ct_max: f64,
    /// Whether the clock wrapped during this tick.
    pub restarted: bool,
    /// Notifiers that fired, with the viewer-frame light-time of their event.
    pub fired: Vec<(NotifierId, f64)>,
}

/// Reusable per-primitive slice buffers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceBuffers {
    slices: BTreeMap<PrimitiveId, PrimitiveSlice>,
}

impl SliceBuffers {
    /// Creates an empty set of buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slice of one primitive from the last fill.
    pub fn get(&self, id: PrimitiveId) -> Option<&PrimitiveSlice> {
        self.slices.get(&id)
    }

    /// All slices, ordered by primitive id.
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &PrimitiveSlice)> {
        self.slices.iter().map(|(id, s)| (*id, s))
    }

    /// Number of primitives with a buffer.
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// `true` when no primitive has a buffer.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Scene clock, eased viewing frame and registered primitives.
///
/// Every call to [`Universe::tick`]:
/// 1. advances `ct` by `c·dt`;
/// 2. eases the viewing velocity toward its target;
/// 3. rebuilds the viewing boost;
/// 4. wraps the clock to zero past `ct_max`, rearming notifiers and running
///    restart callbacks;
/// 5. checks every notifier against the new moment.
pub struct Universe {
    config: UniverseConfig,
    transform: FrameTransform,
    primitives: BTreeMap<PrimitiveId, Primitive>,
    notifiers: BTreeMap<NotifierId, Notifier>,
    restart_callbacks: Vec<RestartFn>,
    target_velocity: Vec2,
    velocity: Vec2,
    boost: Mat3,
    ct: f64,
    frame: u64,
    restarts: u64,
    next_id: u64,
}

impl Universe {
    /// Creates an empty universe at `ct = 0`, viewed from R0.
    pub fn new(config: UniverseConfig) -> Result<Self, UniverseError> {
        config.validate()?;
        let transform = config.transform()?;
        info!(
            c = config.c,
            t_max = config.t_max,
            kinematics = ?config.kinematics,
            "universe created"
        );
        Ok(Self {
            config,
            transform,
            primitives: BTreeMap::new(),
            notifiers: BTreeMap::new(),
            restart_callbacks: Vec::new(),
            target_velocity: Vec2::ZERO,
            velocity: Vec2::ZERO,
            boost: Mat3::identity(),
            ct: 0.0,
            frame: 0,
            restarts: 0,
            next_id: 0,
        })
    }

    /// Settings the universe was built with.
    pub fn config(&self) -> &UniverseConfig {
        &self.config
    }

    /// Transform factory primitives should be built against.
    pub fn transform(&self) -> &FrameTransform {
        &self.transform
    }

    /// Current instant, in viewer light-time.
    pub fn ct(&self) -> f64 {
        self.ct
    }

    /// Number of times the clock has wrapped.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Current (eased) viewing frame.
    pub fn view_frame(&self) -> Frame {
        frame_of(self.velocity)
    }

    /// Viewing frame being eased toward.
    pub fn target_frame(&self) -> Frame {
        frame_of(self.target_velocity)
    }

    fn next(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Registers a primitive.
    pub fn add(&mut self, primitive: impl Into<Primitive>) -> PrimitiveId {
        let primitive = primitive.into();
        let id = PrimitiveId(self.next());
        debug!(?id, kind = primitive.kind(), "primitive added");
        self.primitives.insert(id, primitive);
        id
    }

    /// Looks up a primitive.
    pub fn primitive(&self, id: PrimitiveId) -> Result<&Primitive, UniverseError> {
        self.primitives
            .get(&id)
            .ok_or(UniverseError::UnknownPrimitive(id))
    }

    /// Unregisters a primitive and returns it.
    pub fn remove(&mut self, id: PrimitiveId) -> Result<Primitive, UniverseError> {
        self.primitives
            .remove(&id)
            .ok_or(UniverseError::UnknownPrimitive(id))
    }

    /// Number of registered primitives.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// `true` when no primitive is registered.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Registers a notifier.
    pub fn add_notifier(&mut self, notifier: Notifier) -> NotifierId {
        let id = NotifierId(self.next());
        self.notifiers.insert(id, notifier);
        id
    }

    /// Registers a callback run every time the clock wraps.
    pub fn on_restart(&mut self, callback: impl FnMut() + Send + 'static) {
        self.restart_callbacks.push(Box::new(callback));
    }

    /// Sets the viewing frame to ease toward.
    pub fn set_view_frame(&mut self, frame: Frame) -> Result<(), UniverseError> {
        self.transform.direct(frame)?;
        self.target_velocity = frame.velocity();
        Ok(())
    }

    /// Jumps to a viewing frame without easing.
    pub fn force_view_frame(&mut self, frame: Frame) -> Result<(), UniverseError> {
        self.boost = self.transform.direct(frame)?;
        self.target_velocity = frame.velocity();
        self.velocity = self.target_velocity;
        Ok(())
    }

    /// Viewing state at the current instant.
    pub fn moment(&self) -> Moment {
        Moment::new(self.boost, self.transform.c(), self.ct).with_epsilon(self.config.epsilon)
    }

    /// Wraps the clock to zero, rearms notifiers and runs restart callbacks.
    pub fn restart(&mut self) {
        self.ct = 0.0;
        self.restarts += 1;
        for notifier in self.notifiers.values_mut() {
            notifier.rearm();
        }
        for callback in &mut self.restart_callbacks {
            callback();
        }
        info!(restarts = self.restarts, "universe restarted");
    }

    /// Light-time at which the clock wraps, for the current boost.
    pub fn ct_max(&self) -> f64 {
        let ct_max = self.transform.c() * self.config.t_max;
        if self.config.adjust_t_max {
            self.boost.transform_event(&Event::new(0.0, 0.0, ct_max)).ct()
        } else {
            ct_max
        }
    }

    /// Advances the universe by `dt` seconds.
    #[instrument(level = "debug", skip(self), fields(frame = self.frame + 1))]
    pub fn tick(&mut self, dt: f64) -> Result<FrameReport, UniverseError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(UniverseError::InvalidDt(dt));
        }
        self.frame += 1;
        self.ct += self.transform.c() * dt;

        let gap = self.target_velocity.sub(&self.velocity);
        self.velocity = self.velocity.add(&gap.scale(self.config.easing));
        self.boost = self.transform.direct(frame_of(self.velocity))?;
        debug!(velocity = ?self.velocity.to_array(), ct = self.ct, "boost rebuilt");

        let ct_max = self.ct_max();
        let restarted = self.ct > ct_max;
        if restarted {
            self.restart();
        }

        let moment = self.moment();
        let mut fired = Vec::new();
        for (id, notifier) in &mut self.notifiers {
            if let Some(at) = notifier.check(&moment) {
                info!(?id, ct = at, "notifier fired");
                fired.push((*id, at));
            }
        }

        Ok(FrameReport {
            frame: self.frame,
            moment,
            ct_max,
            restarted,
            fired,
        })
    }

    /// Slices every primitive at `moment`, in registration order.
    pub fn slice_all(&self, moment: &Moment) -> Vec<(PrimitiveId, PrimitiveSlice)> {
        self.primitives
            .iter()
            .map(|(id, p)| (*id, p.slice(moment)))
            .collect()
    }

    /// Slices every primitive into `buffers`, reusing their allocations and
    /// dropping buffers of removed primitives.
    pub fn slice_into(&self, moment: &Moment, buffers: &mut SliceBuffers) {
        buffers
            .slices
            .retain(|id, _| self.primitives.contains_key(id));
        for (id, primitive) in &self.primitives {
            match buffers.slices.get_mut(id) {
                Some(buf) => {
                    primitive.slice_into(moment, buf);
                }
                None => {
                    buffers.slices.insert(*id, primitive.slice(moment));
                }
            }
        }
        debug!(
            primitives = buffers.len(),
            items = buffers.slices.values().map(PrimitiveSlice::len).sum::<usize>(),
            "slices refreshed"
        );
    }
}

fn frame_of(velocity: Vec2) -> Frame {
    if velocity.length_squared() == 0.0 {
        Frame::Rest
    } else {
        Frame::Moving(velocity)
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("config", &self.config)
            .field("ct", &self.ct)
            .field("velocity", &self.velocity)
            .field("primitives", &self.primitives.len())
            .field("notifiers", &self.notifiers.len())
            .field("restarts", &self.restarts)
            .finish_non_exhaustive()
    }
}
