// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! One-shot callbacks triggered when the viewer's instant passes an event.

use core::fmt;

use lumen_core::math::{Event, ProperEvent};
use lumen_core::{Frame, FrameTransform};

use crate::error::GeomError;
use crate::moment::Moment;

/// Callback invoked with the event's viewer-frame light-time.
pub type NotifyFn = Box<dyn FnMut(f64) + Send>;

/// Whether a notifier can still fire.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum NotifierState {
    /// Waiting for the instant to reach the event.
    #[default]
    Armed,
    /// Already fired; stays silent until rearmed.
    Fired,
}

/// Edge-triggered watcher on a single R0 event.
///
/// The event's time depends on the viewing frame, so [`Notifier::check`] is
/// evaluated against every [`Moment`] rather than once against R0 time.
pub struct Notifier {
    event: Event,
    callback: NotifyFn,
    state: NotifierState,
}

impl Notifier {
    /// Watches `event`, authored in proper time in `frame`.
    pub fn new(
        transform: &FrameTransform,
        frame: Frame,
        event: ProperEvent,
        callback: impl FnMut(f64) + Send + 'static,
    ) -> Result<Self, GeomError> {
        let event = transform.event_to_spacetime(frame, event)?;
        Self::from_spacetime(event, callback)
    }

    /// Watches an R0 light-time event.
    pub fn from_spacetime(
        event: Event,
        callback: impl FnMut(f64) + Send + 'static,
    ) -> Result<Self, GeomError> {
        if !event.is_finite() {
            return Err(GeomError::NonFinite("notifier"));
        }
        Ok(Self {
            event,
            callback: Box::new(callback),
            state: NotifierState::Armed,
        })
    }

    /// Watched R0 event.
    pub const fn event(&self) -> Event {
        self.event
    }

    /// Current state.
    pub const fn state(&self) -> NotifierState {
        self.state
    }

    /// Fires the callback once the viewer-frame event time is at or before
    /// the moment's instant (within its tolerance).
    ///
    /// Returns the viewer-frame light-time passed to the callback, or `None`
    /// when nothing fired.
    pub fn check(&mut self, moment: &Moment) -> Option<f64> {
        if self.state == NotifierState::Fired {
            return None;
        }
        let ct = moment.view(&self.event).ct();
        if ct > moment.ct() + moment.epsilon() {
            return None;
        }
        (self.callback)(ct);
        self.state = NotifierState::Fired;
        Some(ct)
    }

    /// Allows the notifier to fire again.
    pub fn rearm(&mut self) {
        self.state = NotifierState::Armed;
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("event", &self.event)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
