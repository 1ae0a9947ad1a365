// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state machine.
//!
//! The `Notifier` walks a single toast through
//! `Hidden → Appearing → Shown → Disappearing → Hidden`. It holds no timer of
//! its own: the application feeds it frame ticks (see
//! [`Notifier::is_active`]) and it reports [`NotifierEvent::Hidden`] once the
//! exit transition has finished. Because nothing is scheduled outside this
//! struct, dropping or cancelling it leaves no callback behind.

use super::notification::NotificationId;
use crate::config::{TOAST_DWELL_MS, TOAST_ENTRANCE_MS, TOAST_EXIT_MS, TOAST_SLIDE_DISTANCE};
use std::time::{Duration, Instant};

/// Visible phase of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Appearing,
    Shown,
    Disappearing,
}

/// Events reported back to the owner of the toast state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifierEvent {
    /// The exit transition completed; the toast should no longer be visible.
    Hidden,
}

/// Transition and dwell durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub entrance: Duration,
    /// Measured from the start of the entrance.
    pub dwell: Duration,
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            entrance: Duration::from_millis(TOAST_ENTRANCE_MS),
            dwell: Duration::from_millis(TOAST_DWELL_MS),
            exit: Duration::from_millis(TOAST_EXIT_MS),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Hidden,
    Appearing {
        request: NotificationId,
        started_at: Instant,
    },
    Shown {
        request: NotificationId,
        started_at: Instant,
    },
    Disappearing {
        request: NotificationId,
        exit_started_at: Instant,
    },
}

/// Drives the entrance, dwell and exit of one toast at a time.
#[derive(Debug, Clone)]
pub struct Notifier {
    state: State,
    timings: Timings,
    /// Instant of the last request or tick, used for animation values.
    frame: Option<Instant>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl Notifier {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            state: State::Hidden,
            timings,
            frame: None,
        }
    }

    /// Starts showing the notification `request` at `now`.
    ///
    /// Valid from every phase: a request made while another toast is on
    /// screen takes over immediately and restarts the dwell timer.
    pub fn request(&mut self, request: NotificationId, now: Instant) {
        self.state = State::Appearing {
            request,
            started_at: now,
        };
        self.frame = Some(now);
    }

    /// Advances the state machine to `now`.
    ///
    /// Returns [`NotifierEvent::Hidden`] on the tick that completes the exit
    /// transition, and never again for the same request.
    pub fn tick(&mut self, now: Instant) -> Option<NotifierEvent> {
        if self.state == State::Hidden {
            return None;
        }
        self.frame = Some(now);

        loop {
            self.state = match self.state {
                State::Appearing {
                    request,
                    started_at,
                } if now >= started_at + self.timings.entrance => State::Shown {
                    request,
                    started_at,
                },
                State::Shown {
                    request,
                    started_at,
                } if now >= started_at + self.timings.dwell => State::Disappearing {
                    request,
                    exit_started_at: started_at + self.timings.dwell,
                },
                State::Disappearing {
                    exit_started_at, ..
                } if now >= exit_started_at + self.timings.exit => {
                    self.state = State::Hidden;
                    self.frame = None;
                    return Some(NotifierEvent::Hidden);
                }
                _ => return None,
            };
        }
    }

    /// Drops any pending transition without reporting `Hidden`.
    pub fn cancel(&mut self) {
        self.state = State::Hidden;
        self.frame = None;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Hidden => Phase::Hidden,
            State::Appearing { .. } => Phase::Appearing,
            State::Shown { .. } => Phase::Shown,
            State::Disappearing { .. } => Phase::Disappearing,
        }
    }

    /// Whether the notifier needs frame ticks.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != State::Hidden
    }

    /// The notification currently being animated.
    #[must_use]
    pub fn current_request(&self) -> Option<NotificationId> {
        match self.state {
            State::Hidden => None,
            State::Appearing { request, .. }
            | State::Shown { request, .. }
            | State::Disappearing { request, .. } => Some(request),
        }
    }

    /// Opacity of the toast at the last frame, from 0.0 to 1.0.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let Some(frame) = self.frame else {
            return 0.0;
        };

        match self.state {
            State::Hidden => 0.0,
            State::Appearing { started_at, .. } => {
                progress(frame, started_at, self.timings.entrance)
            }
            State::Shown { .. } => 1.0,
            State::Disappearing {
                exit_started_at, ..
            } => 1.0 - progress(frame, exit_started_at, self.timings.exit),
        }
    }

    /// Vertical offset of the toast at the last frame: `-TOAST_SLIDE_DISTANCE`
    /// when invisible, `0.0` when fully shown.
    #[must_use]
    pub fn offset(&self) -> f32 {
        -(1.0 - self.opacity()) * TOAST_SLIDE_DISTANCE
    }
}

fn progress(frame: Instant, start: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = frame.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
