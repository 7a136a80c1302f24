//! Grab sequencer: a timed down → resolve → up state machine.
//!
//! Transitions are plain functions from one [`GrabState`] value to the next.
//! The caller owns the clock and decides when to call them; the state holds at
//! most one deadline, so cancelling a sequence is replacing the value.

use crate::config::GrabTiming;
use crate::outcome::Outcome;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabPhase {
    Idle,
    Descending,
    Resolving,
    Ascending,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GrabState {
    #[default]
    Idle,
    Descending { until: Instant },
    /// Bottom of the descent, reached at `at`; left on the next step.
    Resolving { at: Instant },
    Ascending { until: Instant, outcome: Outcome },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabEvent {
    Started,
    /// Outcome drawn at the bottom of the descent.
    Resolved(Outcome),
    /// Claw back at the base; the outcome is ready to report.
    Finished(Outcome),
}

impl GrabState {
    pub fn phase(&self) -> GrabPhase {
        match self {
            GrabState::Idle => GrabPhase::Idle,
            GrabState::Descending { .. } => GrabPhase::Descending,
            GrabState::Resolving { .. } => GrabPhase::Resolving,
            GrabState::Ascending { .. } => GrabPhase::Ascending,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GrabState::Idle)
    }

    /// The single pending deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            GrabState::Idle => None,
            GrabState::Descending { until } => Some(until),
            GrabState::Resolving { at } => Some(at),
            GrabState::Ascending { until, .. } => Some(until),
        }
    }

    /// Where the claw's y should be heading in this phase. Independent of the
    /// outcome.
    pub fn target_y(&self, timing: &GrabTiming) -> f32 {
        match self {
            GrabState::Descending { .. } | GrabState::Resolving { .. } => timing.depth_y,
            GrabState::Idle | GrabState::Ascending { .. } => timing.base_y,
        }
    }

    /// Start a sequence. Anything but Idle is returned unchanged.
    pub fn trigger(self, now: Instant, timing: &GrabTiming) -> (GrabState, Option<GrabEvent>) {
        match self {
            GrabState::Idle => (
                GrabState::Descending {
                    until: now + timing.descend,
                },
                Some(GrabEvent::Started),
            ),
            busy => (busy, None),
        }
    }

    /// Take at most one due transition. `draw` is only called when leaving
    /// Resolving.
    pub fn step<F>(
        self,
        now: Instant,
        timing: &GrabTiming,
        draw: F,
    ) -> (GrabState, Option<GrabEvent>)
    where
        F: FnOnce() -> Outcome,
    {
        match self {
            GrabState::Descending { until } if now >= until => {
                (GrabState::Resolving { at: until }, None)
            }
            GrabState::Resolving { at } => {
                let outcome = draw();
                (
                    GrabState::Ascending {
                        until: at + timing.ascend,
                        outcome,
                    },
                    Some(GrabEvent::Resolved(outcome)),
                )
            }
            GrabState::Ascending { until, outcome } if now >= until => {
                (GrabState::Idle, Some(GrabEvent::Finished(outcome)))
            }
            unchanged => (unchanged, None),
        }
    }

    /// Take every transition due at `now`, in order, pushing events into
    /// `events`. Each phase's deadline is measured from the previous one, so
    /// a late call does not stretch the sequence.
    pub fn advance<F>(
        mut self,
        now: Instant,
        timing: &GrabTiming,
        mut draw: F,
        events: &mut Vec<GrabEvent>,
    ) -> GrabState
    where
        F: FnMut() -> Outcome,
    {
        loop {
            let (next, event) = self.step(now, timing, &mut draw);
            if let Some(ev) = event {
                events.push(ev);
            }
            if next == self {
                return next;
            }
            self = next;
        }
    }
}
