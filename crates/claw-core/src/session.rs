//! One page session: claw position, grab sequencer, popup and win tracking
//! behind a small set of operations the frontend calls.

use crate::config::{ConfigError, GameConfig, VerticalMotion};
use crate::grab::{GrabEvent, GrabPhase, GrabState};
use crate::input::HeldActions;
use crate::movement::{smooth_toward, step_lateral};
use crate::outcome::Outcome;
use crate::popup::{Popup, PopupMessage};
use crate::stats::SessionStats;
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct Session {
    config: GameConfig,
    position: Vec3,
    grab: GrabState,
    popup: Popup,
    stats: Option<SessionStats>,
    last_outcome: Option<Outcome>,
    rng: StdRng,
    torn_down: bool,
    events: Vec<GrabEvent>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let stats = config.win.map(|w| SessionStats::new(w.threshold));
        log::info!(
            "[session] variant={:?} win={:?} lateral_during_grab={}",
            config.variant,
            config.win,
            config.lateral_during_grab
        );
        Ok(Self {
            position: Vec3::new(0.0, config.grab.base_y, 0.0),
            config,
            grab: GrabState::Idle,
            popup: Popup::default(),
            stats,
            last_outcome: None,
            rng: StdRng::seed_from_u64(seed),
            torn_down: false,
            events: Vec::new(),
        })
    }

    /// Start a grab. Returns false (and changes nothing) when a sequence is
    /// already running, the session is complete, or it has been torn down.
    pub fn trigger_grab(&mut self, now: Instant) -> bool {
        if self.torn_down {
            return false;
        }
        if self.is_complete() {
            log::debug!("[grab] ignored: session complete");
            return false;
        }
        let (next, event) = self.grab.trigger(now, &self.config.grab);
        self.grab = next;
        if event.is_none() {
            log::debug!("[grab] ignored: busy in {:?}", self.grab.phase());
            return false;
        }
        log::info!(
            "[grab] start at x={:.2} z={:.2}",
            self.position.x,
            self.position.z
        );
        self.snap_if_immediate();
        true
    }

    /// Fire every due timer. Safe to call from any clock source, any number
    /// of times.
    pub fn advance(&mut self, now: Instant) {
        if self.torn_down {
            return;
        }
        let mut events = std::mem::take(&mut self.events);
        let table = &self.config.outcomes;
        let rng = &mut self.rng;
        self.grab = self
            .grab
            .advance(now, &self.config.grab, || table.draw(rng), &mut events);
        for ev in events.drain(..) {
            match ev {
                GrabEvent::Started => {}
                GrabEvent::Resolved(outcome) => {
                    log::info!("[grab] resolved {:?}", outcome);
                }
                GrabEvent::Finished(outcome) => self.report(outcome, now),
            }
        }
        self.events = events;
        self.snap_if_immediate();
        self.popup.expire(now);
    }

    /// Per rendered frame: timers, lateral movement, vertical motion.
    pub fn frame(&mut self, held: HeldActions, now: Instant) {
        if self.torn_down {
            return;
        }
        self.advance(now);
        if self.config.lateral_during_grab || self.grab.is_idle() {
            self.position = step_lateral(self.position, held, &self.config.movement);
        }
        let target = self.grab.target_y(&self.config.grab);
        self.position.y = match self.config.grab.motion {
            VerticalMotion::Immediate => target,
            VerticalMotion::Smoothed { damping, epsilon } => {
                smooth_toward(self.position.y, target, damping, epsilon)
            }
        };
    }

    /// Reset the win bookkeeping and any visible popup. Only meaningful for
    /// configurations with a win rule and no grab in flight; returns false
    /// otherwise.
    pub fn restart(&mut self) -> bool {
        if self.torn_down {
            return false;
        }
        if !self.grab.is_idle() {
            log::debug!("[session] restart ignored: busy in {:?}", self.grab.phase());
            return false;
        }
        let Some(stats) = self.stats.as_mut() else {
            return false;
        };
        stats.reset();
        self.popup.clear();
        self.last_outcome = None;
        if self.config.reset_position_on_restart {
            self.position = Vec3::new(0.0, self.position.y, 0.0);
        }
        log::info!("[session] restarted");
        true
    }

    /// Cancel every pending deadline. The session ignores all calls after
    /// this.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.grab = GrabState::Idle;
        self.popup.clear();
        log::info!("[session] torn down");
    }

    /// Page is being hidden. A page kept in the back/forward cache
    /// (`persisted`) can come back, so the session survives and overdue
    /// timers replay on the next frame. Returns true when the session was torn
    /// down.
    pub fn page_hidden(&mut self, persisted: bool) -> bool {
        if persisted {
            log::info!("[session] page cached; keeping session");
            return false;
        }
        self.teardown();
        true
    }

    fn report(&mut self, outcome: Outcome, now: Instant) {
        self.last_outcome = Some(outcome);
        if let Some(stats) = self.stats.as_mut() {
            let completed = stats.record(outcome.is_success());
            log::info!(
                "[session] attempts={} successes={}/{}",
                stats.attempts,
                stats.successes,
                stats.threshold
            );
            if completed {
                // The complete overlay takes over; the popup channel stays empty.
                self.popup.clear();
                return;
            }
        }
        self.popup.show(
            PopupMessage::from_outcome(&outcome),
            now,
            self.config.popup_duration,
        );
    }

    fn snap_if_immediate(&mut self) {
        if let VerticalMotion::Immediate = self.config.grab.motion {
            self.position.y = self.grab.target_y(&self.config.grab);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn phase(&self) -> GrabPhase {
        self.grab.phase()
    }

    pub fn popup(&self) -> Option<&PopupMessage> {
        self.popup.message()
    }

    pub fn stats(&self) -> Option<SessionStats> {
        self.stats
    }

    pub fn is_complete(&self) -> bool {
        self.stats.is_some_and(|s| s.is_complete())
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Earliest pending timer, for callers that drive the session from a
    /// one-shot timer rather than a frame loop.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.grab.deadline(), self.popup.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
