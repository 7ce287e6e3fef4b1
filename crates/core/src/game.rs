//! Game driver - binds a session, its scheduler and an rng to one clock
//!
//! All events go through [`Game::dispatch`], one at a time, so the session is
//! never mutated concurrently. Time only moves through [`Game::advance_to`].

use crate::engine::{self, Schedules};
use crate::rng::RandomSource;
use crate::scheduler::Scheduler;
use crate::session::{SessionConfig, SessionState};
use crate::snapshot::GameSnapshot;
use crate::types::{GameEvent, Schedule};

#[derive(Debug, Clone)]
pub struct Game<R: RandomSource> {
    state: SessionState,
    scheduler: Scheduler,
    rng: R,
    now_ms: u64,
}

impl<R: RandomSource> Game<R> {
    /// Start a session at time 0 and schedule the first tick.
    pub fn start(config: SessionConfig, mut rng: R) -> Self {
        let state = SessionState::start(config, &mut rng);
        let mut scheduler = Scheduler::new();
        scheduler.schedule(0, Schedule::Tick);
        Self {
            state,
            scheduler,
            rng,
            now_ms: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Session ended and nothing is left to fire.
    pub fn is_settled(&self) -> bool {
        self.state.is_finished() && self.scheduler.is_empty()
    }

    /// Apply one event now and queue whatever it requests.
    pub fn dispatch(&mut self, event: GameEvent) -> Schedules {
        let requested = engine::handle_event(&mut self.state, &event, &mut self.rng);
        for &s in requested.iter() {
            self.scheduler.schedule(self.now_ms, s);
        }
        requested
    }

    /// Move the clock to `now_ms`, firing every event due on the way in order.
    ///
    /// Each event fires at its own due time, so anything it schedules is
    /// relative to that time and may also fire within this call.
    pub fn advance_to(&mut self, now_ms: u64) -> usize {
        let mut fired = 0;
        while let Some(due) = self.scheduler.next_due() {
            if due > now_ms {
                break;
            }
            let Some(event) = self.scheduler.pop_due(due) else {
                break;
            };
            self.now_ms = self.now_ms.max(due);
            self.dispatch(event);
            fired += 1;
        }
        self.now_ms = self.now_ms.max(now_ms);
        fired
    }

    pub fn advance(&mut self, delta_ms: u64) -> usize {
        self.advance_to(self.now_ms + delta_ms)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }
}
