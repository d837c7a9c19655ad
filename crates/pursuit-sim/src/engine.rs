//! Match engine, the session wrapper around the reducer.
//!
//! `MatchEngine` owns the single `MatchState`, feeds commands through the
//! reducer, turns outcomes into `MatchEvent`s and drives the AI side. When
//! control passes to the AI, a move is scheduled `ai_delay` in the future;
//! `poll` fires it once due. A scheduled move is tied to the state it was
//! planned for and is dropped if anything else changed the match first.
//! Completely headless: callers supply the clock.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use pursuit_ai::evaluator::choose_move;
use pursuit_core::commands::MatchCommand;
use pursuit_core::constants::AI_THINK_DELAY_MS;
use pursuit_core::enums::{ScanType, Side};
use pursuit_core::events::MatchEvent;
use pursuit_core::scenario::Scenario;
use pursuit_core::state::{MatchSnapshot, MatchState, SideView};
use pursuit_core::types::Position;
use pursuit_rules::rules::{self, Observation};
use pursuit_rules::visibility::side_view;

use crate::reducer::{self, Outcome, Rejection, Step};
use crate::snapshot::build_snapshot;

/// Configuration for a new engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed. Same seed and same commands give the same match.
    pub seed: u64,
    /// Presentational delay before the AI commits its move.
    pub ai_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ai_delay: Duration::from_millis(AI_THINK_DELAY_MS),
        }
    }
}

/// An AI move waiting for its delay to pass.
#[derive(Debug, Clone, Copy)]
struct ScheduledAiMove {
    side: Side,
    due: Instant,
    /// State epoch the move was planned against.
    epoch: u64,
}

/// The session engine. Owns the match state and the AI schedule.
pub struct MatchEngine {
    state: MatchState,
    rng: ChaCha8Rng,
    ai_delay: Duration,
    scheduled: Option<ScheduledAiMove>,
    /// Bumped on every accepted command.
    epoch: u64,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create an engine holding a default (classic, hotseat) match.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: MatchState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            ai_delay: config.ai_delay,
            scheduled: None,
            epoch: 0,
            events: Vec::new(),
        }
    }

    // --- Queries ---

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        build_snapshot(&self.state, self.ai_thinking())
    }

    /// The match as `side` is allowed to see it.
    pub fn view_for(&self, side: Side) -> SideView {
        side_view(&self.state, side)
    }

    pub fn scenario(&self) -> &Scenario {
        &self.state.scenario
    }

    pub fn legal_move(&self, side: Side, from_x: i32, row: i32) -> bool {
        rules::legal_move(side, from_x, row, &self.state.scenario)
    }

    pub fn legal_moves(&self, side: Side, from_x: i32) -> Vec<i32> {
        rules::legal_moves(side, from_x, &self.state.scenario)
    }

    /// Cell `side` would reach by selecting `row`, if that move is legal.
    pub fn preview(&self, side: Side, row: i32) -> Option<Position> {
        let from = self.state.position(side);
        self.legal_move(side, from.x, row)
            .then(|| rules::next_position(from, row, &self.state.scenario))
    }

    /// Whether the side to act may take a scan of `scan_type` right now.
    pub fn observation(&self, scan_type: ScanType) -> Observation {
        rules::observation_allowed(
            self.state.turn,
            self.state.weather,
            scan_type,
            &self.state.scenario,
        )
    }

    /// An AI move is scheduled and has not fired yet.
    pub fn ai_thinking(&self) -> bool {
        self.scheduled.is_some()
    }

    /// When the scheduled AI move becomes due.
    pub fn ai_deadline(&self) -> Option<Instant> {
        self.scheduled.map(|task| task.due)
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    // --- Commands ---

    pub fn start_hotseat(&mut self, scenario: Scenario) -> bool {
        self.submit(MatchCommand::start_hotseat(scenario))
    }

    pub fn start_ai_match(&mut self, scenario: Scenario, human: Side) -> bool {
        self.submit(MatchCommand::start_ai(scenario, human))
    }

    pub fn handle_move(&mut self, row: i32) -> bool {
        self.submit(MatchCommand::Move { row })
    }

    pub fn short_scan(&mut self) -> bool {
        self.submit(MatchCommand::ScanShort)
    }

    pub fn long_scan(&mut self, center: Position) -> bool {
        self.submit(MatchCommand::ScanLong { center })
    }

    pub fn reset(&mut self) -> bool {
        self.submit(MatchCommand::Reset)
    }

    /// Apply a human command now. Returns whether it was accepted.
    pub fn submit(&mut self, command: MatchCommand) -> bool {
        self.submit_at(command, Instant::now())
    }

    /// Apply a human command at `now`. Turn actions for an AI-controlled
    /// side are rejected.
    pub fn submit_at(&mut self, command: MatchCommand, now: Instant) -> bool {
        if command.is_turn_action() && !self.state.mode.is_human(self.state.side_to_act) {
            let side = self.state.side_to_act;
            let step = reducer::rejected(&self.state, Rejection::NotHumanTurn { side });
            self.record(&step);
            return false;
        }

        let accepted = self.dispatch(&command);
        self.schedule_ai(now);
        accepted
    }

    /// Fire the scheduled AI move if it is due at `now`. Returns whether a
    /// move was applied.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(task) = self.scheduled else {
            return false;
        };
        if now < task.due {
            return false;
        }
        self.scheduled = None;

        if task.epoch != self.epoch || !self.ai_to_act(task.side) {
            debug!(side = task.side.label(), "dropping stale ai move");
            self.schedule_ai(now);
            return false;
        }

        let row = choose_move(&self.state, task.side, &mut self.rng);
        let accepted = self.dispatch(&MatchCommand::Move { row });
        self.schedule_ai(now);
        accepted
    }

    /// Fire the scheduled AI move immediately, ignoring its delay.
    pub fn run_ai_now(&mut self) -> bool {
        match self.scheduled {
            Some(task) => self.poll(task.due),
            None => false,
        }
    }

    // --- Internals ---

    fn ai_to_act(&self, side: Side) -> bool {
        self.state.is_playing()
            && self.state.mode.ai_side() == Some(side)
            && self.state.side_to_act == side
    }

    fn dispatch(&mut self, command: &MatchCommand) -> bool {
        let step = reducer::step(&self.state, command, &mut self.rng);
        self.record(&step);
        let accepted = step.accepted();
        if accepted {
            self.epoch += 1;
            self.state = step.state;
        }
        accepted
    }

    /// Drop a stale schedule and plan a new one if the AI is now to act.
    fn schedule_ai(&mut self, now: Instant) {
        if let Some(task) = self.scheduled {
            if task.epoch == self.epoch && self.ai_to_act(task.side) {
                return;
            }
            self.scheduled = None;
        }

        if let Some(side) = self.state.mode.ai_side() {
            if self.ai_to_act(side) {
                self.scheduled = Some(ScheduledAiMove {
                    side,
                    due: now + self.ai_delay,
                    epoch: self.epoch,
                });
            }
        }
    }

    fn record(&mut self, step: &Step) {
        let state = &step.state;
        match &step.outcome {
            Outcome::Started => self.events.push(MatchEvent::MatchStarted {
                scenario_id: state.scenario.id.clone(),
                mode: state.mode,
            }),
            Outcome::EvaderCommitted => self.events.push(MatchEvent::MoveCommitted {
                side: Side::Evader,
                turn: state.turn,
            }),
            Outcome::RoundResolved {
                turn,
                distance_km,
                captured,
                winner,
            } => {
                self.events.push(MatchEvent::RoundResolved {
                    turn: *turn,
                    evader: state.positions.evader,
                    pursuer: state.positions.pursuer,
                    distance_km: *distance_km,
                    captured: *captured,
                    capture_count: state.capture_count,
                });
                if let Some(winner) = winner {
                    self.events.push(MatchEvent::GameOver {
                        winner: *winner,
                        turn: state.turn,
                    });
                }
            }
            Outcome::Scanned { side, result } => self.events.push(MatchEvent::ScanPerformed {
                side: *side,
                result: *result,
            }),
            Outcome::Rejected(reason) => self.events.push(MatchEvent::CommandRejected {
                reason: reason.to_string(),
            }),
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
