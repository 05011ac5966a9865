//! The game lifecycle controller.

use crate::core::{Difficulty, GamePhase, PhaseHistory, PhaseTransition, SequenceEngine, Signal};
use crate::game::collaborators::GameEnv;
use crate::game::config::GameConfig;
use crate::game::event::GameEvent;
use crate::game::scheduler::{Scheduler, TimerQueue, TimerToken};
use chrono::Utc;
use rand::Rng;
use std::time::Duration;

pub(crate) const LABEL_START: &str = "Start";
const LABEL_RUNNING: &str = "Playing...";
const PROMPT_READY: &str = "Get Ready!";
const PROMPT_WATCH: &str = "Watch!";
const PROMPT_REPEAT: &str = "Your turn!";

/// Mutable session bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSession {
    /// Whether a game is currently being played.
    pub active: bool,
    /// Rounds completed this session.
    pub score: u32,
    /// Playback speed setting for the session.
    pub difficulty: Difficulty,
}

/// The imperative shell: owns the session, the sequence engine, the timer
/// queue, and every pending timer token, and orchestrates the collaborators
/// behind [`GameEnv`].
///
/// The controller is driven from outside by exactly three calls:
/// [`start_game`], [`handle_input`], and [`advance`] (which delivers due
/// timer events). All three take the environment by `&mut`, so the
/// controller holds no platform handles of its own.
///
/// Timer discipline: every scheduled token is retained in `pending` and
/// cancelled on [`start_game`], so a schedule left over from a finished
/// session can never fire into a fresh one. As a second layer, a delivered
/// event whose phase no longer matches is dropped with a debug log.
///
/// [`start_game`]: GameController::start_game
/// [`handle_input`]: GameController::handle_input
/// [`advance`]: GameController::advance
pub struct GameController<R: Rng, S: Scheduler = TimerQueue> {
    config: GameConfig,
    engine: SequenceEngine,
    session: GameSession,
    high_score: u32,
    phase: GamePhase,
    history: PhaseHistory,
    timers: S,
    pending: Vec<TimerToken>,
    rng: R,
}

impl<R: Rng> GameController<R, TimerQueue> {
    /// Create a controller on a fresh virtual-time queue.
    ///
    /// Prefer [`GameBuilder`](crate::game::GameBuilder), which validates the
    /// config and primes the display.
    pub fn new(config: GameConfig, difficulty: Difficulty, rng: R, high_score: u32) -> Self {
        Self::with_scheduler(config, difficulty, rng, high_score, TimerQueue::new())
    }
}

impl<R: Rng, S: Scheduler> GameController<R, S> {
    /// Create a controller on a caller-provided scheduler.
    pub fn with_scheduler(
        config: GameConfig,
        difficulty: Difficulty,
        rng: R,
        high_score: u32,
        scheduler: S,
    ) -> Self {
        Self {
            config,
            engine: SequenceEngine::new(),
            session: GameSession {
                active: false,
                score: 0,
                difficulty,
            },
            high_score,
            phase: GamePhase::Idle,
            history: PhaseHistory::new(),
            timers: scheduler,
            pending: Vec::new(),
            rng,
        }
    }

    /// Start a new session. No-op while one is active.
    ///
    /// Cancels every timer still pending from a previous session, resets
    /// the engine and the score, and schedules playback after the
    /// countdown.
    pub fn start_game<E: GameEnv>(&mut self, env: &mut E) {
        if !self.phase.accepts_start() {
            // A session is already running.
            return;
        }
        for token in self.pending.drain(..) {
            self.timers.cancel(token);
        }

        self.engine.reset();
        self.session.score = 0;
        self.session.active = true;

        env.show_score(0);
        env.set_start_label(LABEL_RUNNING);
        env.set_start_enabled(false);
        env.show_message(PROMPT_READY);

        self.set_phase(GamePhase::Countdown);
        let token = self
            .timers
            .schedule_after(self.config.countdown_delay, GameEvent::CountdownFinished);
        self.pending.push(token);
    }

    /// Handle one player signal selection.
    ///
    /// Ignored when no session is active, and in phases where input has no
    /// meaning (countdown, playback). During the between-round pause the
    /// completed attempt has no room left to extend, so a press there ends
    /// the session, exactly like a mismatch.
    pub fn handle_input<E: GameEnv>(&mut self, signal: Signal, env: &mut E) {
        if !self.session.active {
            return;
        }
        if !self.phase.accepts_input() {
            log::debug!(
                "ignoring {} input during {}",
                signal.name(),
                self.phase.name()
            );
            return;
        }

        self.feedback(signal, env);

        if self.phase == GamePhase::RoundEvaluation {
            // The completed attempt has no room left to extend.
            self.end_session(env);
            return;
        }

        self.engine.record_attempt(signal);
        self.set_phase(GamePhase::RoundEvaluation);

        if !self.engine.is_attempt_valid() {
            self.end_session(env);
        } else if self.engine.is_round_complete() {
            self.session.score += 1;
            env.show_score(self.session.score);
            let token = self
                .timers
                .schedule_after(self.config.round_pause, GameEvent::NextRound);
            self.pending.push(token);
        } else {
            self.set_phase(GamePhase::AwaitingInput);
        }
    }

    /// Advance the cooperative clock by `dt`, delivering every event that
    /// becomes due on the way.
    pub fn advance<E: GameEnv>(&mut self, dt: Duration, env: &mut E) {
        let until = self.timers.now() + dt;
        while let Some((token, event)) = self.timers.pop_due(until) {
            self.pending.retain(|pending| *pending != token);
            self.dispatch(event, env);
        }
        self.timers.fast_forward(until);
    }

    /// Change the difficulty.
    ///
    /// Takes effect at the next playback entry; flashes already scheduled
    /// keep their deadlines.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.session.difficulty = difficulty;
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// A copy of the session bookkeeping.
    pub fn session(&self) -> GameSession {
        self.session
    }

    /// Rounds completed this session.
    pub fn score(&self) -> u32 {
        self.session.score
    }

    /// The best score seen, including past sessions.
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Whether a session is in progress.
    pub fn is_active(&self) -> bool {
        self.session.active
    }

    /// Read access to the sequence engine.
    pub fn engine(&self) -> &SequenceEngine {
        &self.engine
    }

    /// Every phase transition taken so far.
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    fn dispatch<E: GameEnv>(&mut self, event: GameEvent, env: &mut E) {
        match (self.phase, event) {
            (GamePhase::Countdown, GameEvent::CountdownFinished) => {
                // The start control was held down for the countdown only;
                // re-entry stays guarded by the active flag.
                env.set_start_enabled(true);
                self.enter_playback(env);
            }
            (GamePhase::Playback, GameEvent::FlashSignal { position }) => {
                if let Some(signal) = self.engine.sequence().get(position).copied() {
                    self.feedback(signal, env);
                }
            }
            (GamePhase::Playback, GameEvent::PlaybackFinished) => {
                self.engine.clear_attempt();
                env.show_message(PROMPT_REPEAT);
                self.set_phase(GamePhase::AwaitingInput);
            }
            (GamePhase::RoundEvaluation, GameEvent::NextRound) => {
                self.enter_playback(env);
            }
            (phase, event) => {
                log::debug!("dropping stale {:?} in {}", event, phase.name());
            }
        }
    }

    fn enter_playback<E: GameEnv>(&mut self, env: &mut E) {
        self.set_phase(GamePhase::Playback);
        env.show_message(PROMPT_WATCH);

        self.engine.append_random(&mut self.rng);

        let difficulty = self.session.difficulty;
        let length = self.engine.sequence().len();
        for position in 0..length {
            let offset = self.config.flash_offset(position, difficulty);
            let token = self
                .timers
                .schedule_after(offset, GameEvent::FlashSignal { position });
            self.pending.push(token);
        }
        // One gap past the last flash, playback is over and input opens.
        let done = self.config.flash_offset(length, difficulty);
        let token = self.timers.schedule_after(done, GameEvent::PlaybackFinished);
        self.pending.push(token);
    }

    fn end_session<E: GameEnv>(&mut self, env: &mut E) {
        if let Err(err) = env.play_failure() {
            log::warn!("failure sound did not play: {err}");
        }

        self.session.active = false;

        if self.session.score > self.high_score {
            self.high_score = self.session.score;
            if let Err(err) = env.save(self.high_score) {
                log::warn!("high score not saved: {err}");
            }
            env.show_high_score(self.high_score);
        }

        env.show_message(&format!("Game Over! Score: {}", self.session.score));
        env.set_start_label(LABEL_START);
        env.set_start_enabled(true);

        self.set_phase(GamePhase::GameOver);
    }

    fn feedback<E: GameEnv>(&mut self, signal: Signal, env: &mut E) {
        env.flash(signal);
        if let Err(err) = env.play(signal) {
            log::warn!("sound for {} did not play: {err}", signal.name());
        }
    }

    fn set_phase(&mut self, next: GamePhase) {
        self.history = self.history.record(PhaseTransition {
            from: self.phase,
            to: next,
            at: Utc::now(),
        });
        self.phase = next;
    }
}
