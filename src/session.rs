//! A running game plus everything around it
//!
//! The session owns the single live `GameState`, the held-key flags written
//! by input events, the timestep that paces ticks, and the restart path.

use crate::autopilot;
use crate::config::{ConfigError, GameConfig};
use crate::consts::MAX_SUBSTEPS;
use crate::renderer::Renderer;
use crate::scheduler::FixedTimestep;
use crate::sim::{GameOutcome, GameState, InputState, RenderFrame, TickResult, tick};

pub struct Session {
    state: GameState,
    input: InputState,
    timestep: FixedTimestep,
    autopilot: bool,
}

impl Session {
    /// Validate the config and start a new game
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "New game: {}x{} arena, {}x{} bricks, {} ms ticks",
            config.arena_width,
            config.arena_height,
            config.brick_columns,
            config.brick_rows,
            config.tick_interval_ms
        );
        Ok(Self {
            timestep: FixedTimestep::new(config.tick_interval_ms, MAX_SUBSTEPS),
            state: GameState::new(&config),
            input: InputState::default(),
            autopilot: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn outcome(&self) -> GameOutcome {
        self.state.outcome
    }

    pub fn on_left_down(&mut self) {
        self.input.on_left_down();
    }

    pub fn on_left_up(&mut self) {
        self.input.on_left_up();
    }

    pub fn on_right_down(&mut self) {
        self.input.on_right_down();
    }

    pub fn on_right_up(&mut self) {
        self.input.on_right_up();
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    /// Flip idle/demo mode, returning the new setting
    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
        self.autopilot
    }

    /// Current state as a draw command
    pub fn frame(&self) -> RenderFrame {
        RenderFrame::capture(&self.state)
    }

    /// Run exactly one tick and draw its frame
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> GameOutcome {
        let result = self.step();
        renderer.draw(&result.frame);
        result.outcome
    }

    /// Feed elapsed host time; run every tick that's due and draw the last one.
    ///
    /// Stops ticking as soon as the game reaches a terminal outcome.
    pub fn update<R: Renderer + ?Sized>(&mut self, elapsed_ms: f64, renderer: &mut R) -> GameOutcome {
        let due = self.timestep.advance(elapsed_ms);

        let mut last = None;
        for _ in 0..due {
            let result = self.step();
            let done = result.outcome.is_terminal();
            last = Some(result.frame);
            if done {
                break;
            }
        }

        if let Some(frame) = last {
            renderer.draw(&frame);
        }
        self.state.outcome
    }

    /// Full restart: fresh state, keys released, timestep resumed
    pub fn reset(&mut self) {
        self.state.reset();
        self.input.clear();
        self.timestep.restart();
    }

    fn step(&mut self) -> TickResult {
        let input = if self.autopilot {
            autopilot::steer(&self.state)
        } else {
            self.input
        };
        let result = tick(&mut self.state, &input);
        if result.outcome.is_terminal() && self.timestep.is_running() {
            log::info!(
                "Game ended: {:?} with score {}",
                result.outcome,
                self.state.score
            );
            self.timestep.stop();
        }
        result
    }
}
