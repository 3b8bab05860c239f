//! Breakout - A single-screen brick breaker
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (ball, paddle, bricks, score, outcome)
//! - `config`: Layout constants and validation
//! - `scheduler`: Fixed timestep accumulator driving the tick
//! - `session`: Owns the live game, input flags and restart lifecycle
//! - `renderer`: Renderer trait plus text and canvas implementations
//! - `autopilot`: Idle/demo paddle controller

pub mod autopilot;
pub mod config;
pub mod renderer;
pub mod scheduler;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use session::Session;

/// Reference game constants (the classic 480x320 canvas layout)
pub mod consts {
    /// Simulation tick interval in milliseconds
    pub const TICK_INTERVAL_MS: f64 = 10.0;
    /// Maximum ticks run per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest host frame delta accepted by the scheduler (ms)
    pub const MAX_FRAME_DELTA_MS: f64 = 100.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 320.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Distance of the starting ball center above the bottom edge
    pub const BALL_START_LIFT: f32 = 30.0;
    pub const BALL_DX: f32 = 2.0;
    pub const BALL_DY: f32 = -2.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 75.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Pixels per tick while a direction key is held
    pub const PADDLE_STEP: f32 = 7.0;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 5;
    pub const BRICK_ROWS: u32 = 3;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
}
