//! Game state and core simulation types
//!
//! One `GameState` holds everything a game needs; the scheduler owns the
//! single live instance and hands it to `tick` each interval.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Terminal tag for a game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Game in progress
    #[default]
    Playing,
    /// Every brick cleared
    Won,
    /// Ball missed the paddle
    Lost,
}

impl GameOutcome {
    /// Won or Lost. No transition leaves a terminal outcome except a reset.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Playing)
    }
}

/// The bounded play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Check if a point lies within `[0, width] x [0, height]`
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle. Its top edge sits `height` above the arena floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels moved per tick
    pub step: f32,
}

impl Paddle {
    /// Whether `x` falls within the paddle's horizontal span (inclusive)
    pub fn spans(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    /// Move by `direction * step` and clamp to `[0, max_x]`
    pub fn shift(&mut self, direction: f32, max_x: f32) {
        self.x = (self.x + direction * self.step).clamp(0.0, max_x);
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub column: u32,
    pub row: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub active: bool,
}

impl Brick {
    /// Strict interior test against a brick of `size` (points on the border don't count)
    pub fn contains(&self, point: Vec2, size: Vec2) -> bool {
        point.x > self.pos.x
            && point.x < self.pos.x + size.x
            && point.y > self.pos.y
            && point.y < self.pos.y + size.y
    }
}

/// Fixed `columns x rows` grid of bricks, stored column-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickGrid {
    columns: u32,
    rows: u32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(config: &GameConfig) -> Self {
        let mut bricks = Vec::with_capacity(config.brick_count() as usize);
        for column in 0..config.brick_columns {
            for row in 0..config.brick_rows {
                bricks.push(Brick {
                    column,
                    row,
                    pos: config.brick_origin(column, row),
                    active: true,
                });
            }
        }
        Self {
            columns: config.brick_columns,
            rows: config.brick_rows,
            bricks,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Brick at `(column, row)`, if inside the grid
    pub fn get(&self, column: u32, row: u32) -> Option<&Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get((column * self.rows + row) as usize)
    }

    pub fn get_mut(&mut self, column: u32, row: u32) -> Option<&mut Brick> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.bricks.get_mut((column * self.rows + row) as usize)
    }

    /// All bricks in column-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Recompute active brick positions from their grid indices
    pub fn refresh_layout(&mut self, config: &GameConfig) {
        for brick in self.bricks.iter_mut().filter(|b| b.active) {
            brick.pos = config.brick_origin(brick.column, brick.row);
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Layout constants this game was built from
    pub config: GameConfig,
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Bricks destroyed so far
    pub score: u32,
    pub outcome: GameOutcome,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh game from a validated config
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
            arena: Arena {
                width: config.arena_width,
                height: config.arena_height,
            },
            ball: Ball {
                pos: config.ball_start,
                vel: config.ball_velocity,
                radius: config.ball_radius,
            },
            paddle: Paddle {
                x: config.paddle_start_x(),
                width: config.paddle_width,
                height: config.paddle_height,
                step: config.paddle_step,
            },
            bricks: BrickGrid::new(config),
            score: 0,
            outcome: GameOutcome::Playing,
            time_ticks: 0,
        }
    }

    /// Discard everything and start over from the same layout
    pub fn reset(&mut self) {
        log::info!(
            "Resetting game (previous outcome {:?}, score {})",
            self.outcome,
            self.score
        );
        *self = Self::new(&self.config);
    }

    /// Score needed to win
    pub fn winning_score(&self) -> u32 {
        self.bricks.len() as u32
    }

    /// Rightmost legal paddle x
    pub fn max_paddle_x(&self) -> f32 {
        self.arena.width - self.paddle.width
    }

    /// Paddle top edge
    pub fn paddle_y(&self) -> f32 {
        self.arena.height - self.paddle.height
    }
}
