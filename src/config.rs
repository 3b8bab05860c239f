//! Game layout configuration
//!
//! Every constant the simulation reads lives here. Loaded from JSON with
//! per-field defaults and validated once, before any state is built.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },

    #[error("Brick grid needs at least one column and one row, got {columns}x{rows}")]
    EmptyBrickGrid { columns: u32, rows: u32 },

    #[error("Paddle width {paddle} exceeds arena width {arena}")]
    PaddleTooWide { paddle: f32, arena: f32 },

    #[error("Brick grid extends to ({right}, {bottom}), outside the {width}x{height} arena")]
    BrickGridOutOfBounds {
        right: f32,
        bottom: f32,
        width: f32,
        height: f32,
    },

    #[error("Ball start ({x}, {y}) leaves less than one radius to the arena edge")]
    BallOutOfBounds { x: f32, y: f32 },

    #[error("Ball velocity must be non-zero")]
    ZeroVelocity,

    #[error("Ball velocity ({dx}, {dy}) moves more than one radius ({radius}) per tick")]
    BallTooFast { dx: f32, dy: f32, radius: f32 },

    #[error("Tick interval must be positive, got {0} ms")]
    InvalidTickInterval(f64),
}

/// Layout and pacing constants for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Starting ball center
    pub ball_start: Vec2,
    /// Displacement per tick (signed)
    pub ball_velocity: Vec2,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels moved per tick while a direction is held
    pub paddle_step: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Pacing ===
    pub tick_interval_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_start: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - BALL_START_LIFT),
            ball_velocity: Vec2::new(BALL_DX, BALL_DY),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Total number of bricks (the winning score)
    pub fn brick_count(&self) -> u32 {
        self.brick_columns * self.brick_rows
    }

    /// Top-left corner of the brick at `(column, row)`
    pub fn brick_origin(&self, column: u32, row: u32) -> Vec2 {
        Vec2::new(
            column as f32 * (self.brick_width + self.brick_padding) + self.brick_offset_left,
            row as f32 * (self.brick_height + self.brick_padding) + self.brick_offset_top,
        )
    }

    /// Width and height shared by every brick
    pub fn brick_size(&self) -> Vec2 {
        Vec2::new(self.brick_width, self.brick_height)
    }

    /// Rightmost legal paddle x (left edge)
    pub fn max_paddle_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }

    /// Paddle x centered in the arena
    pub fn paddle_start_x(&self) -> f32 {
        self.max_paddle_x() / 2.0
    }

    /// Paddle top edge (the paddle sits on the arena floor)
    pub fn paddle_y(&self) -> f32 {
        self.arena_height - self.paddle_height
    }

    /// Check every precondition the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("ball_radius", self.ball_radius),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_step", self.paddle_step),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        let non_negative = [
            ("brick_padding", self.brick_padding),
            ("brick_offset_top", self.brick_offset_top),
            ("brick_offset_left", self.brick_offset_left),
        ];
        let others = [
            ("ball_start.x", self.ball_start.x),
            ("ball_start.y", self.ball_start.y),
            ("ball_velocity.x", self.ball_velocity.x),
            ("ball_velocity.y", self.ball_velocity.y),
        ];

        for &(name, value) in positive.iter().chain(&non_negative).chain(&others) {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if !(self.tick_interval_ms.is_finite() && self.tick_interval_ms > 0.0) {
            return Err(ConfigError::InvalidTickInterval(self.tick_interval_ms));
        }

        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::EmptyBrickGrid {
                columns: self.brick_columns,
                rows: self.brick_rows,
            });
        }

        if self.paddle_width > self.arena_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                arena: self.arena_width,
            });
        }

        let last = self.brick_origin(self.brick_columns - 1, self.brick_rows - 1);
        let right = last.x + self.brick_width;
        let bottom = last.y + self.brick_height;
        if right > self.arena_width || bottom > self.arena_height {
            return Err(ConfigError::BrickGridOutOfBounds {
                right,
                bottom,
                width: self.arena_width,
                height: self.arena_height,
            });
        }

        let r = self.ball_radius;
        let start = self.ball_start;
        if start.x < r
            || start.x > self.arena_width - r
            || start.y < r
            || start.y > self.arena_height - r
        {
            return Err(ConfigError::BallOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }

        if self.ball_velocity == Vec2::ZERO {
            return Err(ConfigError::ZeroVelocity);
        }

        // At most one radius per tick keeps a reflected step inside the arena
        let v = self.ball_velocity;
        if v.x.abs() > r || v.y.abs() > r {
            return Err(ConfigError::BallTooFast {
                dx: v.x,
                dy: v.y,
                radius: r,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_layout() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.ball_start, Vec2::new(240.0, 290.0));
        assert_eq!(config.paddle_start_x(), 202.5);
        assert_eq!(config.paddle_y(), 310.0);
        assert_eq!(config.brick_count(), 15);
    }

    #[test]
    fn test_brick_origin() {
        let config = GameConfig::default();
        assert_eq!(config.brick_origin(0, 0), Vec2::new(30.0, 30.0));
        assert_eq!(config.brick_origin(1, 0), Vec2::new(115.0, 30.0));
        assert_eq!(config.brick_origin(4, 2), Vec2::new(370.0, 90.0));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "brick_rows": 2, "paddle_step": 5.0 }"#)
            .expect("valid config");
        assert_eq!(config.brick_rows, 2);
        assert_eq!(config.paddle_step, 5.0);
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.brick_count(), 10);
    }

    #[test]
    fn test_vec_fields_parse_as_arrays() {
        let config = GameConfig::from_json(r#"{ "ball_velocity": [3.0, -1.0] }"#)
            .expect("valid config");
        assert_eq!(config.ball_velocity, Vec2::new(3.0, -1.0));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_zero_arena() {
        let config = GameConfig {
            arena_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                name: "arena_width",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_negative_padding() {
        let config = GameConfig {
            brick_padding: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let config = GameConfig {
            ball_radius: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                name: "ball_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = GameConfig {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBrickGrid { rows: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_wide_paddle() {
        let config = GameConfig {
            paddle_width: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_rejects_grid_outside_arena() {
        let config = GameConfig {
            brick_columns: 6,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BrickGridOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_ball_outside_arena() {
        let config = GameConfig {
            ball_start: Vec2::new(5.0, 100.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_fast_ball() {
        let config = GameConfig {
            ball_velocity: Vec2::new(500.0, -2.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooFast { radius, .. }) if radius == BALL_RADIUS
        ));

        let config = GameConfig {
            ball_velocity: Vec2::new(2.0, -10.5),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BallTooFast { .. })
        ));

        // Exactly one radius per tick is still allowed
        let config = GameConfig {
            ball_velocity: Vec2::new(-10.0, 10.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_velocity_and_interval() {
        let config = GameConfig {
            ball_velocity: Vec2::ZERO,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroVelocity)));

        let config = GameConfig {
            tick_interval_ms: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTickInterval(_))
        ));
    }
}
