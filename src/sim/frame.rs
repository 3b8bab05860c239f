//! Draw command emitted once per tick
//!
//! A plain snapshot of what the renderer needs. Styling is the renderer's job.

use serde::{Deserialize, Serialize};

use super::state::{GameOutcome, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallShape {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub active: bool,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ball: BallShape,
    pub paddle: RectShape,
    pub bricks: Vec<BrickShape>,
    pub score: u32,
    pub outcome: GameOutcome,
}

impl RenderFrame {
    pub fn capture(state: &GameState) -> Self {
        let brick_size = state.config.brick_size();
        Self {
            arena_width: state.arena.width,
            arena_height: state.arena.height,
            ball: BallShape {
                x: state.ball.pos.x,
                y: state.ball.pos.y,
                radius: state.ball.radius,
            },
            paddle: RectShape {
                x: state.paddle.x,
                y: state.paddle_y(),
                width: state.paddle.width,
                height: state.paddle.height,
            },
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickShape {
                    x: b.pos.x,
                    y: b.pos.y,
                    width: brick_size.x,
                    height: brick_size.y,
                    active: b.active,
                })
                .collect(),
            score: state.score,
            outcome: state.outcome,
        }
    }

    /// Bricks still standing
    pub fn active_bricks(&self) -> impl Iterator<Item = &BrickShape> {
        self.bricks.iter().filter(|b| b.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_capture() {
        let mut state = GameState::new(&GameConfig::default());
        if let Some(brick) = state.bricks.get_mut(1, 1) {
            brick.active = false;
        }
        state.score = 1;

        let frame = RenderFrame::capture(&state);
        assert_eq!(frame.ball.x, 240.0);
        assert_eq!(frame.ball.radius, 10.0);
        assert_eq!(frame.paddle.y, 310.0);
        assert_eq!(frame.bricks.len(), 15);
        assert_eq!(frame.active_bricks().count(), 14);
        assert_eq!((frame.bricks[0].width, frame.bricks[0].height), (75.0, 20.0));
        assert_eq!(frame.score, 1);
        assert_eq!(frame.outcome, GameOutcome::Playing);
    }

    #[test]
    fn test_serializes_to_json() {
        let frame = RenderFrame::capture(&GameState::new(&GameConfig::default()));
        let json = serde_json::to_value(&frame).expect("serializable");
        assert_eq!(json["score"], 0);
        assert_eq!(json["outcome"], "Playing");
        assert_eq!(json["bricks"].as_array().map(|b| b.len()), Some(15));
    }
}
