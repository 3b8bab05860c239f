//! Fixed timestep simulation tick
//!
//! Core game loop step: input, bricks, win check, ball, render.

use super::frame::RenderFrame;
use super::input::InputState;
use super::state::{GameOutcome, GameState};

/// What one tick produced
#[derive(Debug, Clone)]
pub struct TickResult {
    pub outcome: GameOutcome,
    /// Draw command for the state after this tick
    pub frame: RenderFrame,
}

impl TickResult {
    fn capture(state: &GameState) -> Self {
        Self {
            outcome: state.outcome,
            frame: RenderFrame::capture(state),
        }
    }
}

/// Advance the game state by one tick.
///
/// A state that already reached `Won` or `Lost` is left untouched.
pub fn tick(state: &mut GameState, input: &InputState) -> TickResult {
    if state.outcome.is_terminal() {
        return TickResult::capture(state);
    }

    state.time_ticks += 1;

    // Paddle follows held keys
    let max_x = state.max_paddle_x();
    state.paddle.shift(input.direction(), max_x);

    let hits = resolve_brick_hits(state);
    if hits > 0 {
        log::debug!(
            "Tick {}: {} brick(s) hit, score {}",
            state.time_ticks,
            hits,
            state.score
        );
    }

    if state.score == state.winning_score() {
        state.outcome = GameOutcome::Won;
        log::info!("All bricks cleared after {} ticks", state.time_ticks);
        return TickResult::capture(state);
    }

    advance_ball(state);

    TickResult::capture(state)
}

/// Deactivate every active brick containing the ball center.
///
/// Each hit flips the vertical direction, so two overlapping hits cancel out.
/// Returns the number of bricks destroyed.
fn resolve_brick_hits(state: &mut GameState) -> u32 {
    state.bricks.refresh_layout(&state.config);

    let center = state.ball.pos;
    let size = state.config.brick_size();
    let mut hits = 0;
    for brick in state.bricks.iter_mut() {
        if brick.active && brick.contains(center, size) {
            brick.active = false;
            state.ball.vel.y = -state.ball.vel.y;
            hits += 1;
        }
    }
    state.score += hits;
    hits
}

/// Reflect off walls and paddle, then move the ball one step
fn advance_ball(state: &mut GameState) {
    let arena = state.arena;
    let ball = &mut state.ball;
    let r = ball.radius;
    let next = ball.pos + ball.vel;

    if next.x > arena.width - r || next.x < r {
        ball.vel.x = -ball.vel.x;
    }

    if next.y < r {
        ball.vel.y = -ball.vel.y;
    } else if next.y > arena.height - r {
        if state.paddle.spans(ball.pos.x) {
            ball.vel.y = -ball.vel.y;
            log::debug!("Paddle return at x={:.1}", ball.pos.x);
        } else {
            state.outcome = GameOutcome::Lost;
            log::info!(
                "Ball missed the paddle at x={:.1} (score {})",
                ball.pos.x,
                state.score
            );
        }
    }

    ball.pos += ball.vel;
}
