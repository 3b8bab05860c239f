//! Idle/demo mode - the computer holds the keys
//!
//! Produces the same held-key flags a player would, so the simulation can't
//! tell the difference.

use crate::sim::{GameState, InputState};

/// How many ticks ahead of the ball the paddle aims
const LEAD_TICKS: f32 = 4.0;

/// Hold left or right to keep the paddle center under the ball's near-future x
pub fn steer(state: &GameState) -> InputState {
    let paddle = &state.paddle;
    let center = paddle.x + paddle.width / 2.0;
    let target = state.ball.pos.x + state.ball.vel.x * LEAD_TICKS;
    let offset = target - center;

    let mut input = InputState::default();
    // Within one step: stay put rather than oscillate
    if offset > paddle.step {
        input.on_right_down();
    } else if offset < -paddle.step {
        input.on_left_down();
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GameOutcome, tick};
    use glam::Vec2;

    #[test]
    fn test_steers_toward_ball() {
        let mut state = GameState::new(&GameConfig::default());
        state.ball.pos = Vec2::new(50.0, 200.0);
        assert!(steer(&state).left_held);

        state.ball.pos = Vec2::new(430.0, 200.0);
        assert!(steer(&state).right_held);
    }

    #[test]
    fn test_holds_still_when_aligned() {
        let mut state = GameState::new(&GameConfig::default());
        state.paddle.x = 200.0;
        state.ball.pos = Vec2::new(237.5 - 8.0, 200.0);
        state.ball.vel = Vec2::new(2.0, 2.0);
        assert_eq!(steer(&state), InputState::default());
    }

    #[test]
    fn test_never_misses() {
        let mut state = GameState::new(&GameConfig::default());
        for _ in 0..5000 {
            let input = steer(&state);
            if tick(&mut state, &input).outcome.is_terminal() {
                break;
            }
        }
        assert_ne!(state.outcome, GameOutcome::Lost);
        assert!(state.score > 0);
    }
}
