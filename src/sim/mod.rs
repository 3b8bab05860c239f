//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (column-major brick grid)
//! - No rendering or platform dependencies

pub mod frame;
pub mod input;
pub mod state;
pub mod tick;

pub use frame::{BallShape, BrickShape, RectShape, RenderFrame};
pub use input::InputState;
pub use state::{Arena, Ball, Brick, BrickGrid, GameOutcome, GameState, Paddle};
pub use tick::{TickResult, tick};
