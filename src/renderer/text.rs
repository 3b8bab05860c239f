//! Character-grid renderer for terminals and tests

use super::Renderer;
use crate::sim::{GameOutcome, RenderFrame};

const BRICK: char = '#';
const PADDLE: char = '=';
const BALL: char = 'o';
const EMPTY: char = ' ';

/// Rasterizes frames into a fixed-size character grid
#[derive(Debug, Clone)]
pub struct TextRenderer {
    columns: usize,
    rows: usize,
    last: String,
}

impl TextRenderer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            last: String::new(),
        }
    }

    /// Most recently drawn frame
    pub fn last_frame(&self) -> &str {
        &self.last
    }

    /// Render a frame to text: a score line, the grid, and a banner once the game ends
    pub fn rasterize(&self, frame: &RenderFrame) -> String {
        let sx = self.columns as f32 / frame.arena_width;
        let sy = self.rows as f32 / frame.arena_height;
        let mut grid = vec![vec![EMPTY; self.columns]; self.rows];

        let mut fill = |x: f32, y: f32, w: f32, h: f32, ch: char| {
            let c0 = cell(x * sx, self.columns);
            let c1 = cell(((x + w) * sx).ceil() - 1.0, self.columns);
            let r0 = cell(y * sy, self.rows);
            let r1 = cell(((y + h) * sy).ceil() - 1.0, self.rows);
            for row in grid.iter_mut().take(r1 + 1).skip(r0) {
                for slot in row.iter_mut().take(c1 + 1).skip(c0) {
                    *slot = ch;
                }
            }
        };

        for brick in frame.active_bricks() {
            fill(brick.x, brick.y, brick.width, brick.height, BRICK);
        }
        let p = &frame.paddle;
        fill(p.x, p.y, p.width, p.height, PADDLE);

        let bc = cell(frame.ball.x * sx, self.columns);
        let br = cell(frame.ball.y * sy, self.rows);
        grid[br][bc] = BALL;

        let mut out = format!("Score: {}\n", frame.score);
        for row in &grid {
            out.extend(row.iter());
            out.push('\n');
        }
        match frame.outcome {
            GameOutcome::Won => out.push_str("Congratulations, you win!\n"),
            GameOutcome::Lost => out.push_str("GAME OVER\n"),
            GameOutcome::Playing => {}
        }
        out
    }
}

/// Floor a scaled coordinate into `[0, len)`
fn cell(v: f32, len: usize) -> usize {
    if v <= 0.0 {
        0
    } else {
        (v.floor() as usize).min(len - 1)
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &RenderFrame) {
        self.last = self.rasterize(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GameState;

    fn lines(text: &str) -> Vec<Vec<char>> {
        text.lines().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_initial_frame() {
        let state = GameState::new(&GameConfig::default());
        let mut renderer = TextRenderer::new(60, 20);
        renderer.draw(&RenderFrame::capture(&state));

        let text = renderer.last_frame();
        let grid = lines(text);
        assert_eq!(grid[0].iter().collect::<String>(), "Score: 0");
        assert_eq!(grid.len(), 21);
        assert!(grid[1..].iter().all(|row| row.len() == 60));

        // Ball at (240, 290) -> column 30, row 18
        assert_eq!(grid[1 + 18][30], BALL);
        // Paddle fills the bottom row from x=202.5
        assert_eq!(grid[20][25], PADDLE);
        assert_eq!(grid[20][10], EMPTY);
        // Brick (0, 0) covers (30..105, 30..50)
        assert_eq!(grid[1 + 1][3], BRICK);
        assert_eq!(grid[1 + 1][2], EMPTY);
    }

    #[test]
    fn test_inactive_bricks_not_drawn() {
        let mut state = GameState::new(&GameConfig::default());
        for brick in state.bricks.iter_mut() {
            brick.active = false;
        }
        let renderer = TextRenderer::new(60, 20);
        let text = renderer.rasterize(&RenderFrame::capture(&state));
        assert!(!text.contains(BRICK));
    }

    #[test]
    fn test_outcome_banner() {
        let mut state = GameState::new(&GameConfig::default());
        let renderer = TextRenderer::new(30, 10);
        state.outcome = GameOutcome::Lost;
        assert!(renderer.rasterize(&RenderFrame::capture(&state)).ends_with("GAME OVER\n"));
        state.outcome = GameOutcome::Won;
        assert!(
            renderer
                .rasterize(&RenderFrame::capture(&state))
                .contains("you win")
        );
    }
}
