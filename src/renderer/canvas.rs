//! Canvas 2D renderer for the browser build

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;
use crate::sim::RenderFrame;

const BRICK_COLOR: &str = "#0095DD";
const BALL_COLOR: &str = "red";
const PADDLE_FILL: &str = "yellow";
const PADDLE_STROKE: &str = "green";
const SCORE_COLOR: &str = "#0095DD";
const SCORE_FONT: &str = "16px Arial";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas` and size it to the arena
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { ctx })
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, frame: &RenderFrame) {
        let ctx = &self.ctx;
        ctx.clear_rect(
            0.0,
            0.0,
            frame.arena_width as f64,
            frame.arena_height as f64,
        );

        for brick in frame.active_bricks() {
            ctx.begin_path();
            ctx.rect(
                brick.x as f64,
                brick.y as f64,
                brick.width as f64,
                brick.height as f64,
            );
            ctx.set_fill_style_str(BRICK_COLOR);
            ctx.fill();
            ctx.close_path();
        }

        let ball = &frame.ball;
        ctx.begin_path();
        if let Err(e) = ctx.arc(ball.x as f64, ball.y as f64, ball.radius as f64, 0.0, TAU) {
            log::warn!("Ball arc failed: {:?}", e);
        }
        ctx.set_fill_style_str(BALL_COLOR);
        ctx.fill();
        ctx.close_path();

        let paddle = &frame.paddle;
        ctx.begin_path();
        ctx.rect(
            paddle.x as f64,
            paddle.y as f64,
            paddle.width as f64,
            paddle.height as f64,
        );
        ctx.set_fill_style_str(PADDLE_FILL);
        ctx.fill();
        ctx.set_stroke_style_str(PADDLE_STROKE);
        ctx.stroke();
        ctx.close_path();

        ctx.set_font(SCORE_FONT);
        ctx.set_fill_style_str(SCORE_COLOR);
        let _ = ctx.fill_text(&format!("Score: {}", frame.score), 8.0, 20.0);
    }
}
