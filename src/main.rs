//! Breakout entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use breakout::renderer::{CanvasRenderer, Renderer};
    use breakout::sim::GameOutcome;
    use breakout::{GameConfig, Session};

    /// Game instance holding all state
    struct Game {
        session: Session,
        renderer: CanvasRenderer,
        last_time: f64,
    }

    impl Game {
        /// Run due ticks and draw; on a terminal outcome notify and restart
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            let outcome = self.session.update(elapsed, &mut self.renderer);
            if outcome.is_terminal() {
                let message = match outcome {
                    GameOutcome::Won => "Congratulations, you win!",
                    _ => "GAME OVER",
                };
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
                self.session.reset();
                // Time spent in the alert doesn't count
                self.last_time = 0.0;
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Breakout starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let session = match Session::new(GameConfig::default()) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                return;
            }
        };

        let config = session.config();
        let mut renderer = match CanvasRenderer::new(
            &canvas,
            config.arena_width as u32,
            config.arena_height as u32,
        ) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to set up canvas: {:?}", e);
                return;
            }
        };
        renderer.draw(&session.frame());

        let game = Rc::new(RefCell::new(Game {
            session,
            renderer,
            last_time: 0.0,
        }));

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Breakout running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Right" | "ArrowRight" => g.session.on_right_down(),
                    "Left" | "ArrowLeft" => g.session.on_left_down(),
                    "i" | "I" => {
                        g.session.toggle_autopilot();
                    }
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "Right" | "ArrowRight" => g.session.on_right_up(),
                    "Left" | "ArrowLeft" => g.session.on_left_up(),
                    _ => {}
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Demo ticks before the native run gives up (about 5 minutes at 10 ms)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 30_000;

/// Ticks between printed frames
#[cfg(not(target_arch = "wasm32"))]
const PRINT_EVERY_TICKS: u64 = 25;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{Duration, Instant};

    use breakout::renderer::TextRenderer;
    use breakout::{GameConfig, Session};

    env_logger::init();
    log::info!("Breakout (native) starting...");
    log::info!("Native mode runs the autopilot demo - build for wasm32 to play");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Rejected config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut session = match Session::new(config) {
        Ok(session) => session,
        Err(e) => {
            log::warn!("Rejected config: {}", e);
            std::process::exit(1);
        }
    };
    session.set_autopilot(true);

    let interval = Duration::from_secs_f64(session.config().tick_interval_ms / 1000.0);
    let mut renderer = TextRenderer::new(60, 20);
    let mut last = Instant::now();
    let mut printed_at = 0;

    loop {
        std::thread::sleep(interval);
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last).as_secs_f64() * 1000.0;
        last = now;

        let outcome = session.update(elapsed_ms, &mut renderer);
        let ticks = session.state().time_ticks;

        if outcome.is_terminal() || ticks >= printed_at + PRINT_EVERY_TICKS {
            // Clear screen and home the cursor
            print!("\x1b[2J\x1b[H{}", renderer.last_frame());
            printed_at = ticks;
        }

        if outcome.is_terminal() {
            log::info!("Finished with {:?} after {} ticks", outcome, ticks);
            break;
        }
        if ticks >= DEMO_MAX_TICKS {
            log::info!(
                "Demo stopped after {} ticks with score {}",
                ticks,
                session.state().score
            );
            break;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
