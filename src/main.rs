//! Ghost Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use ghost_dash::platform::web::{DomScoreReadout, load_sheets};
    use ghost_dash::platform::{ScoreReadout, host_action, movement_key};
    use ghost_dash::renderer::{CanvasSurface, Surface, draw_frame};
    use ghost_dash::sim::HeldKeys;
    use ghost_dash::{Game, Settings};

    /// Everything the frame callback and key listeners share
    struct Host {
        game: Game,
        keys: HeldKeys,
        surface: CanvasSurface,
        readout: DomScoreReadout,
    }

    impl Host {
        /// Show the current score, e.g. zero after a restart
        fn readout_reset(&mut self) {
            let score = self.game.score();
            self.readout.show_score(score);
        }
    }

    fn seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ghost Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let Some(mut surface) = CanvasSurface::new(&canvas) else {
            log::error!("Canvas has no 2D context");
            return;
        };

        // Background while the sheets decode
        draw_frame(&mut surface, None);

        let gate = load_sheets(&mut surface).await;
        if !gate.failures().is_empty() {
            log::warn!("{} sprite sheet(s) missing, starting anyway", gate.failures().len());
        }

        let settings = Settings::from_json_or_default(canvas.get_attribute("data-settings").as_deref());
        let game = Game::new(surface.size(), settings, seed());
        let readout = DomScoreReadout::new(&document, "score");

        let host = Rc::new(RefCell::new(Host {
            game,
            keys: HeldKeys::default(),
            surface,
            readout,
        }));
        host.borrow_mut().readout_reset();

        setup_input_handlers(host.clone());

        // Start game loop
        request_animation_frame(host);

        log::info!("Ghost Dash running!");
    }

    fn setup_input_handlers(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();

        // Key down: hold movement keys, fire one-shot actions
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                let mut h = host.borrow_mut();
                if let Some(k) = movement_key(&key) {
                    event.prevent_default();
                    h.keys.set(k, true);
                } else if let Some(action) = host_action(&key) {
                    event.prevent_default();
                    if event.repeat() {
                        return;
                    }
                    let was_over = h.game.is_over();
                    h.game.handle_action(action, seed());
                    if was_over && !h.game.is_over() {
                        h.readout_reset();
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up: release movement keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(k) = movement_key(&event.key()) {
                    host.borrow_mut().keys.set(k, false);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(host);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>) {
        {
            let mut h = host.borrow_mut();
            let Host {
                game,
                keys,
                surface,
                readout,
            } = &mut *h;
            game.frame(&*keys, surface, readout);
        }

        request_animation_frame(host);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless runner plays (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use ghost_dash::consts::*;
    use ghost_dash::platform::LogScoreReadout;
    use ghost_dash::renderer::RecordingSurface;
    use ghost_dash::sim::HeldKeys;
    use ghost_dash::{Game, Settings};

    env_logger::init();
    log::info!("Ghost Dash (native) starting...");
    log::info!("Native mode runs headless on autopilot - run with `trunk serve` for the web version");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let size = glam::Vec2::new(DEFAULT_PLAYFIELD_WIDTH, DEFAULT_PLAYFIELD_HEIGHT);
    let mut game = Game::new(size, Settings::default(), seed);
    let mut surface = RecordingSurface::new(size);
    let mut readout = LogScoreReadout::default();

    for _ in 0..HEADLESS_FRAMES {
        // Head for the first collectible
        let world = game.world();
        let target = world
            .collectibles
            .first()
            .map(|c| c.tile().center())
            .unwrap_or_else(|| world.player.tile().center());
        let keys = HeldKeys::toward(world.player.tile().center(), target, world.player.speed);

        surface.commands.clear();
        game.frame(&keys, &mut surface, &mut readout);
        if game.is_over() {
            break;
        }
    }

    println!(
        "Final score: {} ({} ghosts, {} frames{})",
        game.score(),
        game.world().enemies.len(),
        game.world().frame,
        if game.is_over() { ", caught" } else { "" }
    );
}
