//! Flappy Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, FocusEvent, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_dash::audio::AudioManager;
    use flappy_dash::consts::TICK_RATE_HZ;
    use flappy_dash::render::CanvasRenderer;
    use flappy_dash::sim::{FixedStep, GameEvent, GamePhase, GameState, TickInput, tick};
    use flappy_dash::{BestScore, Settings, Viewport};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FixedStep,
        input: TickInput,
        events: Vec<GameEvent>,
        audio: AudioManager,
        best: BestScore,
        settings: Settings,
        renderer: CanvasRenderer,
    }

    impl Game {
        /// Control pulse: any flap trigger, input-device-agnostic
        fn control_pulse(&mut self) {
            match self.state.phase {
                GamePhase::Idle => {
                    self.state.begin_run();
                    self.clock.reset();
                    self.input.flap = true;
                    self.audio.resume();
                    self.audio.run_started();
                    self.renderer.set_bird_visible(true);
                    show_run_hud();
                    log::info!("Run started (seed {})", self.state.seed);
                }
                GamePhase::Running => {
                    self.input.flap = true;
                }
                // Restart is a separate trigger; pulses here are ignored
                GamePhase::Over => {}
            }
        }

        /// Restart trigger, only meaningful in the Over state
        fn restart(&mut self) {
            if self.state.phase != GamePhase::Over {
                return;
            }
            self.state.reset_to_idle();
            self.renderer.set_bird_visible(false);
            show_idle_hud();
        }

        /// One frame notification: at most one fixed-step tick, then present
        fn frame(&mut self, time: f64) {
            if self.state.phase == GamePhase::Running && self.clock.tick_due(time) {
                tick(&mut self.state, &self.input, &mut self.events);
                // Clear one-shot inputs after processing
                self.input.flap = false;

                for event in self.events.drain(..) {
                    match event {
                        GameEvent::Scored { total } => {
                            set_text("score-text", &total.to_string());
                        }
                        GameEvent::RunEnded { score } => {
                            let best = self.best.finalize(score);
                            set_text("high-score", &best.to_string());
                            self.audio.run_ended();
                            show_game_over_hud();
                            log::info!("Run ended with score {} (best {})", score, best);
                        }
                    }
                }
            }
            self.renderer.draw(&self.state);
        }
    }

    // === HUD (the page's element ids) ===

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn set_text(id: &str, text: &str) {
        if let Some(el) = document().get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = document().get_element_by_id(id) {
            let _ = if hidden {
                el.class_list().add_1("hidden")
            } else {
                el.class_list().remove_1("hidden")
            };
        }
    }

    fn show_run_hud() {
        set_text("score-text", "0");
        set_hidden("start-instruction", true);
        set_hidden("game-title", true);
        set_hidden("restart-btn", true);
    }

    fn show_game_over_hud() {
        set_text("game-title", "Game Over");
        set_hidden("game-title", false);
        set_hidden("restart-btn", false);
    }

    fn show_idle_hud() {
        set_text("start-instruction", "Click to Start");
        set_hidden("start-instruction", false);
        set_hidden("game-title", true);
        set_hidden("restart-btn", true);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1280.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(720.0);
        let viewport = Viewport::new(width as f32, height as f32);

        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let best = BestScore::load();
        let mut audio = AudioManager::new();
        audio.apply_settings(&settings);

        let renderer = CanvasRenderer::new(&document).expect("missing canvas or bird element");
        renderer.resize(viewport.width as u32, viewport.height as u32);
        renderer.set_bird_visible(false);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, viewport),
            clock: FixedStep::new(TICK_RATE_HZ),
            input: TickInput::default(),
            events: Vec::new(),
            audio,
            best,
            settings,
            renderer,
        }));

        set_text("high-score", &game.borrow().best.value().to_string());
        show_idle_hud();

        setup_input_handlers(game.clone());
        setup_resize_handler(game.clone());
        setup_blur_handlers(game.clone());

        log::info!("Game initialized with seed: {}", seed);

        request_animation_frame(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard: space flaps, M toggles mute
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" => g.control_pulse(),
                    "KeyM" => {
                        g.settings.muted = !g.settings.muted;
                        g.settings.save();
                        let muted = g.settings.muted;
                        g.audio.set_muted(muted);
                        log::info!("Muted: {}", muted);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().control_pulse();
            });
            let _ = window
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (preventDefault so the page does not scroll)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().control_pulse();
            });
            let _ = window
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Restart button
        if let Some(btn) = document().get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().restart();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let viewport = Viewport::new(width as f32, height as f32);

            let mut g = game.borrow_mut();
            g.state.resize(viewport);
            g.renderer
                .resize(viewport.width as u32, viewport.height as u32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_blur_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.mute_on_blur {
                    g.audio.set_muted(true);
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                let mut g = game.borrow_mut();
                let muted = g.settings.muted;
                g.audio.set_muted(muted);
            });
            let _ =
                window.add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    println!("\nRunning headless demo...");
    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use flappy_dash::Viewport;
    use flappy_dash::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(42, Viewport::new(1280.0, 720.0));
    state.begin_run();

    let mut events = Vec::new();
    let mut ticks = 0u64;
    while state.phase == GamePhase::Running && ticks < 36_000 {
        // A steady flap cadence keeps the bird airborne for a while
        let input = TickInput {
            flap: ticks % 35 == 0,
        };
        tick(&mut state, &input, &mut events);
        ticks += 1;
    }

    for event in &events {
        if let GameEvent::RunEnded { score } = event {
            println!("✓ Demo run ended after {} ticks with score {}", ticks, score);
        }
    }
}
