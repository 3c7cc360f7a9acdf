//! Orb Dash entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use orb_dash::consts::MAX_DT;
    use orb_dash::renderer::RenderState;
    use orb_dash::sim::{FrameInput, WorldState, tick};

    /// Key codes the game consumes; default browser handling is suppressed
    /// for these so arrows and Space never scroll the page.
    const CONTROL_CODES: [&str; 10] = [
        "ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "KeyW", "KeyA", "KeyS", "KeyD",
        "Space", "KeyZ",
    ];

    /// Game instance holding all state
    struct Game {
        state: WorldState,
        render_state: Option<RenderState>,
        input: FrameInput,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: WorldState::new(seed),
                render_state: None,
                input: FrameInput::default(),
                last_time: 0.0,
            }
        }

        fn update(&mut self, dt: f32) {
            tick(&mut self.state, &self.input, dt);
            // Clear one-shot inputs after processing
            self.input.confirm = false;
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&self.state, time / 1000.0) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update score/time/status elements in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            if let Some(el) = document.get_element_by_id("time") {
                el.set_text_content(Some(&self.state.time_display().to_string()));
            }

            if let Some(el) = document.get_element_by_id("status") {
                match self.state.status() {
                    Some((message, won)) => {
                        el.set_text_content(Some(&message));
                        let _ = el.set_attribute("class", if won { "win" } else { "lose" });
                    }
                    None => {
                        el.set_text_content(Some(""));
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }
    }

    /// Route a key event into the frame input. Enter is a one-shot confirm;
    /// everything else is level-triggered while held.
    fn apply_key(input: &mut FrameInput, code: &str, down: bool) {
        match code {
            "ArrowUp" | "KeyW" => input.forward = down,
            "ArrowDown" | "KeyS" => input.back = down,
            "ArrowLeft" | "KeyA" => input.left = down,
            "ArrowRight" | "KeyD" => input.right = down,
            "Space" | "KeyZ" => input.jump = down,
            "Enter" => {
                if down {
                    input.confirm = true;
                }
            }
            _ => {}
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orb Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas; clamp device pixel ratio to keep fill rate sane
        let dpr = window.device_pixel_ratio().min(2.0);
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));

        log::info!("Session initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, seed).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_resize_handler(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Orb Dash running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let code = event.code();
                if CONTROL_CODES.contains(&code.as_str()) {
                    event.prevent_default();
                }
                apply_key(&mut game.borrow_mut().input, &code, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let code = event.code();
                if CONTROL_CODES.contains(&code.as_str()) {
                    event.prevent_default();
                }
                apply_key(&mut game.borrow_mut().input, &code, false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let win = web_sys::window().unwrap();
            let dpr = win.device_pixel_ratio().min(2.0);
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);
            if let Some(ref mut render_state) = game.borrow_mut().render_state {
                render_state.resize(width, height);
            }
        });
        let _ =
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
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
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                MAX_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render(time);
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use orb_dash::Tuning;
    use orb_dash::sim::{FrameInput, SessionPhase, WorldState, tick};

    env_logger::init();

    let seed = std::env::var("ORB_DASH_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(7);
    let tuning = match std::env::var("ORB_DASH_TUNING") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring bad tuning override: {}", e);
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    log::info!("Orb Dash (native) starting with seed {}", seed);
    log::info!("Headless demo session - run with `trunk serve` for the web version");

    let mut state = WorldState::with_tuning(seed, tuning);
    let dt = 1.0 / 60.0;

    // Scripted wander: sweep the arena and hop periodically until time runs out
    let mut steps = 0u32;
    while state.phase == SessionPhase::Running {
        let input = FrameInput {
            forward: steps % 480 < 240,
            back: steps % 480 >= 240,
            left: steps % 360 < 180,
            right: steps % 360 >= 180,
            jump: steps % 90 == 0,
            confirm: false,
        };
        tick(&mut state, &input, dt);
        steps += 1;
    }

    let (message, _won) = state.status().expect("finished without an outcome");
    println!("{} ticks simulated, final score {}", steps, state.score);
    println!("{}", message);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
