//! Node Mesh entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use node_mesh::input::InputController;
    use node_mesh::render::canvas::Canvas2d;
    use node_mesh::render::draw_frame;
    use node_mesh::settings::Settings;
    use node_mesh::sim::{SimState, tick};

    /// App instance holding all state
    struct App {
        state: SimState,
        painter: Canvas2d,
        input: InputController,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
    }

    impl App {
        fn new(state: SimState, painter: Canvas2d, settings: Settings) -> Self {
            Self {
                state,
                painter,
                input: InputController::new(),
                settings,
                frame_times: [0.0; 60],
                frame_index: 0,
            }
        }

        /// Run one frame: drain input, tick the simulation, paint
        fn frame(&mut self, time: f64) {
            let input = self.input.take();
            let frame = tick(&mut self.state, &input);
            draw_frame(
                &mut self.painter,
                &frame,
                self.state.width,
                self.state.height,
            );

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            if self.settings.log_fps && self.state.time_ticks % 300 == 0 {
                let oldest = self.frame_times[self.frame_index];
                if oldest > 0.0 && time > oldest {
                    let fps = (60000.0 / (time - oldest)).round() as u32;
                    log::info!("fps: {} ({} nodes)", fps, self.state.pool.len());
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Node Mesh starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("networkCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to the viewport once; dimensions are not re-read
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .expect("no viewport width") as u32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .expect("no viewport height") as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimState::new(width as f32, height as f32, seed);
        log::info!(
            "Simulation initialized with seed {} ({} nodes, {}x{})",
            seed,
            state.pool.len(),
            width,
            height
        );

        let app = Rc::new(RefCell::new(App::new(
            state,
            Canvas2d::new(ctx),
            settings,
        )));

        setup_input_handlers(&canvas, app.clone());

        // Start the self-rescheduling frame loop
        request_animation_frame(app);

        log::info!("Node Mesh running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Click spawns a node at the pointer position
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                app.borrow_mut().input.on_click(pos);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move tracks the cursor for the repulsion effect
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                app.borrow_mut().input.on_pointer_move(pos);
                let _ = canvas_clone.style().set_property("cursor", "pointer");
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse leave clears the cursor and restores the default pointer
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().input.on_pointer_leave();
                let _ = canvas_clone.style().set_property("cursor", "auto");
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    web_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Node Mesh (native) starting...");
    log::info!("The canvas visual runs in the browser - this is a headless demo run");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use node_mesh::sim::{SimState, TickInput, tick};

    let mut state = SimState::new(800.0, 600.0, 42);
    let input = TickInput::default();
    for _ in 0..600 {
        tick(&mut state, &input);
    }

    log::info!(
        "600 headless frames: {} nodes, ceiling reached: {}",
        state.pool.len(),
        state.at_capacity
    );
    println!("✓ Headless run complete ({} nodes)", state.pool.len());
}
