//! Heart Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlAudioElement, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use heart_catch::audio::web::{HtmlAudioBackend, SfxPlayer};
    use heart_catch::audio::{Music, SoundEffect};
    use heart_catch::consts::PROPOSAL_REVEAL_DELAY_MS;
    use heart_catch::renderer::canvas::CanvasSurface;
    use heart_catch::sim::GameEvent;
    use heart_catch::ui::{NavAction, ScreenFlow, dom};
    use heart_catch::{GameLoop, Settings};

    /// Everything the page needs, shared between listeners
    struct App {
        game: GameLoop,
        flow: ScreenFlow,
        surface: CanvasSurface,
        music: Music<HtmlAudioBackend>,
        sfx: SfxPlayer,
        seed: Option<u64>,
        last_time: f64,
    }

    type Shared = Rc<RefCell<App>>;

    impl App {
        fn viewport() -> (f32, f32) {
            let window = web_sys::window();
            let read = |v: Option<Result<JsValue, JsValue>>| {
                v.and_then(|r| r.ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(0.0) as f32
            };
            let w = read(window.as_ref().map(|w| w.inner_width()));
            let h = read(window.as_ref().map(|w| w.inner_height()));
            (w, h)
        }

        fn resize(&mut self) {
            let (w, h) = Self::viewport();
            self.surface.resize(w as u32, h as u32);
            self.game.resize(w, h);
        }

        fn start(&mut self) {
            self.resize();
            let seed = self.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
            self.game.start(seed);
            dom::set_meter(self.game.state.progress_percent());
            self.sfx.resume();
            self.music.play();
        }

        fn navigate(&mut self, action: NavAction) {
            if let Some(transition) = self.flow.apply(action) {
                dom::apply_transition(transition, self.flow.hud_visible());
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Heart Catch starting...");

        let settings = Settings::load();
        let document = dom::document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no #gameCanvas")?
            .dyn_into()?;
        let surface = CanvasSurface::new(canvas).ok_or("canvas has no 2d context")?;

        let music_el = document
            .get_element_by_id("romantic-music")
            .and_then(|e| e.dyn_into::<HtmlAudioElement>().ok());
        if music_el.is_none() {
            log::warn!("No #romantic-music element; music disabled");
        }
        let music = Music::new(
            HtmlAudioBackend::new(music_el),
            settings.effective_music_volume(),
        );
        let sfx = SfxPlayer::new(settings.sfx_enabled);

        let seed = settings.seed;
        let (w, h) = App::viewport();
        let app = Rc::new(RefCell::new(App {
            game: GameLoop::new(settings, seed.unwrap_or(0), Vec2::new(w, h)),
            flow: ScreenFlow::new(),
            surface,
            music,
            sfx,
            seed,
            last_time: 0.0,
        }));
        app.borrow_mut().resize();

        setup_input_handlers(app.clone());
        setup_navigation(app.clone());
        setup_photo_modal(app.clone());
        setup_lifecycle(app.clone());

        request_animation_frame(app);

        log::info!("Heart Catch ready");
        Ok(())
    }

    fn setup_input_handlers(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Mouse move - absolute position
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut().game.pointer_moved(event.client_x() as f32);
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - first touch point
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    event.prevent_default();
                    app.borrow_mut().game.pointer_moved(touch.client_x() as f32);
                }
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Resize
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().resize();
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_navigation(app: Shared) {
        {
            let app = app.clone();
            dom::on_click("start-btn", move |_| {
                let mut a = app.borrow_mut();
                a.navigate(NavAction::Start);
                a.start();
            });
        }

        let buttons = [
            ("yes-btn", NavAction::Yes),
            ("no-btn", NavAction::No),
            ("next-btn", NavAction::Next),
            ("back-to-celebration", NavAction::BackToCelebration),
            ("to-gallery", NavAction::ToGallery),
            ("back-to-card", NavAction::BackToCard),
            ("back-from-gallery", NavAction::BackFromGallery),
        ];
        for (id, action) in buttons {
            let app = app.clone();
            dom::on_click(id, move |_| app.borrow_mut().navigate(action));
        }

        // The declined screen's markup calls `goBack()` inline
        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut()>::new(move || {
                app.borrow_mut().navigate(NavAction::GoBack);
            });
            let _ = js_sys::Reflect::set(&window, &JsValue::from_str("goBack"), closure.as_ref());
            closure.forget();
        }
    }

    fn setup_photo_modal(app: Shared) {
        // Tiles are rebuilt on every gallery visit, so listen on the grid
        {
            let app = app.clone();
            dom::on_click("gallery-grid", move |event| {
                let name = event
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .and_then(|el| el.get_attribute("data-photo"));
                if let Some(name) = name {
                    let src = app.borrow_mut().flow.open_photo(&name);
                    dom::show_photo_modal(&src);
                }
            });
        }

        {
            let app = app.clone();
            dom::on_click("close-photo-btn", move |event| {
                event.prevent_default();
                event.stop_propagation();
                app.borrow_mut().flow.close_photo();
                dom::hide_photo_modal();
            });
        }

        {
            let app = app.clone();
            dom::on_click("photo-modal", move |event| {
                let on_backdrop = match (event.target(), dom::element("photo-modal")) {
                    (Some(target), Some(modal)) => {
                        JsValue::from(target) == JsValue::from(modal)
                    }
                    _ => false,
                };
                if on_backdrop {
                    app.borrow_mut().flow.close_photo();
                    dom::hide_photo_modal();
                }
            });
        }

        if let Some(window) = web_sys::window() {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" && app.borrow_mut().flow.on_escape() {
                    dom::hide_photo_modal();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_lifecycle(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow_mut().music.pause();
        });
        let _ = window
            .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Shared) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Shared, time: f64) {
        let events = {
            let mut a = app.borrow_mut();
            let elapsed = if a.last_time > 0.0 {
                time - a.last_time
            } else {
                0.0
            };
            a.last_time = time;

            let App { game, surface, .. } = &mut *a;
            game.frame(elapsed, surface)
        };

        handle_events(&app, events);

        // Never cancelled; the session phase decides whether gameplay runs
        request_animation_frame(app);
    }

    fn handle_events(app: &Shared, events: Vec<GameEvent>) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(&event) {
                app.borrow().sfx.play(effect);
            }
            match event {
                GameEvent::ScoreChanged { progress, .. } => dom::set_meter(progress * 100.0),
                GameEvent::ThresholdReached { score } => {
                    log::info!("Threshold reached at {}; proposal incoming", score);
                    let app = app.clone();
                    dom::after(PROPOSAL_REVEAL_DELAY_MS, move || {
                        app.borrow_mut().navigate(NavAction::MeterFull);
                    });
                }
                _ => {}
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use heart_catch::renderer::RecordingSurface;
    use heart_catch::sim::{GameEvent, GamePhase};
    use heart_catch::ui::{NavAction, ScreenFlow};
    use heart_catch::{GameLoop, Settings};

    /// Give up on the autopilot after this many frames (10 minutes at 60 Hz)
    const MAX_FRAMES: u32 = 60 * 60 * 10;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    env_logger::init();
    log::info!("Heart Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or(0x4845_4152_54);
    let mut game = GameLoop::new(settings, seed, Vec2::new(800.0, 600.0));
    let mut flow = ScreenFlow::new();
    let mut surface = RecordingSurface::default();

    flow.apply(NavAction::Start);
    game.start(seed);

    let mut caught = 0u32;
    let mut missed = 0u32;
    let mut frames = 0u32;
    while game.phase() == GamePhase::Playing && frames < MAX_FRAMES {
        if let Some(x) = game.autopilot_pointer() {
            game.pointer_moved(x);
        }
        surface.reset();
        for event in game.frame(FRAME_MS, &mut surface) {
            match event {
                GameEvent::HeartCaught { .. } => caught += 1,
                GameEvent::HeartMissed => missed += 1,
                GameEvent::ThresholdReached { .. } => {
                    flow.apply(NavAction::MeterFull);
                }
                GameEvent::ScoreChanged { .. } => {}
            }
        }
        frames += 1;
    }

    let summary = serde_json::json!({
        "seed": seed,
        "frames": frames,
        "seconds": game.elapsed_ms() / 1000.0,
        "score": game.state.score,
        "caught": caught,
        "missed": missed,
        "phase": game.phase(),
        "screen": format!("{:?}", flow.current()),
        "last_frame_draw_calls": surface.commands.len(),
    });
    println!("{}", summary);
}
