//! Zoo Arcade entry point
//!
//! Handles platform-specific initialization: on wasm it wires whichever
//! cabinet the current page hosts (Zoo Ninja or Grid Snake) and drives its
//! loop; natively it runs short headless demos of both simulations.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::Element;

    use zoo_arcade::consts::SNAKE_TICK_MS;
    use zoo_arcade::platform::LocalStore;
    use zoo_arcade::platform::dom::{self, SpriteLayer, TrailLayer};
    use zoo_arcade::ui::Screen;
    use zoo_arcade::{FrameClock, Leaderboard, TickGate, render, slice, snake, ui};

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        let document = dom::document();
        let seed = js_sys::Date::now() as u64;
        let mut wired = false;

        // Each page hosts one cabinet; wire whatever is present.
        if document.get_element_by_id("gameArea").is_some() {
            log::info!("Zoo Ninja page, seed {}", seed);
            run_zoo_ninja(seed);
            wired = true;
        }
        if document.get_element_by_id("board").is_some() {
            log::info!("Grid Snake page, seed {}", seed);
            run_grid_snake(seed);
            wired = true;
        }
        if !wired {
            log::warn!("no game container on this page, nothing to wire");
        }
    }

    /// Attach a click handler, or warn when the page lacks the button.
    fn on_click(id: &str, mut handler: impl FnMut() + 'static) {
        let Some(button) = dom::document().get_element_by_id(id) else {
            log::warn!("no #{} button to wire", id);
            return;
        };
        let closure =
            Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| handler());
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // ---------------------------------------------------------------------
    // Zoo Ninja: frame-driven loop over requestAnimationFrame
    // ---------------------------------------------------------------------

    struct ZooApp {
        game: slice::SliceGame,
        clock: FrameClock,
        gate: TickGate,
        area: Element,
        sprites: SpriteLayer,
        trail: TrailLayer,
    }

    impl ZooApp {
        /// The play area is laid out by CSS; re-read it so spawn range and
        /// the despawn floor track the real size.
        fn refresh_area(&mut self) {
            let rect = self.area.get_bounding_client_rect();
            self.game.set_area(rect.width() as f32, rect.height() as f32);
        }

        /// Pointer position in play-area coordinates.
        fn area_point(&self, event: &web_sys::PointerEvent) -> Vec2 {
            let rect = self.area.get_bounding_client_rect();
            Vec2::new(
                event.client_x() as f32 - rect.left() as f32,
                event.client_y() as f32 - rect.top() as f32,
            )
        }

        fn apply(&mut self) {
            let frame = render::slice_frame(&self.game);
            dom::apply_slice_frame(&mut self.sprites, &mut self.trail, &frame);
        }

        /// Stop the loop and raise the matching overlay when the sim has
        /// reached a terminal phase. Runs at most once per run: the gate is
        /// already stopped on later calls.
        fn settle_phase(&mut self) {
            if !self.gate.is_running() {
                return;
            }
            match self.game.phase {
                slice::Phase::RoundComplete => {
                    self.gate.stop();
                    dom::set_text("roundTitle", &ui::round_title(self.game.round));
                    dom::set_text("roundMessage", &ui::round_message(self.game.correct));
                    dom::show_screen(Screen::RoundComplete);
                }
                slice::Phase::GameOver => {
                    self.gate.stop();
                    dom::set_text(
                        "gameOverMessage",
                        &ui::game_over_message(self.game.score, self.game.round),
                    );
                    dom::show_screen(Screen::GameOver);
                }
                _ => {}
            }
        }
    }

    fn run_zoo_ninja(seed: u64) {
        let area = dom::element("gameArea");
        let trail = dom::element("sliceTrail");

        let app = Rc::new(RefCell::new(ZooApp {
            game: slice::SliceGame::new(seed),
            clock: FrameClock::new(),
            gate: TickGate::new(),
            sprites: SpriteLayer::new(area.clone()),
            trail: TrailLayer::new(trail),
            area: area.clone(),
        }));

        {
            let mut app = app.borrow_mut();
            app.refresh_area();
            app.apply();
        }
        refresh_score_list();

        wire_pointers(&area, &app);

        {
            let app = app.clone();
            on_click("startButton", move || start_run(&app));
        }
        {
            let app = app.clone();
            on_click("restartButton", move || start_run(&app));
        }
        {
            let app = app.clone();
            on_click("nextRoundButton", move || next_round(&app));
        }
        {
            let app = app.clone();
            on_click("saveScoreButton", move || save_score(&app));
        }
        on_click("instructionsButton", || {
            dom::show_screen(Screen::Instructions)
        });
        on_click("closeInstructions", || {
            dom::hide_screen(Screen::Instructions)
        });
        on_click("leaderboardButton", || {
            refresh_score_list();
            dom::show_screen(Screen::Leaderboard);
        });
        on_click("closeLeaderboard", || {
            dom::hide_screen(Screen::Leaderboard)
        });
    }

    fn wire_pointers(area: &Element, app: &Rc<RefCell<ZooApp>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut app = app.borrow_mut();
                let point = app.area_point(&event);
                app.game.pointer_down(point);
                app.apply();
                app.settle_phase();
            });
            let _ = area
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PointerEvent| {
                let mut app = app.borrow_mut();
                if !app.game.slicing || app.game.phase != slice::Phase::Running {
                    return;
                }
                let point = app.area_point(&event);
                app.game.pointer_move(point);
                app.apply();
                app.settle_phase();
            });
            let _ = area
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::PointerEvent| {
                app.borrow_mut().game.pointer_up();
            });
            let _ = area
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            let _ = area
                .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Fresh run from the start or game-over screen.
    fn start_run(app: &Rc<RefCell<ZooApp>>) {
        let generation = {
            let mut app = app.borrow_mut();
            app.game.start();
            app.clock.reset();
            app.apply();
            app.gate.start()
        };
        dom::hide_screen(Screen::Start);
        dom::hide_screen(Screen::RoundComplete);
        dom::hide_screen(Screen::GameOver);
        schedule_frame(app.clone(), generation);
    }

    fn next_round(app: &Rc<RefCell<ZooApp>>) {
        let generation = {
            let mut app = app.borrow_mut();
            if app.game.phase != slice::Phase::RoundComplete {
                return;
            }
            app.game.advance_round();
            app.clock.reset();
            app.apply();
            app.gate.start()
        };
        dom::hide_screen(Screen::RoundComplete);
        schedule_frame(app.clone(), generation);
    }

    fn save_score(app: &Rc<RefCell<ZooApp>>) {
        let Some(input) = dom::input("playerName") else {
            return;
        };
        let name = ui::player_name(&input.value());
        let score = app.borrow().game.score;

        let mut store = LocalStore;
        let mut board = Leaderboard::load(&store);
        board.record(&mut store, &name, score);
        input.set_value("");

        render_scores(&board);
        dom::hide_screen(Screen::GameOver);
        dom::show_screen(Screen::Leaderboard);
    }

    fn refresh_score_list() {
        render_scores(&Leaderboard::load(&LocalStore));
    }

    fn render_scores(board: &Leaderboard) {
        let Some(list) = dom::document().get_element_by_id("leaderboardList") else {
            log::warn!("no #leaderboardList to render into");
            return;
        };
        dom::render_score_list(&list, &render::score_rows(board));
    }

    fn schedule_frame(app: Rc<RefCell<ZooApp>>, generation: u64) {
        let closure = Closure::once_into_js(move |time: f64| frame(app, generation, time));
        let _ = web_sys::window()
            .expect("no window")
            .request_animation_frame(closure.unchecked_ref());
    }

    fn frame(app: Rc<RefCell<ZooApp>>, generation: u64, time: f64) {
        {
            let mut app = app.borrow_mut();
            if !app.gate.admits(generation) {
                return;
            }
            let dt = app.clock.delta_secs(time);
            app.refresh_area();
            slice::tick(&mut app.game, dt);
            app.apply();
            app.settle_phase();
            if !app.gate.is_running() {
                return;
            }
        }
        schedule_frame(app, generation);
    }

    // ---------------------------------------------------------------------
    // Grid Snake: fixed-interval loop over setInterval
    // ---------------------------------------------------------------------

    struct SnakeApp {
        game: snake::SnakeGame,
        gate: TickGate,
        cells: Vec<Element>,
        interval: Option<i32>,
    }

    impl SnakeApp {
        fn apply(&self) {
            dom::apply_board_frame(&self.cells, &render::board_frame(&self.game));
            dom::set_text("status", ui::snake_status(self.game.phase));
        }

        fn finish(&mut self) {
            self.gate.stop();
            self.clear_interval();
            dom::set_button_enabled("start", true);
        }

        fn clear_interval(&mut self) {
            if let (Some(id), Some(window)) = (self.interval.take(), web_sys::window()) {
                window.clear_interval_with_handle(id);
            }
        }
    }

    fn run_grid_snake(seed: u64) {
        let board = dom::element("board");
        let game = snake::SnakeGame::new(seed);
        let cells = dom::build_board(&board, game.grid.side());

        let app = Rc::new(RefCell::new(SnakeApp {
            game,
            gate: TickGate::new(),
            cells,
            interval: None,
        }));
        app.borrow().apply();

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                app.borrow_mut().game.steer_key(&event.key());
            });
            let _ = web_sys::window()
                .expect("no window")
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            on_click("start", move || start_snake(&app));
        }
        {
            let app = app.clone();
            on_click("reset", move || reset_snake(&app));
        }
    }

    fn start_snake(app: &Rc<RefCell<SnakeApp>>) {
        let generation = {
            let mut app = app.borrow_mut();
            if app.game.phase != snake::Phase::Idle {
                return;
            }
            app.game.start();
            app.apply();
            dom::set_button_enabled("start", false);
            app.gate.start()
        };
        arm_interval(app, generation);
    }

    fn reset_snake(app: &Rc<RefCell<SnakeApp>>) {
        let mut app = app.borrow_mut();
        app.gate.stop();
        app.clear_interval();
        app.game.reset();
        app.apply();
        dom::set_button_enabled("start", true);
    }

    fn arm_interval(app: &Rc<RefCell<SnakeApp>>, generation: u64) {
        let closure = Closure::<dyn FnMut()>::new({
            let app = app.clone();
            move || snake_tick(&app, generation)
        });
        let handle = web_sys::window()
            .expect("no window")
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                SNAKE_TICK_MS,
            );
        closure.forget();
        match handle {
            Ok(id) => app.borrow_mut().interval = Some(id),
            Err(err) => log::warn!("could not arm the snake timer: {:?}", err),
        }
    }

    fn snake_tick(app: &Rc<RefCell<SnakeApp>>, generation: u64) {
        let mut app = app.borrow_mut();
        if !app.gate.admits(generation) {
            return;
        }
        snake::step(&mut app.game);
        app.apply();
        if app.game.phase != snake::Phase::Running {
            app.finish();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Zoo Arcade (native) starting...");
    log::info!("Both cabinets are browser pages - build with trunk for the web version");

    println!("\nRunning headless demos...");
    demo_grid_snake();
    demo_zoo_ninja();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // wasm builds enter through wasm_main; this only satisfies the bin target
}

/// Walk an unsteered snake into the right wall.
#[cfg(not(target_arch = "wasm32"))]
fn demo_grid_snake() {
    use zoo_arcade::snake::{Phase, SnakeGame, step};

    let mut game = SnakeGame::new(4242);
    game.start();
    let mut ticks = 0;
    while game.phase == Phase::Running && ticks < 10 {
        step(&mut game);
        ticks += 1;
    }

    assert_eq!(game.phase, Phase::Lost, "head 44 walks off the board in 6 ticks");
    assert_eq!(ticks, 6);
    println!(
        "✓ Grid Snake demo: lost at the wall after {} ticks, score {}",
        ticks, game.score
    );
}

/// Let the spawner run for a few simulated seconds, then slice every animal
/// matching the round target.
#[cfg(not(target_arch = "wasm32"))]
fn demo_zoo_ninja() {
    use glam::Vec2;
    use zoo_arcade::slice::{SliceGame, tick};

    let mut game = SliceGame::new(4242);
    game.start();
    for _ in 0..180 {
        tick(&mut game, 1.0 / 60.0);
    }

    // One slice per matching animal, skipping points where hitboxes of
    // different categories overlap.
    let hits: Vec<Vec2> = game
        .animals
        .iter()
        .filter(|animal| animal.is_active() && animal.spec.category == game.target)
        .map(|animal| animal.pos + Vec2::new(0.0, 10.0))
        .filter(|point| {
            game.animals
                .iter()
                .filter(|animal| animal.contains(*point))
                .all(|animal| animal.spec.category == game.target)
        })
        .collect();
    for point in hits {
        game.pointer_down(point);
        game.pointer_up();
    }

    assert_eq!(game.mistakes, 0, "only matching animals were sliced");
    println!(
        "✓ Zoo Ninja demo: {} points toward {} after three seconds",
        game.score,
        game.target.as_str()
    );
}
