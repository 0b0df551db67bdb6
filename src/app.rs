//! The desktop shell: SDL2 window, screens, keyboard, and the fixed-interval loop.

use std::str::FromStr;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use glam::{IVec2, UVec2};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use tracing::{debug, error, info, warn};

use crate::asset::Asset;
use crate::config::GameConfig;
use crate::constants::{CANVAS_SIZE, LOOP_TIME, SPLASH_DELAY, WINDOW_SIZE};
use crate::entity::sprite::Sprite;
use crate::events::{GameCommand, GameEvent};
use crate::game::{canvas_offset, GameScreen};
use crate::input::Bindings;
use crate::render::sdl::{SdlSurface, TextureStore};
use crate::render::Surface;
use crate::scheduler::Scheduler;
use crate::screen::{Router, Screen};

/// Something the application does later, on the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Show(Screen),
    Exit,
}

const MENU_BACKGROUND: Color = Color::RGB(0, 0, 160);

pub struct App {
    // Dropped before the canvas that created them.
    textures: TextureStore,
    _texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    router: Router,
    game: GameScreen,
    scheduler: Scheduler<Screen, AppAction>,
    bindings: Bindings,
    last_tick: Instant,
    running: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Pac-Man", WINDOW_SIZE.x, WINDOW_SIZE.y)
            .position_centered()
            .build()?;
        let canvas = window.into_canvas().build()?;
        let texture_creator = canvas.texture_creator();
        let textures = TextureStore::load(&texture_creator);
        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let config = GameConfig {
            start_paused: true,
            ..GameConfig::default()
        };
        let game = GameScreen::new(config).context("Could not build the game screen")?;

        let mut app = Self {
            textures,
            _texture_creator: texture_creator,
            canvas,
            event_pump,
            router: Router::new(Screen::Splash),
            game,
            scheduler: Scheduler::new(),
            bindings: Bindings::default(),
            last_tick: Instant::now(),
            running: true,
        };
        app.enter(Screen::Splash)?;
        Ok(app)
    }

    /// Runs one loop iteration. Returns `false` once the application should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        let events: Vec<Event> = self.event_pump.poll_iter().collect();
        for event in events {
            if let Err(e) = self.handle_event(event) {
                error!("Failed to handle input: {e:#}");
            }
        }

        let elapsed = self.last_tick.elapsed();
        self.last_tick = Instant::now();
        for action in self.scheduler.advance(elapsed) {
            if let Err(e) = self.perform(action) {
                error!(?action, "Delayed action failed: {e:#}");
            }
        }

        if let Err(e) = self.render() {
            error!("Failed to draw frame: {e:#}");
        }
        self.canvas.present();

        if let Err(e) = self.forward_game_events() {
            error!("Failed to handle game event: {e:#}");
        }

        let spent = start.elapsed();
        if spent < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - spent);
        } else {
            warn!("Game loop behind schedule by: {:?}", spent - LOOP_TIME);
        }

        self.running
    }

    /// Shows the screen called `name`.
    pub fn show_screen_by_name(&mut self, name: &str) -> Result<()> {
        let screen = Screen::from_str(name).map_err(|_| anyhow!("No screen called {name:?}"))?;
        self.show_screen(screen)
    }

    pub fn show_screen(&mut self, screen: Screen) -> Result<()> {
        let Some(previous) = self.router.show(screen) else {
            return Ok(());
        };
        if previous == Screen::PlayGame {
            self.game.stop();
        }
        self.enter(screen)
    }

    fn enter(&mut self, screen: Screen) -> Result<()> {
        match screen {
            Screen::Splash => {
                self.scheduler.schedule(Screen::Splash, SPLASH_DELAY, AppAction::Show(Screen::Menu));
            }
            Screen::PlayGame => {
                if self.game.is_game_over() {
                    self.game.reset()?;
                }
                self.game.start();
            }
            Screen::Menu | Screen::Instructions | Screen::GameOver => {}
        }
        Ok(())
    }

    fn perform(&mut self, action: AppAction) -> Result<()> {
        match action {
            AppAction::Show(screen) => self.show_screen(screen),
            AppAction::Exit => {
                info!("Exiting after game over");
                self.running = false;
                Ok(())
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape) | Some(Keycode::Q),
                ..
            } => {
                info!("Exit requested. Exiting...");
                self.running = false;
                Ok(())
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_key(key),
            _ => Ok(()),
        }
    }

    fn handle_key(&mut self, key: Keycode) -> Result<()> {
        match self.router.current() {
            Screen::Splash => {
                self.scheduler.cancel_owned_by(Screen::Splash);
                self.show_screen(Screen::Menu)
            }
            Screen::Menu => match key {
                Keycode::Num1 | Keycode::Return => self.show_screen(Screen::PlayGame),
                Keycode::Num2 | Keycode::I => self.show_screen(Screen::Instructions),
                _ => Ok(()),
            },
            Screen::Instructions => match key {
                Keycode::B | Keycode::Backspace => self.show_screen(Screen::Menu),
                _ => Ok(()),
            },
            Screen::PlayGame => {
                let Some(command) = self.bindings.command(key) else {
                    return Ok(());
                };
                debug!(?command, "Game command");
                if command == GameCommand::ResetLevel {
                    self.scheduler.cancel_owned_by(Screen::PlayGame);
                    self.game.reset()?;
                    self.game.start();
                    return Ok(());
                }
                self.game.handle_command(command)?;
                Ok(())
            }
            Screen::GameOver => Ok(()),
        }
    }

    /// Acts on whatever the game screen asked for during its last update.
    fn forward_game_events(&mut self) -> Result<()> {
        for event in self.game.take_events() {
            match event {
                GameEvent::Finished(outcome) => info!(%outcome, "Round over"),
                GameEvent::ShowScreen(screen) => self.show_screen(screen)?,
                GameEvent::ExitAfter(delay) => {
                    self.scheduler.schedule(Screen::PlayGame, delay, AppAction::Exit);
                }
            }
        }
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.canvas.set_draw_color(Color::BLACK);
        self.canvas.clear();

        let screen = self.router.current();
        if screen == Screen::PlayGame {
            let offset = canvas_offset(WINDOW_SIZE, CANVAS_SIZE);
            let mut surface = SdlSurface::new(&mut self.canvas, &self.textures, offset, CANVAS_SIZE, Color::WHITE);
            if self.game.is_paused() {
                self.game.draw(&mut surface)?;
            } else {
                self.game.animate(&mut surface)?;
            }
            return Ok(());
        }

        let mut surface = SdlSurface::new(&mut self.canvas, &self.textures, IVec2::ZERO, WINDOW_SIZE, MENU_BACKGROUND);
        match screen {
            Screen::Splash => Sprite::with_image(0, 0, Asset::Splash.image()).draw(&mut surface)?,
            Screen::GameOver => Sprite::with_image(0, 0, Asset::GameOver.image()).draw(&mut surface)?,
            Screen::Menu => {
                surface.clear()?;
                write_lines(&mut surface, &["Menu Screen", "", "[1] Play Game", "[2] Instructions", "[Esc] Quit"])?;
            }
            Screen::Instructions => {
                surface.clear()?;
                write_lines(
                    &mut surface,
                    &[
                        "Instructions",
                        "",
                        "Arrow keys steer Pac-Man.",
                        "Eat every pill to win; touching a ghost loses.",
                        "[P] Pause   [R] Restart",
                        "",
                        "[B] Back",
                    ],
                )?;
            }
            Screen::PlayGame => {}
        }
        Ok(())
    }
}

/// Writes `lines` centred horizontally, starting a third of the way down.
fn write_lines(surface: &mut dyn Surface, lines: &[&str]) -> Result<()> {
    const LINE_HEIGHT: i32 = 20;
    let center = (WINDOW_SIZE / UVec2::new(2, 3)).as_ivec2();
    for (row, line) in lines.iter().enumerate() {
        surface.draw_text(line, center + IVec2::new(0, row as i32 * LINE_HEIGHT), Color::WHITE)?;
    }
    Ok(())
}
