//! Terminal Snake runner (default binary).
//!
//! Settings menu, then the game, then a game-over screen, until the player
//! quits. Everything is drawn through one [`Screen`] handle; keys arrive on
//! its background reader and are drained once per frame.

use std::env;
use std::fs::File;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use tui_snake::core::{SnakeConfig, SnakeGame};
use tui_snake::input::{handle_key, resolve_direction, should_quit};
use tui_snake::term::{GameMenu, MenuEvent, MenuSettings, Screen, SnakeView};
use tui_snake::types::{
    Direction, GameAction, Pos, Speed, CELL_COLUMNS, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

/// Frame budget while no game is running.
const MENU_FRAME: Duration = Duration::from_millis(30);

#[derive(Parser, Debug)]
#[command(name = "tui-snake", about = "Snake in the terminal")]
#[command(version)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(4..=200))]
    width: u16,

    /// Board height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(4..=200))]
    height: u16,

    /// Speed preset: slow | medium | fast | sonic
    #[arg(long, default_value = "medium", value_parser = parse_speed)]
    speed: Speed,

    /// Start direction: left | right | up | down
    #[arg(long, default_value = "left", value_parser = parse_direction)]
    direction: Direction,

    /// Seed for fruit placement (defaults to the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Do not draw the board border
    #[arg(long)]
    no_border: bool,

    /// Play without fruit
    #[arg(long)]
    no_fruit: bool,

    /// Let the snake leave the board
    #[arg(long)]
    no_bounds: bool,

    /// Grow on every step
    #[arg(long)]
    grow: bool,

    /// Do not erase the screen between frames
    #[arg(long)]
    no_clear: bool,

    /// Start playing immediately with the given settings
    #[arg(long)]
    skip_menu: bool,
}

impl Args {
    fn settings(&self) -> MenuSettings {
        MenuSettings {
            width: self.width,
            height: self.height,
            speed: self.speed,
            direction: self.direction,
        }
    }

    fn config(&self, settings: MenuSettings) -> SnakeConfig {
        SnakeConfig {
            check_bounds: !self.no_bounds,
            draw_border: !self.no_border,
            spawn_fruit: !self.no_fruit,
            grow_every_frame: self.grow,
            clear_screen: !self.no_clear,
            ..SnakeConfig::new(settings.width, settings.height)
                .with_start_direction(settings.direction)
        }
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn parse_speed(s: &str) -> Result<Speed, String> {
    Speed::from_str(s).ok_or_else(|| format!("unknown speed '{s}'"))
}

fn parse_direction(s: &str) -> Result<Direction, String> {
    Direction::from_str(s).ok_or_else(|| format!("unknown direction '{s}'"))
}

/// How a game ended.
enum Session {
    Quit,
    GameOver,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let mut screen = Screen::create()?;
    screen.start_input_reading();

    let result = run(&mut screen, &args);

    // Always try to restore terminal state.
    let _ = screen.restore();
    info!("exiting");
    result
}

/// Log to a file only; stdout belongs to the game.
fn init_logging() -> Result<()> {
    let Ok(path) = env::var("SNAKE_LOG_PATH") else {
        return Ok(());
    };
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_env("SNAKE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(screen: &mut Screen, args: &Args) -> Result<()> {
    let mut settings = args.settings();

    loop {
        if !args.skip_menu {
            match run_menu(screen, settings)? {
                Some(chosen) => settings = chosen,
                None => return Ok(()),
            }
        }

        match play(screen, args, settings)? {
            Session::Quit => return Ok(()),
            Session::GameOver => {
                if !wait_for_confirm(screen)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Show the settings menu. `None` means the player quit.
fn run_menu(screen: &mut Screen, settings: MenuSettings) -> Result<Option<MenuSettings>> {
    let mut menu = GameMenu::settings(settings);
    let mut last_frame = Instant::now();

    loop {
        match menu.update(screen) {
            MenuEvent::Start => return Ok(Some(menu.values(settings))),
            MenuEvent::Quit => return Ok(None),
            MenuEvent::None => {}
        }
        menu.draw(screen);
        last_frame = screen.swap(MENU_FRAME, last_frame)?;
    }
}

fn play(screen: &mut Screen, args: &Args, settings: MenuSettings) -> Result<Session> {
    let config = args.config(settings);
    let seed = args.seed();
    let mut game = SnakeGame::new(config, seed);

    screen.refresh_size();
    let view = SnakeView::new(board_origin(screen.size(), &config));
    let frame_budget = Duration::from_millis(settings.speed.frame_ms());

    info!(
        width = config.width,
        height = config.height,
        speed = settings.speed.as_str(),
        seed,
        "game started"
    );

    // Leftovers from the menu must not stay on screen when frames are layered.
    screen.clear();
    let mut paused = false;
    let mut last_frame = Instant::now();

    loop {
        let keys = screen.take_input();
        if keys.iter().any(|&k| should_quit(k)) {
            info!(score = game.score(), steps = game.steps(), "quit during game");
            return Ok(Session::Quit);
        }
        for &key in &keys {
            if handle_key(key) == Some(GameAction::Pause) {
                paused = !paused;
                debug!(paused, "pause toggled");
            }
        }

        if !paused {
            let direction = resolve_direction(game.heading(), &keys);
            if game.step(direction).is_dead() {
                view.draw(&game, screen);
                view.draw_overlay(&game, screen, &format!(" GAME OVER  Score: {} ", game.score()));
                screen.swap(frame_budget, last_frame)?;
                info!(score = game.score(), steps = game.steps(), "game over");
                return Ok(Session::GameOver);
            }
        }

        view.draw(&game, screen);
        if paused {
            view.draw_overlay(&game, screen, " PAUSED ");
        }
        last_frame = screen.swap(frame_budget, last_frame)?;
    }
}

/// Hold the game-over screen. Returns false if the player quit.
fn wait_for_confirm(screen: &mut Screen) -> Result<bool> {
    let mut last_frame = Instant::now();
    loop {
        for key in screen.take_input() {
            if should_quit(key) {
                return Ok(false);
            }
            if handle_key(key) == Some(GameAction::Confirm) {
                return Ok(true);
            }
        }
        last_frame = screen.swap(MENU_FRAME, last_frame)?;
    }
}

/// Top-left corner that centres the board (border and score line included).
fn board_origin(screen_size: Pos, config: &SnakeConfig) -> Pos {
    let frame_w = i32::from(config.width) * CELL_COLUMNS + 2;
    let frame_h = i32::from(config.height) + 3;
    Pos::new(
        ((screen_size.x - frame_w) / 2).max(0),
        ((screen_size.y - frame_h) / 2).max(0),
    )
}
