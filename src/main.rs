use std::io::{self, Stdout};
use std::thread;
use std::time::Instant;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::ExecutableCommand;
use tracing::info;

use pacman_duel::config::Settings;
use pacman_duel::constants::DEFAULT_LAYOUT;
use pacman_duel::error::GameResult;
use pacman_duel::game::Game;
use pacman_duel::logging;
use pacman_duel::render::Renderer;

fn main() -> GameResult<()> {
    let settings = Settings::from_env();
    logging::init(&settings)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(SetTitle("Pacman"))?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, settings: &Settings) -> GameResult<()> {
    let mut game = Game::new(&DEFAULT_LAYOUT, rand::thread_rng())?;
    let mut renderer = Renderer::new(game.maze().get_width(), game.maze().get_height());
    let tick = settings.tick();
    let frame_time = settings.frame_time();
    let mut last_tick = Instant::now();
    info!(?tick, ?frame_time, "Starting game loop");

    loop {
        let frame_start = Instant::now();
        while event::poll(std::time::Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    continue;
                }
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                    KeyCode::Char(c) => {
                        game.handle_key(c);
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            game.tick();
        }
        renderer.render(stdout, &game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
