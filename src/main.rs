mod config;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod turns;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::prelude::*;
use simplelog::{LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::game::Game;

fn main() -> Result<(), io::Error> {
    let config = Config::parse();

    // Set up logging before anything else
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(&config.log_file)?,
    )
    .expect("Failed to initialize logger");

    info!(
        "Starting snekgrid on a {}x{} grid at {} ticks per second",
        config.side, config.side, config.fps
    );

    let rng = match config.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&config, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, config.tick_rate());
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting at length {}", game.snake().len());
    result
}

/// Draws every frame and ticks the game once per `tick_rate` while it runs.
fn run<B: Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    game: &mut Game<R>,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| render::draw(f, &game.snapshot()))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = input::command_for(key) {
                    if let ControlFlow::Break(()) = input::dispatch(game, command) {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if !game.is_paused() && !game.is_over() {
                game.tick();
            }
            last_tick = Instant::now();
        }
    }
}
