use std::ops::ControlFlow;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

use crate::game::Game;
use crate::grid::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Restart,
    /// Debug key: grow on the next tick without eating
    Grow,
    Quit,
}

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Command::Turn(Direction::North)),
        KeyCode::Down | KeyCode::Char('s') => Some(Command::Turn(Direction::South)),
        KeyCode::Left | KeyCode::Char('a') => Some(Command::Turn(Direction::West)),
        KeyCode::Right | KeyCode::Char('d') => Some(Command::Turn(Direction::East)),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Command::TogglePause),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('g') => Some(Command::Grow),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Hands a command to the game. `Break` means the player wants out.
pub fn dispatch<R: Rng>(game: &mut Game<R>, command: Command) -> ControlFlow<()> {
    match command {
        Command::Turn(dir) => game.queue_turn(dir),
        Command::TogglePause => game.toggle_pause(),
        Command::Restart => game.request_restart(),
        Command::Grow => game.force_grow(),
        Command::Quit => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
