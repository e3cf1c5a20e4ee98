use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::game::{Outcome, Snapshot, Status};
use crate::grid::{Direction, Pos};

const FOOD_SYMBOL: &str = "●";
const EMPTY_SYMBOL: &str = "·";

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

pub fn draw(frame: &mut Frame, snapshot: &Snapshot) {
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + counters
            Constraint::Min(0),    // Arena
        ])
        .split(frame.area());

    let header = format!(
        "SNEK    Length: {}    Cells left: {}",
        snapshot.snake.len(),
        snapshot.cells_left
    );
    frame.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let title = match snapshot.status {
        Status::Running => "Playing",
        Status::Paused => "Paused. Press P to continue",
        Status::GameOver => "Game over",
    };
    let block = Block::default().title(title).borders(Borders::ALL);
    let arena = Rect {
        width: snapshot
            .side
            .saturating_mul(CELL_WIDTH)
            .saturating_add(2)
            .min(layout[1].width),
        height: snapshot.side.saturating_add(2).min(layout[1].height),
        ..layout[1]
    };
    let inner_area = block.inner(arena);

    frame.render_widget(block, arena);
    frame.render_widget(snapshot, inner_area);

    if let Some(outcome) = snapshot.outcome {
        let message = match outcome {
            Outcome::Won => "YOU FILLED THE BOARD\nPress R to play again",
            Outcome::Lost => "GAME OVER\nPress R to play again",
        };
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().bold()),
            inner_area,
        );
    }
}

/// Box glyph joining a segment to the neighbours it links to.
fn link_glyph(a: Option<Direction>, b: Option<Direction>) -> &'static str {
    let has = |d: Direction| a == Some(d) || b == Some(d);
    match (
        has(Direction::North),
        has(Direction::East),
        has(Direction::South),
        has(Direction::West),
    ) {
        (true, false, true, false) => "┃",
        (false, true, false, true) => "━",
        (true, true, false, false) => "┗",
        (true, false, false, true) => "┛",
        (false, true, true, false) => "┏",
        (false, false, true, true) => "┓",
        (true, false, false, false) => "╹",
        (false, true, false, false) => "╺",
        (false, false, true, false) => "╻",
        (false, false, false, true) => "╸",
        _ => "■",
    }
}

fn cell_origin(area: Rect, pos: Pos) -> Option<(u16, u16)> {
    let x = area.x.checked_add(pos.x.checked_mul(CELL_WIDTH)?)?;
    let y = area.y.checked_add(pos.y)?;
    (x < area.right() && y < area.bottom()).then_some((x, y))
}

fn paint(buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: &str, color: Color) {
    if x >= area.right() || y >= area.bottom() {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol).set_fg(color);
    }
}

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..self.side {
            for x in 0..self.side {
                if let Some((cx, cy)) = cell_origin(area, Pos::new(x, y)) {
                    paint(buf, area, cx, cy, EMPTY_SYMBOL, Color::DarkGray);
                }
            }
        }

        for (i, pos) in self.snake.segments().enumerate() {
            let Some((x, y)) = cell_origin(area, pos) else {
                continue;
            };

            let (ahead, behind) = self.snake.neighbors(i);
            let link = |other: Option<Pos>| other.and_then(|o| Direction::toward(pos, o, self.side));
            let (a, b) = (link(ahead), link(behind));

            let color = if i == 0 { Color::Yellow } else { Color::Green };
            paint(buf, area, x, y, link_glyph(a, b), color);
            if a == Some(Direction::East) || b == Some(Direction::East) {
                paint(buf, area, x.saturating_add(1), y, "━", color);
            }
        }

        if let Some((x, y)) = cell_origin(area, self.food) {
            paint(buf, area, x, y, FOOD_SYMBOL, Color::LightRed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::game::Game;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_link_glyphs() {
        assert_eq!(link_glyph(Some(Direction::East), Some(Direction::West)), "━");
        assert_eq!(link_glyph(Some(Direction::South), Some(Direction::North)), "┃");
        assert_eq!(link_glyph(Some(Direction::North), Some(Direction::East)), "┗");
        assert_eq!(link_glyph(None, Some(Direction::West)), "╸");
        assert_eq!(link_glyph(None, None), "■");
    }

    #[test]
    fn test_renders_snake_and_food() {
        let game = Game::new(&Config::default(), StdRng::seed_from_u64(9));
        let mut snapshot = game.snapshot();
        snapshot.food = Pos::new(10, 10);
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);

        (&snapshot).render(area, &mut buf);

        // Head at (3, 1) links west to the body
        assert_eq!(buf[(6, 1)].symbol(), "╸");
        assert_eq!(buf[(4, 1)].symbol(), "━");
        assert_eq!(buf[(5, 1)].symbol(), "━");
        // Tail tip at (1, 1) links east only
        assert_eq!(buf[(2, 1)].symbol(), "╺");
        assert_eq!(buf[(0, 0)].symbol(), EMPTY_SYMBOL);

        assert_eq!(buf[(20, 10)].symbol(), FOOD_SYMBOL);
    }

    #[test]
    fn test_clips_to_area() {
        let game = Game::new(&Config::default(), StdRng::seed_from_u64(9));
        let mut snapshot = game.snapshot();
        snapshot.food = Pos::new(10, 10);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));

        (&snapshot).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), EMPTY_SYMBOL);
        assert_eq!(buf[(5, 1)].symbol(), " ");
        assert_eq!(buf[(0, 2)].symbol(), " ");
    }
}
