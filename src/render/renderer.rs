use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Grid, Point};

/// Terminal columns per grid cell; keeps cells roughly square
const CELL_WIDTH: u16 = 2;

const BACKGROUND: Color = Color::Rgb(240, 248, 255);

/// What occupies a cell, in drawing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Food,
    Empty,
}

impl CellKind {
    pub fn classify(state: &GameState, point: Point) -> Self {
        if point == state.snake.head {
            CellKind::Head
        } else if state.snake.tail.contains(&point) {
            CellKind::Body
        } else if point == state.food {
            CellKind::Food
        } else {
            CellKind::Empty
        }
    }
}

/// Screen rectangle for the framed board, centered in `area` and
/// clamped to it when the terminal is too small.
pub fn board_area(area: Rect, grid: Grid) -> Rect {
    let size = grid.size.max(0) as u16;
    let width = (size * CELL_WIDTH + 2).min(area.width);
    let height = (size + 2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub struct Renderer {
    food_glyph: Option<char>,
}

impl Renderer {
    pub fn new() -> Self {
        Self { food_glyph: None }
    }

    /// Draw food as `glyph` instead of a green square
    pub fn with_food_glyph(glyph: char) -> Self {
        Self {
            food_glyph: Some(glyph),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let board = board_area(chunks[0], state.grid);
        frame.render_widget(self.render_grid(state), board);
        frame.render_widget(self.render_controls(), chunks[1]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        let lines: Vec<Line> = (1..=state.grid.size)
            .map(|y| {
                let spans: Vec<Span> = (1..=state.grid.size)
                    .map(|x| self.cell(CellKind::classify(state, Point::new(x, y))))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .border_style(Style::default().fg(Color::Black).bg(BACKGROUND))
                .title(" Snake "),
        )
    }

    fn cell(&self, kind: CellKind) -> Span<'static> {
        match kind {
            CellKind::Head => Span::styled("  ", Style::default().bg(Color::Red)),
            CellKind::Body => Span::styled("  ", Style::default().bg(Color::Blue)),
            CellKind::Food => match self.food_glyph {
                // Emoji already take two columns
                Some(glyph) if glyph.is_ascii() => Span::styled(
                    format!("{glyph} "),
                    Style::default().fg(Color::Green).bg(BACKGROUND),
                ),
                Some(glyph) => Span::styled(glyph.to_string(), Style::default().bg(BACKGROUND)),
                None => Span::styled("  ", Style::default().bg(Color::Green)),
            },
            CellKind::Empty => {
                Span::styled("· ", Style::default().fg(Color::DarkGray).bg(BACKGROUND))
            }
        }
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Snake};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn sample_state() -> GameState {
        let snake = Snake::new(
            Point::new(3, 3),
            vec![Point::new(3, 4), Point::new(3, 5)],
            Direction::Up,
        );
        GameState::new(snake, Point::new(6, 2), Grid::default())
    }

    #[test]
    fn test_classify_cells() {
        let state = sample_state();
        assert_eq!(CellKind::classify(&state, Point::new(3, 3)), CellKind::Head);
        assert_eq!(CellKind::classify(&state, Point::new(3, 5)), CellKind::Body);
        assert_eq!(CellKind::classify(&state, Point::new(6, 2)), CellKind::Food);
        assert_eq!(CellKind::classify(&state, Point::new(1, 1)), CellKind::Empty);
    }

    #[test]
    fn test_head_drawn_over_food() {
        let mut state = sample_state();
        state.food = state.snake.head;
        assert_eq!(CellKind::classify(&state, state.food), CellKind::Head);
    }

    #[test]
    fn test_board_area_centered() {
        let area = Rect::new(0, 0, 40, 20);
        let board = board_area(area, Grid::default());
        assert_eq!(board, Rect::new(9, 4, 22, 12));
    }

    #[test]
    fn test_board_area_clamped() {
        let area = Rect::new(0, 0, 10, 5);
        let board = board_area(area, Grid::default());
        assert_eq!(board, Rect::new(0, 0, 10, 5));
    }

    fn draw(renderer: &Renderer) -> Buffer {
        let backend = TestBackend::new(40, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = sample_state();

        terminal
            .draw(|frame| renderer.render(frame, &state))
            .unwrap();

        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_render_paints_head() {
        // Board spans rows 0..19, so it sits at (9, 3); inner area starts at (10, 4)
        let buffer = draw(&Renderer::new());
        assert_eq!(buffer[(14, 6)].bg, Color::Red);
        assert_eq!(buffer[(14, 7)].bg, Color::Blue);
        assert_eq!(buffer[(20, 5)].bg, Color::Green);
    }

    #[test]
    fn test_render_ascii_food_glyph() {
        let buffer = draw(&Renderer::with_food_glyph('@'));

        // Food (6, 2) starts at column 20, row 5
        assert_eq!(buffer[(20, 5)].symbol(), "@");
        assert_eq!(buffer[(20, 5)].fg, Color::Green);
        assert_eq!(buffer[(21, 5)].symbol(), " ");
        // Cell (7, 2) and the right border stay in place
        assert_eq!(buffer[(22, 5)].symbol(), "·");
        assert_eq!(buffer[(30, 5)].symbol(), "│");
    }

    #[test]
    fn test_render_emoji_food_glyph() {
        let buffer = draw(&Renderer::with_food_glyph('🍕'));

        assert_eq!(buffer[(20, 5)].symbol(), "🍕");
        assert_eq!(buffer[(22, 5)].symbol(), "·");
        assert_eq!(buffer[(30, 5)].symbol(), "│");
    }
}
