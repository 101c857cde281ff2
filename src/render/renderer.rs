use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::canvas::{BoardCanvas, Glyph};
use crate::metrics::GameMetrics;

/// Rows taken by the stats header
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the controls footer
pub const FOOTER_HEIGHT: u16 = 3;
/// Terminal columns used per board cell
pub const CELL_WIDTH: u16 = 2;
/// Rows and columns taken by the board border, both sides together
pub const BORDER: u16 = 2;

pub struct TerminalRenderer;

impl TerminalRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, canvas: &BoardCanvas, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Board
                Constraint::Length(FOOTER_HEIGHT), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(canvas, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = Self::centered(chunks[1], canvas);

        if canvas.is_game_over() {
            let game_over = self.render_game_over(canvas, metrics);
            frame.render_widget(game_over, board_area);
        } else {
            let grid = self.render_grid(canvas);
            frame.render_widget(grid, board_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    /// Board-sized rectangle centered in `area`
    fn centered(area: Rect, canvas: &BoardCanvas) -> Rect {
        let width = (canvas.columns() as u16)
            .saturating_mul(CELL_WIDTH)
            .saturating_add(BORDER);
        let height = (canvas.rows() as u16).saturating_add(BORDER);

        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);
        board
    }

    fn render_grid(&self, canvas: &BoardCanvas) -> Paragraph<'_> {
        let lines: Vec<Line> = canvas
            .rows_iter()
            .map(|row| row.iter().map(|glyph| Self::glyph_span(*glyph)).collect::<Line>())
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn glyph_span(glyph: Glyph) -> Span<'static> {
        match glyph {
            Glyph::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Glyph::Body => Span::styled("■ ", Style::default().fg(Color::LightGreen)),
            Glyph::Food => Span::styled(
                "● ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Glyph::Empty => Span::styled("  ", Style::default()),
        }
    }

    fn render_stats(&self, canvas: &BoardCanvas, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score : ", Style::default().fg(Color::Yellow)),
            Span::styled(
                canvas.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.max(canvas.score()).to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.0}ms", metrics.speed_ms),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_game_over(&self, canvas: &BoardCanvas, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "Game Over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    canvas.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games played: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    metrics.games_played.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(": reset  ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(": quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red)),
            )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to reset | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
