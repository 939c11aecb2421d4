use std::collections::HashMap;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameView, Grid, Position};
use crate::metrics::GameMetrics;

const BODY_COLORS: [Color; 2] = [Color::Green, Color::LightGreen];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, grid: &Grid, view: &GameView, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(view, metrics), chunks[0]);

        if view.game_over {
            frame.render_widget(self.render_game_over(view), chunks[1]);
        } else {
            frame.render_widget(self.render_grid(grid, view), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_grid(&self, grid: &Grid, view: &GameView) -> Paragraph<'static> {
        Paragraph::new(grid_lines(grid, view))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, view: &GameView, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Speed: ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{:.1} fps", view.fps), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, view: &GameView) -> Paragraph<'static> {
        let headline = if view.grid_full { "BOARD FULL" } else { "GAME OVER" };
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    view.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
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

/// One styled line per grid row: head, alternating body shades, target, empty
fn grid_lines(grid: &Grid, view: &GameView) -> Vec<Line<'static>> {
    // Lowest index wins so a segment under the head still draws as the head
    let mut segments: HashMap<Position, usize> = HashMap::with_capacity(view.body.len());
    for (index, &pos) in view.body.iter().enumerate().rev() {
        segments.insert(pos, index);
    }

    (0..grid.rows as i32)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..grid.cols as i32)
                .map(|col| cell_span(Position::new(row, col), &segments, view.target))
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn cell_span(pos: Position, segments: &HashMap<Position, usize>, target: Position) -> Span<'static> {
    match segments.get(&pos).copied() {
        Some(0) => Span::styled(
            "■ ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Some(index) => Span::styled("□ ", Style::default().fg(BODY_COLORS[index % 2])),
        None if pos == target => Span::styled(
            "O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
    }
}
