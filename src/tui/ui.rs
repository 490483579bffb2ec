use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::app::View;
use crate::config::{Config, Rgb};

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Main draw function
pub fn draw(frame: &mut Frame, view: &View, config: &Config) {
    let area = frame.area();
    let background = Style::default().bg(color(view.background));
    let palette = &config.palette;

    // Zen mode fills the terminal; windowed mode keeps a frame around it
    let inner = if view.zen {
        frame.render_widget(Block::default().style(background), area);
        area
    } else {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", config.window.title))
            .border_style(Style::default().fg(color(palette.helper_text)))
            .style(background);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Spacer
            Constraint::Length(1),      // Time
            Constraint::Length(1),      // Spacer
            Constraint::Length(1),      // Progress
            Constraint::Min(0),         // Rest
            Constraint::Length(1),      // Helper text
        ])
        .split(inner);

    let time = Paragraph::new(Span::styled(
        view.time_text.as_str(),
        Style::default()
            .fg(color(view.time_color))
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(background);
    frame.render_widget(time, chunks[1]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(color(palette.progress))
                .bg(color(view.background)),
        )
        .ratio(view.progress.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    frame.render_widget(gauge, centered_columns(60, chunks[3]));

    if view.show_help {
        let help = Paragraph::new(Span::styled(
            config.helper_text,
            Style::default().fg(color(palette.helper_text)),
        ))
        .alignment(Alignment::Center)
        .style(background);
        frame.render_widget(help, chunks[5]);
    }
}

/// Helper to take the middle `percent_x` of a row
fn centered_columns(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
