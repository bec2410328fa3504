use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Connection};

/// Render the bottom status bar: keybind hints left, connection state and
/// clock right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let left = vec![
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw(" Refresh  "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw(" Help  "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ];

    let (conn_text, conn_color) = connection_indicator(app);
    let clock = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

    // Left-aligned hints and right-aligned indicator+clock on one line;
    // ratatui has no split alignment in a single Paragraph, so pad the
    // middle by display width.
    let left_width: usize = left.iter().map(|s| s.content.width()).sum();
    let right_width = conn_text.width() + 2 + clock.width();
    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(left_width + right_width).max(1);

    let mut spans = left;
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(
        conn_text,
        Style::default().fg(conn_color).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw("  "));
    spans.push(Span::raw(clock));

    let bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(bar, area);
}

fn connection_indicator(app: &App) -> (&'static str, Color) {
    if app.offline {
        return ("DEMO", Color::Magenta);
    }
    match app.connection {
        Connection::Waiting => ("...", Color::Yellow),
        Connection::Live => ("LIVE", Color::Green),
        Connection::Lost => ("OFFLINE", Color::Red),
    }
}
