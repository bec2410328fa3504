use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::projector;

/// Peer reputation as a bar chart, one bar per peer.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Peer Reputation ");

    let entries = projector::reputation_entries(&app.metrics);
    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No reputation data yet.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = entries
        .iter()
        .map(|entry| {
            Bar::default()
                .label(Line::from(entry.peer.clone()))
                .value(entry.score.max(0.0).round() as u64)
                .text_value(format!("{}", entry.score))
        })
        .collect();

    // Split the width evenly; clamp so labels stay legible and a crowded
    // swarm doesn't collapse the bars to nothing.
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / entries.len().max(1) as u16)
        .saturating_sub(1)
        .clamp(3, 12);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(chart, area);
}
