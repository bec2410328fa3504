use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Peers currently registered with the coordinator.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Peers ");

    if app.metrics.active_peers.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No active peers.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .metrics
        .active_peers
        .iter()
        .map(|peer| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    " @ ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(peer.as_str()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
