use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::panels;
use crate::widgets::{help_modal, status_bar};

/// Master render function: header, KPI cards, content panels, status bar.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // KPI cards
            Constraint::Min(0),    // content panels
            Constraint::Length(1), // status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    panels::summary::render(frame, app, chunks[1]);
    render_content(frame, app, chunks[2]);
    status_bar::render(frame, app, chunks[3]);

    if app.show_help {
        help_modal::render(frame);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "Mini Gradient Dashboard",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if app.offline {
        spans.push(Span::styled(
            "  (demo data)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .title(" gradient-dash ")
            .title_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[0]);

    panels::history::render(frame, app, left[0]);
    panels::peers::render(frame, app, left[1]);
    panels::reputation::render(frame, app, columns[1]);
}
