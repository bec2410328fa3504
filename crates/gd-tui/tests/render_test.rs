//! Render tests for the dashboard screen.
//!
//! Each test renders the full UI into a TestBackend buffer and asserts on
//! the textual content, so every panel the metrics page carries has a
//! verified terminal counterpart.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

// Include binary-crate modules via path for testing.
#[path = "../src/api_client.rs"]
mod api_client;
#[path = "../src/app.rs"]
mod app;
#[path = "../src/panels/mod.rs"]
mod panels;
#[path = "../src/poller.rs"]
mod poller;
#[path = "../src/projector.rs"]
mod projector;
#[path = "../src/state.rs"]
mod state;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

use app::App;
use poller::PollUpdate;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Standard terminal size for render tests: 120 cols x 40 rows.
const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a fresh App in offline/demo mode.
fn demo_app() -> App {
    App::new(true)
}

fn snapshot(body: &str) -> gd_api_types::MetricsSnapshot {
    serde_json::from_str(body).expect("valid snapshot json")
}

/// Render the full UI into a test backend and return the buffer content as a
/// single string (all rows concatenated with newlines).
fn render_to_string(app: &App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    buffer_to_string(&buf)
}

/// Convert a ratatui Buffer to a readable string (rows joined by newlines).
fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            let cell = &buf[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Assert that the rendered output contains the given substring.
fn assert_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected to find {:?} in rendered output.\nFull output:\n{}",
        needle,
        output
    );
}

fn assert_contains_all(output: &str, needles: &[&str]) {
    for needle in needles {
        assert_contains(output, needle);
    }
}

// ---------------------------------------------------------------------------
// Header + cards
// ---------------------------------------------------------------------------

#[test]
fn render_header_shows_titles() {
    let output = render_to_string(&demo_app());
    assert_contains(&output, "gradient-dash");
    assert_contains(&output, "Mini Gradient Dashboard");
}

#[test]
fn render_kpi_cards_show_titles() {
    let output = render_to_string(&demo_app());
    assert_contains_all(
        &output,
        &["Tasks Completed", "Last Consensus", "Active Peers"],
    );
}

#[test]
fn render_kpi_cards_show_demo_values() {
    let output = render_to_string(&demo_app());
    // Demo data: 12 tasks, 3 active peers, last consensus 4.
    assert_contains(&output, "12");
    assert_contains(&output, "3");
    assert_contains(&output, "4");
}

#[test]
fn render_last_consensus_tracks_final_history_element() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Snapshot(snapshot(
        r#"{"consensus_history": [5, 8]}"#,
    )));
    let output = render_to_string(&app);
    assert_contains(&output, "8");
}

// ---------------------------------------------------------------------------
// Consensus history
// ---------------------------------------------------------------------------

#[test]
fn render_history_badges_preserve_order_and_count() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Snapshot(snapshot(
        r#"{"consensus_history": [1, 2, 3]}"#,
    )));
    let output = render_to_string(&app);
    assert_contains(&output, "[1] [2] [3]");
}

#[test]
fn render_history_empty_state() {
    let app = App::new(false);
    let output = render_to_string(&app);
    assert_contains(&output, "No consensus rounds yet.");
}

#[test]
fn render_history_mixed_value_types() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Snapshot(snapshot(
        r#"{"consensus_history": [7, "tie", 0.5]}"#,
    )));
    let output = render_to_string(&app);
    assert_contains(&output, "[7] [tie] [0.5]");
}

// ---------------------------------------------------------------------------
// Peer reputation
// ---------------------------------------------------------------------------

#[test]
fn render_reputation_bars_show_peers_and_scores() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Snapshot(snapshot(
        r#"{"reputation": {"p1": 10.0, "p2": 20.0}}"#,
    )));
    let output = render_to_string(&app);
    assert_contains(&output, "Peer Reputation");
    assert_contains_all(&output, &["p1", "p2", "10", "20"]);
}

#[test]
fn render_reputation_empty_state_instead_of_chart() {
    let app = App::new(false);
    let output = render_to_string(&app);
    assert_contains(&output, "No reputation data yet.");
    // No bar glyphs when there is nothing to chart.
    assert!(
        !output.contains('\u{2588}'),
        "empty reputation must not render bars"
    );
}

// ---------------------------------------------------------------------------
// Peers panel
// ---------------------------------------------------------------------------

#[test]
fn render_peers_panel_lists_active_peers() {
    let output = render_to_string(&demo_app());
    assert_contains_all(&output, &["peer-alpha", "peer-bravo", "peer-charlie"]);
}

#[test]
fn render_peers_empty_state() {
    let app = App::new(false);
    let output = render_to_string(&app);
    assert_contains(&output, "No active peers.");
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

#[test]
fn render_status_bar_shows_keybind_hints() {
    let output = render_to_string(&demo_app());
    assert_contains_all(&output, &["Refresh", "Help", "Quit"]);
}

#[test]
fn render_status_bar_demo_indicator_in_offline_mode() {
    let output = render_to_string(&demo_app());
    assert_contains(&output, "DEMO");
}

#[test]
fn render_status_bar_waiting_indicator_before_first_poll() {
    let app = App::new(false);
    let output = render_to_string(&app);
    assert_contains(&output, "...");
}

#[test]
fn render_status_bar_live_after_successful_poll() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Snapshot(snapshot(r#"{"tasks_completed": 1}"#)));
    let output = render_to_string(&app);
    assert_contains(&output, "LIVE");
}

#[test]
fn render_status_bar_offline_after_failed_poll() {
    let mut app = App::new(false);
    app.apply_update(PollUpdate::Failed("connection refused".to_string()));
    let output = render_to_string(&app);
    assert_contains(&output, "OFFLINE");
}

// ---------------------------------------------------------------------------
// Help modal
// ---------------------------------------------------------------------------

#[test]
fn render_help_modal_overlay() {
    let mut app = demo_app();
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&app);
    assert_contains(&output, "Keybindings");
    assert_contains_all(
        &output,
        &["Refresh metrics now", "Toggle this help", "Close help", "Quit"],
    );
}

// ---------------------------------------------------------------------------
// Full render cycle (no panics)
// ---------------------------------------------------------------------------

#[test]
fn render_at_minimum_size() {
    // Ensure rendering works at a small terminal size (80x24).
    let app = demo_app();
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}

#[test]
fn render_at_wide_size() {
    // Ensure rendering works at a very wide terminal (200x50).
    let app = demo_app();
    let backend = TestBackend::new(200, 50);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, &app)).unwrap();
}

#[test]
fn render_zero_valued_state_no_panic() {
    let app = App::new(false);
    let output = render_to_string(&app);
    assert!(!output.is_empty());
    // Counter card shows the zero default.
    assert_contains(&output, "0");
}
