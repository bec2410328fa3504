use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::poller::PollUpdate;
use crate::state::{self, DashboardState};

/// What the status bar shows about the metrics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connection {
    /// No poll has completed yet.
    Waiting,
    /// The most recent poll succeeded.
    Live,
    /// The most recent poll failed; displayed data may be stale.
    Lost,
}

pub struct App {
    pub metrics: DashboardState,
    pub connection: Connection,
    pub last_update: Option<DateTime<Utc>>,
    pub last_error: Option<String>,

    pub show_help: bool,
    pub should_quit: bool,
    pub offline: bool,

    refresh_requested: bool,
}

impl App {
    pub fn new(offline: bool) -> Self {
        Self {
            metrics: if offline {
                state::demo_state()
            } else {
                DashboardState::default()
            },
            connection: Connection::Waiting,
            last_update: None,
            last_error: None,
            show_help: false,
            should_quit: false,
            offline,
            refresh_requested: false,
        }
    }

    /// Fold one poll outcome into the app. Failures only move the
    /// connection indicator; the metrics themselves stay as they were.
    pub fn apply_update(&mut self, update: PollUpdate) {
        match update {
            PollUpdate::Snapshot(snapshot) => {
                self.metrics = state::merge_snapshot(&self.metrics, snapshot);
                self.connection = Connection::Live;
                self.last_update = Some(Utc::now());
                self.last_error = None;
            }
            PollUpdate::Failed(err) => {
                self.connection = Connection::Lost;
                self.last_error = Some(err);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Help modal intercepts ? and Esc.
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => self.refresh_requested = true,
            _ => {}
        }
    }

    /// Consume a pending `r` keypress; the main loop forwards it to the
    /// poller.
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.refresh_requested)
    }
}
