//! Periodic metrics polling on an owned background thread.
//!
//! The `Poller` is the only place that talks to the network. It fetches once
//! immediately, then once per tick, and sends every outcome over a flume
//! channel for the render loop to drain. Dropping the `Poller` signals the
//! thread and joins it, so the timer is cancelled exactly once and nothing
//! leaks past teardown.

use std::thread;
use std::time::Duration;

use gd_api_types::MetricsSnapshot;

use crate::api_client::MetricsClient;

/// Fixed poll period matching the metrics server's refresh cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Outcome of one poll tick.
#[derive(Debug, Clone)]
pub enum PollUpdate {
    Snapshot(MetricsSnapshot),
    /// The tick failed (transport, HTTP status, or decode). Carries the
    /// error text for the status bar; display state stays untouched.
    Failed(String),
}

enum Control {
    Refresh,
    Stop,
}

/// Handle owning the poll thread and its channels.
pub struct Poller {
    updates: flume::Receiver<PollUpdate>,
    control: flume::Sender<Control>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Poller {
    /// Start polling. The first fetch happens immediately, before the first
    /// interval elapses.
    pub fn spawn(client: MetricsClient, interval: Duration) -> Self {
        let (update_tx, update_rx) = flume::unbounded();
        let (control_tx, control_rx) = flume::unbounded();
        let handle = thread::spawn(move || poll_loop(client, interval, update_tx, control_rx));
        Self {
            updates: update_rx,
            control: control_tx,
            handle: Some(handle),
        }
    }

    /// Receiver the UI loop drains with `try_recv` before each draw.
    pub fn updates(&self) -> &flume::Receiver<PollUpdate> {
        &self.updates
    }

    /// Wake the poll loop for an immediate out-of-band fetch.
    pub fn refresh_now(&self) {
        let _ = self.control.send(Control::Refresh);
    }

    /// Explicit teardown; identical to dropping the poller.
    pub fn stop(self) {}
}

impl Drop for Poller {
    fn drop(&mut self) {
        let _ = self.control.send(Control::Stop);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn poll_loop(
    client: MetricsClient,
    interval: Duration,
    updates: flume::Sender<PollUpdate>,
    control: flume::Receiver<Control>,
) {
    loop {
        let update = match client.fetch_metrics() {
            Ok(snapshot) => PollUpdate::Snapshot(snapshot),
            Err(err) => {
                tracing::warn!(error = %err, url = client.url(), "metrics fetch failed");
                PollUpdate::Failed(err.to_string())
            }
        };
        if updates.send(update).is_err() {
            // UI is gone.
            break;
        }
        match control.recv_timeout(interval) {
            Ok(Control::Refresh) => {}
            Ok(Control::Stop) | Err(flume::RecvTimeoutError::Disconnected) => break,
            Err(flume::RecvTimeoutError::Timeout) => {}
        }
    }
}
