// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic scan scheduling
//!
//! Drives the dispatcher on a coarse fixed-period timer. The timer fires
//! far more often than notifications are wanted; the dispatcher's
//! firing-hour gate bounds how often a user is actually alerted, and
//! tolerates the process starting at an arbitrary time of day.

use crate::scan::Dispatcher;
use fw_adapters::{NotifyAdapter, RecordSource, SettingsSource};
use fw_core::Clock;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

/// Runs scan cycles on a fixed period until stopped
///
/// `start` and `stop` are both idempotent; starting while running
/// restarts cleanly without ever leaving two timer loops alive.
pub struct Scheduler<S, R, N, C> {
    dispatcher: Arc<Dispatcher<S, R, N, C>>,
    /// Shutdown handle of the running loop, if any
    running: Mutex<Option<watch::Sender<()>>>,
}

impl<S, R, N, C> Scheduler<S, R, N, C>
where
    S: SettingsSource,
    R: RecordSource,
    N: NotifyAdapter,
    C: Clock + 'static,
{
    pub fn new(dispatcher: Arc<Dispatcher<S, R, N, C>>) -> Self {
        Self {
            dispatcher,
            running: Mutex::new(None),
        }
    }

    /// Start periodic scanning, performing one scan immediately
    ///
    /// If a loop is already running it is stopped first; its in-flight
    /// scan (if any) completes, and the dispatcher's scan lock keeps the
    /// replacement from overlapping it.
    pub fn start(&self) {
        let mut slot = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(stop) = slot.take() {
            let _ = stop.send(());
        }

        let (stop_tx, mut stop_rx) = watch::channel(());
        let dispatcher = Arc::clone(&self.dispatcher);
        let interval = dispatcher.config().tick_interval;

        tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(interval_secs = interval.as_secs(), "reminder loop started");

            loop {
                tokio::select! {
                    _ = ticks.tick() => {
                        match dispatcher.scan().await {
                            Ok(report) => info!(
                                outcome = ?report.outcome,
                                due = report.due,
                                dispatched = report.dispatched,
                                duplicates = report.duplicates,
                                delivery_failures = report.delivery_failures,
                                "scan cycle finished"
                            ),
                            Err(e) => warn!(error = %e, "scan cycle aborted"),
                        }
                    }
                    _ = stop_rx.changed() => break,
                }
            }
            info!("reminder loop stopped");
        });

        *slot = Some(stop_tx);
    }

    /// Stop periodic scanning
    ///
    /// No further scans start after this returns; an in-flight scan is
    /// allowed to complete.
    pub fn stop(&self) {
        let mut slot = self.running.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(stop) = slot.take() {
            let _ = stop.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl<S, R, N, C> Drop for Scheduler<S, R, N, C> {
    fn drop(&mut self) {
        // Dropping the sender breaks the loop on its next select
        let _ = self.running.lock().map(|mut slot| slot.take());
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
