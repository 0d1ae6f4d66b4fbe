//! Monitoring engine: owns the monitor state and runs the polling loop.
//!
//! All state lives behind one lock. `start` spawns a loop only when idle and
//! tags it with a fresh generation; a loop keeps ticking while `running` is
//! set and its generation is still current, so a `stop` followed by `start`
//! retires the old loop instead of leaving two alive.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::Notify;
use tracing::{debug, error, info, warn};

use statuswatch_config::MonitorConfig;

use crate::alerts::{evaluate_alerts, AlertSink, LogSink};
use crate::error::MonitorError;
use crate::fetcher::{HttpStatusFetcher, StatusFetcher};
use crate::summary::StatusSummary;

/// Shortest interval the loop will sleep between ticks.
const MIN_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Result of a `start` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Monitoring was idle; a new polling loop was spawned.
    Started { interval: Duration },
    /// Monitoring was already running; only the interval changed.
    IntervalUpdated { previous: Duration, interval: Duration },
}

impl StartOutcome {
    /// The interval now in effect.
    pub fn interval(&self) -> Duration {
        match self {
            StartOutcome::Started { interval } => *interval,
            StartOutcome::IntervalUpdated { interval, .. } => *interval,
        }
    }
}

/// Point-in-time copy of the monitor state.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSnapshot {
    pub running: bool,
    pub interval: Duration,
    pub generation: u64,
    /// Loop-driven polls recorded since process start.
    pub ticks: u64,
    pub last_summary: Option<StatusSummary>,
}

#[derive(Debug)]
struct MonitorState {
    interval: Duration,
    running: bool,
    generation: u64,
    ticks: u64,
    /// Sequence number handed to the most recently started poll.
    polls_started: u64,
    /// Sequence number of the poll that produced `last_summary`.
    last_recorded: u64,
    last_summary: Option<StatusSummary>,
}

impl MonitorState {
    /// Store `summary` unless a poll started after `seq` was already stored.
    fn record(&mut self, seq: u64, summary: &StatusSummary) -> bool {
        if seq < self.last_recorded {
            return false;
        }
        self.last_recorded = seq;
        self.last_summary = Some(summary.clone());
        true
    }
}

struct EngineInner {
    fetcher: Arc<dyn StatusFetcher>,
    sink: Arc<dyn AlertSink>,
    retry_delay: Duration,
    state: Mutex<MonitorState>,
    wake: Notify,
    active_loops: AtomicUsize,
}

/// Periodic status monitor.
///
/// Cheap to clone; clones share the same state and loop.
#[derive(Clone)]
pub struct MonitorEngine {
    inner: Arc<EngineInner>,
}

impl MonitorEngine {
    /// Create an idle engine.
    pub fn new(
        fetcher: Arc<dyn StatusFetcher>,
        sink: Arc<dyn AlertSink>,
        config: &MonitorConfig,
    ) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                fetcher,
                sink,
                retry_delay: config.retry_delay(),
                state: Mutex::new(MonitorState {
                    interval: config.default_interval(),
                    running: false,
                    generation: 0,
                    ticks: 0,
                    polls_started: 0,
                    last_recorded: 0,
                    last_summary: None,
                }),
                wake: Notify::new(),
                active_loops: AtomicUsize::new(0),
            }),
        }
    }

    /// Engine polling `config.status_url` over HTTP and alerting to the log.
    pub fn from_config(config: &MonitorConfig) -> Result<Self, MonitorError> {
        let fetcher = HttpStatusFetcher::from_config(config)?;
        Ok(Self::new(Arc::new(fetcher), Arc::new(LogSink), config))
    }

    /// Poll now and cache the result. Never fails: a fetch error comes back
    /// as an `error` summary. Does not evaluate alerts or retry.
    ///
    /// The cache is left alone if a poll that started later has already
    /// been recorded; the caller still gets this poll's result.
    pub async fn check_now(&self) -> StatusSummary {
        let seq = self.inner.begin_poll();
        let summary = self.inner.poll().await;
        if !self.inner.state.lock().record(seq, &summary) {
            debug!(seq, "On-demand result older than cached summary, not cached");
        }
        summary
    }

    /// Begin monitoring. When already running only the interval changes,
    /// taking effect from the next sleep.
    pub fn start(&self, interval: Duration) -> StartOutcome {
        let interval = interval.max(MIN_TICK_INTERVAL);

        let generation = {
            let mut state = self.inner.state.lock();
            if state.running {
                let previous = std::mem::replace(&mut state.interval, interval);
                info!(
                    previous_secs = previous.as_secs(),
                    interval_secs = interval.as_secs(),
                    "Status monitoring already running, interval updated"
                );
                return StartOutcome::IntervalUpdated { previous, interval };
            }
            state.interval = interval;
            state.running = true;
            state.generation += 1;
            state.generation
        };

        info!(
            generation,
            interval_secs = interval.as_secs(),
            "Starting status monitoring"
        );
        tokio::spawn(Arc::clone(&self.inner).run_loop(generation));

        StartOutcome::Started { interval }
    }

    /// Request the loop to stop. An in-flight poll is allowed to finish.
    /// Returns whether monitoring was running.
    pub fn stop(&self) -> bool {
        let was_running = std::mem::replace(&mut self.inner.state.lock().running, false);
        self.inner.wake.notify_waiters();

        if was_running {
            info!("Stopping status monitoring");
        } else {
            debug!("Stop requested while idle");
        }
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.inner.state.lock().running
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.inner.state.lock().interval
    }

    /// Most recent summary from the loop or an on-demand check.
    pub fn last_summary(&self) -> Option<StatusSummary> {
        self.inner.state.lock().last_summary.clone()
    }

    pub fn snapshot(&self) -> MonitorSnapshot {
        let state = self.inner.state.lock();
        MonitorSnapshot {
            running: state.running,
            interval: state.interval,
            generation: state.generation,
            ticks: state.ticks,
            last_summary: state.last_summary.clone(),
        }
    }

    /// Number of polling loop tasks currently alive.
    pub fn active_loops(&self) -> usize {
        self.inner.active_loops.load(Ordering::SeqCst)
    }
}

impl EngineInner {
    fn begin_poll(&self) -> u64 {
        let mut state = self.state.lock();
        state.polls_started += 1;
        state.polls_started
    }

    async fn poll(&self) -> StatusSummary {
        match self.fetcher.fetch().await {
            Ok(summary) => {
                debug!(indicator = %summary.indicator, "Status check succeeded");
                summary
            }
            Err(e) => {
                warn!(error = %e, "Status check failed");
                StatusSummary::fetch_failed(&e)
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        let state = self.state.lock();
        state.running && state.generation == generation
    }

    async fn run_loop(self: Arc<Self>, generation: u64) {
        let _active = ActiveLoop::enter(&self.active_loops);
        debug!(generation, "Polling loop started");

        loop {
            if !self.is_current(generation) {
                break;
            }

            let seq = self.begin_poll();
            let summary = self.poll().await;

            let delay = {
                let mut state = self.state.lock();
                if state.generation != generation {
                    debug!(generation, "Discarding poll from superseded loop");
                    break;
                }
                if !state.record(seq, &summary) {
                    debug!(seq, "Tick result older than cached summary, not cached");
                }
                state.ticks += 1;
                if summary.is_error() {
                    self.retry_delay
                } else {
                    state.interval
                }
            };

            for alert in evaluate_alerts(&summary) {
                if let Err(e) = self.sink.send(&alert).await {
                    error!("Failed to send alert via {}: {}", self.sink.name(), e);
                }
            }

            let wake = self.wake.notified();
            tokio::pin!(wake);
            wake.as_mut().enable();

            if !self.is_current(generation) {
                break;
            }

            if summary.is_error() {
                debug!(retry_secs = delay.as_secs(), "Backing off after failed poll");
            }

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                _ = &mut wake => {
                    debug!(generation, "Polling loop woken early");
                }
            }
        }

        debug!(generation, "Polling loop exited");
    }
}

/// Counts a live loop for as long as it is held.
struct ActiveLoop<'a>(&'a AtomicUsize);

impl<'a> ActiveLoop<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for ActiveLoop<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
