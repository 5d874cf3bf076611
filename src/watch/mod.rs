//! Watch loop that rebuilds the championship whenever the export changes
//!
//! ```text
//! poll ──► changed? ──► read ──► parse ──► publish Arc<Championship>
//!   ▲          │ no                                  │
//!   └──────────┴─────────────────────────────────────┘
//! ```
//!
//! Each cycle runs to completion before the next poll, so two rebuilds never
//! interleave. A change that lands during a rebuild is seen on the next tick.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::Championship;
use crate::ingest::CockpitXpParser;

mod source;

pub use source::{FileSource, ResultSource};

/// Consecutive failed cycles before the loop gives up
pub const MAX_CONSECUTIVE_ERRORS: u32 = 10;

/// Handles returned by [`Watcher::spawn`]
pub struct WatchChannels {
    /// Latest rebuilt championship, `None` until the first successful parse
    pub championships: watch::Receiver<Option<Arc<Championship>>>,
    /// Cancellation token for graceful shutdown
    pub cancel: CancellationToken,
    /// The watch loop task
    pub handle: JoinHandle<()>,
}

impl WatchChannels {
    /// Stream of rebuilt championships, starting with the current one if any.
    ///
    /// The stream ends once the watch loop stops.
    pub fn updates(&self) -> impl Stream<Item = Arc<Championship>> + use<> {
        WatchStream::new(self.championships.clone()).filter_map(|championship| championship)
    }
}

/// Spawns and manages the watch loop
pub struct Watcher;

impl Watcher {
    /// Spawn the watch loop for `source`.
    ///
    /// The first poll happens immediately.
    pub fn spawn<S>(source: S, parser: CockpitXpParser, poll_interval: Duration) -> WatchChannels
    where
        S: ResultSource,
    {
        let (tx, rx) = watch::channel(None);
        let cancel = CancellationToken::new();
        let cancel_loop = cancel.clone();

        let handle = tokio::spawn(async move {
            Self::watch_task(source, parser, poll_interval, tx, cancel_loop).await;
        });

        WatchChannels { championships: rx, cancel, handle }
    }

    async fn watch_task<S>(
        mut source: S,
        parser: CockpitXpParser,
        poll_interval: Duration,
        tx: watch::Sender<Option<Arc<Championship>>>,
        cancel: CancellationToken,
    ) where
        S: ResultSource,
    {
        info!(source = %source.describe(), interval = ?poll_interval, "Watch loop started");
        let mut ticker = interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycles = 0u64;
        let mut error_count = 0u32;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Watch loop cancelled");
                    break;
                }
                _ = ticker.tick() => {}
            }

            match Self::cycle(&mut source, &parser).await {
                Ok(Some(championship)) => {
                    cycles += 1;
                    error_count = 0;
                    info!(
                        cycle = cycles,
                        events = championship.events().len(),
                        drivers = championship.drivers().len(),
                        "Championship rebuilt"
                    );
                    if tx.send(Some(Arc::new(championship))).is_err() {
                        debug!("Championship receiver dropped, shutting down");
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    error_count += 1;
                    warn!(error = %e, attempt = error_count, "Rebuild failed");
                    if error_count >= MAX_CONSECUTIVE_ERRORS {
                        error!("Too many consecutive errors, stopping watch loop");
                        break;
                    }
                }
            }
        }

        info!(cycles, "Watch loop stopped");
    }

    async fn cycle<S>(source: &mut S, parser: &CockpitXpParser) -> crate::Result<Option<Championship>>
    where
        S: ResultSource,
    {
        if !source.changed().await? {
            return Ok(None);
        }

        info!(source = %source.describe(), "Export changed, reading new results");
        let text = source.read().await?;
        parser.parse_str(&text).map(Some)
    }
}
