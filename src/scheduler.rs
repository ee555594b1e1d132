//! The refresh scheduler.
//!
//! A spawned task ticking at a fixed rate. Each tick reads the active
//! topic, resolves its renderer and publishes the rendered output to the
//! display sink. A tick that becomes due while a render is still in flight
//! is skipped (not queued); the schedule stays aligned to real time.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, warn};

use crate::render::{RenderedOutput, TopicRegistry};
use crate::state::TopicState;

/// The outbound capability: replace the visible content.
///
/// Returns `false` once the display surface is gone, which is the
/// scheduler's signal to stop.
pub trait DisplaySink: Send + 'static {
    fn publish(&self, output: RenderedOutput) -> bool;
}

/// The TUI's sink: a watch channel the draw loop follows.
impl DisplaySink for watch::Sender<RenderedOutput> {
    fn publish(&self, output: RenderedOutput) -> bool {
        self.send(output).is_ok()
    }
}

/// Drives the periodic re-fetch and re-render of the active topic.
pub struct RefreshScheduler {
    registry: TopicRegistry,
    state: TopicState,
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(registry: TopicRegistry, state: TopicState, period: Duration) -> Self {
        Self {
            registry,
            state,
            period,
        }
    }

    /// Spawn the refresh loop. It runs until the sink reports the surface
    /// gone or the returned handle is aborted at shutdown.
    pub fn spawn<S: DisplaySink>(self, sink: S) -> JoinHandle<()> {
        tokio::spawn(self.run(sink))
    }

    /// The refresh loop itself. The first tick fires immediately so the
    /// display is populated without waiting a full period.
    pub async fn run<S: DisplaySink>(mut self, sink: S) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let topic = self.state.get();
            let renderer = match self.registry.lookup_mut(topic) {
                Ok(renderer) => renderer,
                Err(e) => {
                    // Cannot happen through set_topic validation; tolerate
                    // it anyway rather than kill the schedule.
                    warn!(%topic, error = %e, "no renderer for active topic");
                    continue;
                }
            };

            match renderer.render().await {
                Ok(output) => {
                    if !sink.publish(output) {
                        debug!("display surface gone, stopping refresh loop");
                        break;
                    }
                }
                Err(e) => {
                    // A renderer fault is contained at the tick boundary.
                    error!(%topic, error = %e, "render failed, keeping previous content");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_sender_sink() {
        let (tx, rx) = watch::channel(RenderedOutput::starting());
        assert!(tx.publish(RenderedOutput {
            title: "t".to_string(),
            body: "b".to_string(),
            stale: false,
        }));
        assert_eq!(rx.borrow().title, "t");

        drop(rx);
        assert!(!tx.publish(RenderedOutput::starting()));
    }
}
