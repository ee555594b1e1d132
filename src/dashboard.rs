//! The assembled core: registry + topic state + scheduler.
//!
//! The TUI (or a test harness) only ever sees two things: a
//! [`DashboardHandle`] for topic-change requests and the spawned scheduler
//! publishing into whatever [`DisplaySink`] it was given.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::error::SquadError;
use crate::render::TopicRegistry;
use crate::scheduler::{DisplaySink, RefreshScheduler};
use crate::state::TopicState;
use crate::topic::Topic;

/// The dashboard core, ready to be started.
pub struct Dashboard {
    registry: TopicRegistry,
    state: TopicState,
    period: Duration,
}

impl Dashboard {
    /// Assemble the core. Fails if the initial topic has no renderer.
    pub fn new(
        registry: TopicRegistry,
        initial: Topic,
        period: Duration,
    ) -> Result<Self, SquadError> {
        let state = TopicState::new(initial, &registry)?;
        Ok(Self {
            registry,
            state,
            period,
        })
    }

    /// Handle for the input dispatcher. Clone freely.
    pub fn handle(&self) -> DashboardHandle {
        DashboardHandle {
            state: self.state.clone(),
        }
    }

    /// Start the refresh scheduler, consuming the core.
    pub fn spawn<S: DisplaySink>(self, sink: S) -> JoinHandle<()> {
        RefreshScheduler::new(self.registry, self.state, self.period).spawn(sink)
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

/// What the input dispatcher is allowed to do: request a topic change and
/// read the active topic. Nothing else crosses the boundary inbound.
#[derive(Clone)]
pub struct DashboardHandle {
    state: TopicState,
}

impl DashboardHandle {
    /// Delegates to the validated topic-state transition. A rejected
    /// request leaves the active topic unchanged.
    pub fn on_topic_change_request(&self, requested: &str) -> Result<Topic, SquadError> {
        self.state.set(requested)
    }

    pub fn active_topic(&self) -> Topic {
        self.state.get()
    }
}
