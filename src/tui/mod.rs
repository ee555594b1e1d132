//! Terminal UI
//!
//! Glue between the dashboard core and the terminal. Layering follows the
//! rest of the crate:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  app.rs      terminal lifecycle + select loop            │
//! │  events.rs   key press → Action                          │
//! │  banner.rs   environment / key-help / logo panels        │
//! │  theme.rs    styles                                      │
//! └──────────────────────────────────────────────────────────┘
//!        ▲ watch<RenderedOutput>          │ on_topic_change_request
//! ┌──────────────────────────────────────────────────────────┐
//! │  dashboard core (registry, topic state, scheduler)       │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod app;
mod banner;
mod events;
mod theme;

pub use app::TuiApp;
pub use theme::Theme;

use std::sync::Arc;

use tokio::sync::watch;

use crate::dashboard::Dashboard;
use crate::environment::Environment;
use crate::gateway::{DataGateway, HttpGateway};
use crate::render::{RenderedOutput, TopicRegistry};
use crate::topic::Topic;

/// Run the dashboard against the configured services until the operator
/// quits.
pub async fn run(environment: Environment) -> anyhow::Result<()> {
    let period = environment.refresh_period();

    let gateway: Arc<dyn DataGateway> = Arc::new(HttpGateway::new(&environment)?);
    let registry = TopicRegistry::standard(gateway);
    let dashboard = Dashboard::new(registry, Topic::DEFAULT, period)?;
    let handle = dashboard.handle();

    let (output_tx, output_rx) = watch::channel(RenderedOutput::starting());
    let scheduler = dashboard.spawn(output_tx);

    let app = TuiApp::new(environment, handle, output_rx);
    let result = app.run().await;

    // Cancellation only at shutdown; in-flight fetches are bounded by the
    // gateway timeout anyway.
    scheduler.abort();
    result
}
