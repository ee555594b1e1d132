//! Topic rendering
//!
//! A renderer turns one topic's remote payload into displayable text. Each
//! topic has exactly one renderer, owned by the [`TopicRegistry`]; the
//! shared fetch/cache/format machinery lives in [`table::TableRenderer`]
//! and the per-topic leaves under [`topics`] only describe columns.

pub mod registry;
pub mod table;
pub mod topics;

pub use registry::TopicRegistry;
pub use table::{Column, TableRenderer, TableSource};

use async_trait::async_trait;

use crate::topic::Topic;

/// Displayable artifact produced by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    /// Panel title, e.g. `instances (4)`.
    pub title: String,
    /// Pre-formatted text body, one line per row.
    pub body: String,
    /// True when the body was produced from a cached payload after a fetch
    /// failure.
    pub stale: bool,
}

impl RenderedOutput {
    /// Output shown before the first refresh completes.
    pub fn starting() -> Self {
        Self {
            title: "starting".to_string(),
            body: "Waiting for the first refresh...".to_string(),
            stale: false,
        }
    }

    /// Title with the staleness marker applied.
    pub fn display_title(&self) -> String {
        if self.stale {
            format!("{} [STALE]", self.title)
        } else {
            self.title.clone()
        }
    }
}

/// One topic's rendering capability.
///
/// `render` must not fail for ordinary fetch problems; those are translated
/// into stale or placeholder output internally. An `Err` here is a renderer
/// fault, caught (and logged) at the scheduler's tick boundary.
#[async_trait]
pub trait TopicRenderer: Send {
    fn topic(&self) -> Topic;

    async fn render(&mut self) -> anyhow::Result<RenderedOutput>;
}
