//! Shared tabular rendering over a fetched payload.
//!
//! `TableRenderer` owns the per-topic cache of the last good payload. On a
//! fetch failure it re-renders that cache (marked stale) rather than
//! erroring, or shows a placeholder if no fetch has ever succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{error, warn};

use super::{RenderedOutput, TopicRenderer};
use crate::gateway::{DataGateway, Payload};
use crate::topic::Topic;

/// A fixed-width table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub width: usize,
}

impl Column {
    pub const fn new(header: &'static str, width: usize) -> Self {
        Self { header, width }
    }
}

/// The per-topic leaf: column layout and row extraction. Trivial formatting
/// only; no IO, no state.
pub trait TableSource: Send + Sync {
    fn topic(&self) -> Topic;

    fn columns(&self) -> &'static [Column];

    /// Extract one display row from one payload item.
    fn row(&self, item: &Value) -> Vec<String>;
}

/// Renderer wrapping a [`TableSource`] with fetch, cache and formatting.
pub struct TableRenderer<S: TableSource> {
    source: S,
    gateway: Arc<dyn DataGateway>,
    cached: Option<Payload>,
}

impl<S: TableSource> TableRenderer<S> {
    pub fn new(source: S, gateway: Arc<dyn DataGateway>) -> Self {
        Self {
            source,
            gateway,
            cached: None,
        }
    }

    fn format(&self, payload: &Payload, stale: bool) -> RenderedOutput {
        let columns = self.source.columns();
        let mut lines = Vec::with_capacity(payload.items.len() + 2);

        lines.push(
            columns
                .iter()
                .map(|c| pad(c.header, c.width))
                .collect::<Vec<_>>()
                .join(" "),
        );
        lines.push(
            columns
                .iter()
                .map(|c| "-".repeat(c.width))
                .collect::<Vec<_>>()
                .join(" "),
        );

        for item in &payload.items {
            let row = self.source.row(item);
            lines.push(
                columns
                    .iter()
                    .zip(row.iter())
                    .map(|(c, value)| pad(value, c.width))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }

        if payload.is_empty() {
            lines.push("(no rows)".to_string());
        }

        RenderedOutput {
            title: format!("{} ({})", self.source.topic(), payload.items.len()),
            body: lines.join("\n"),
            stale,
        }
    }

    fn placeholder(&self) -> RenderedOutput {
        RenderedOutput {
            title: self.source.topic().to_string(),
            body: "No data yet.".to_string(),
            stale: false,
        }
    }

    fn fallback(&self) -> RenderedOutput {
        match &self.cached {
            Some(payload) => self.format(payload, true),
            None => self.placeholder(),
        }
    }
}

#[async_trait]
impl<S: TableSource> TopicRenderer for TableRenderer<S> {
    fn topic(&self) -> Topic {
        self.source.topic()
    }

    async fn render(&mut self) -> anyhow::Result<RenderedOutput> {
        let topic = self.source.topic();
        match self.gateway.fetch(topic).await {
            Ok(payload) => {
                let output = self.format(&payload, false);
                self.cached = Some(payload);
                Ok(output)
            }
            Err(e) if e.is_transient() => {
                warn!(%topic, error = %e, "transient fetch failure");
                Ok(self.fallback())
            }
            Err(e) => {
                error!(%topic, error = %e, "permanent fetch failure");
                Ok(self.fallback())
            }
        }
    }
}

/// Pad or truncate a cell to its column width.
fn pad(value: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut chars = value.chars();
    for _ in 0..width {
        match chars.next() {
            Some(c) => out.push(c),
            None => out.push(' '),
        }
    }
    if chars.next().is_some() {
        // Truncated; make it visible.
        out.pop();
        out.push('…');
    }
    out
}

/// Extract a displayable cell from a payload item.
///
/// `path` is dot-separated for nested fields (`"job.name"`). Missing or
/// null fields render as `-`.
pub fn cell(item: &Value, path: &str) -> String {
    let pointer = format!("/{}", path.replace('.', "/"));
    match item.pointer(&pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}
