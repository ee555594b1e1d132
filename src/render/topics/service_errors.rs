//! Errors reported by the Account Server about its own operation.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct ServiceErrors;

impl TableSource for ServiceErrors {
    fn topic(&self) -> Topic {
        Topic::ServiceErrors
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 8),
            Column::new("severity", 9),
            Column::new("summary", 48),
            Column::new("created", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "severity"),
            cell(item, "summary"),
            cell(item, "created"),
        ]
    }
}
