//! Account Server merchants (the services money can be spent with).

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Merchants;

impl TableSource for Merchants {
    fn topic(&self) -> Topic {
        Topic::Merchants
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 8),
            Column::new("name", 24),
            Column::new("kind", 12),
            Column::new("hostname", 32),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "name"),
            cell(item, "kind"),
            cell(item, "api_hostname"),
        ]
    }
}
