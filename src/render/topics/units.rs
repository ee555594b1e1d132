//! Account Server organisational units.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Units;

impl TableSource for Units {
    fn topic(&self) -> Topic {
        Topic::Units
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 14),
            Column::new("name", 26),
            Column::new("owner", 16),
            Column::new("billing-day", 11),
            Column::new("created", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "name"),
            cell(item, "owner_id"),
            cell(item, "billing_day"),
            cell(item, "created"),
        ]
    }
}
