//! Personal (per-user) billing units.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct PersonalUnits;

impl TableSource for PersonalUnits {
    fn topic(&self) -> Topic {
        Topic::PersonalUnits
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 14),
            Column::new("owner", 18),
            Column::new("billing-day", 11),
            Column::new("created", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "owner_id"),
            cell(item, "billing_day"),
            cell(item, "created"),
        ]
    }
}
