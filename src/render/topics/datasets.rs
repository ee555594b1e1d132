//! Data Manager datasets.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Datasets;

impl TableSource for Datasets {
    fn topic(&self) -> Topic {
        Topic::Datasets
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 14),
            Column::new("name", 30),
            Column::new("owner", 16),
            Column::new("versions", 8),
            Column::new("published", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "dataset_id"),
            cell(item, "name"),
            cell(item, "owner"),
            cell(item, "versions"),
            cell(item, "published"),
        ]
    }
}
