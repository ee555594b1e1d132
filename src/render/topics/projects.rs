//! Data Manager projects.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Projects;

impl TableSource for Projects {
    fn topic(&self) -> Topic {
        Topic::Projects
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 16),
            Column::new("name", 26),
            Column::new("owner", 14),
            Column::new("product", 14),
            Column::new("size", 10),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "project_id"),
            cell(item, "name"),
            cell(item, "owner"),
            cell(item, "product_id"),
            cell(item, "size"),
        ]
    }
}
