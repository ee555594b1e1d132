//! Account Server products.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Products;

impl TableSource for Products {
    fn topic(&self) -> Topic {
        Topic::Products
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 14),
            Column::new("name", 26),
            Column::new("type", 16),
            Column::new("flavour", 10),
            Column::new("coins", 10),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "product.id"),
            cell(item, "product.name"),
            cell(item, "product.type"),
            cell(item, "product.flavour"),
            cell(item, "coins.used"),
        ]
    }
}
