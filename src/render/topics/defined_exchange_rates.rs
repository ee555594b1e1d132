//! Exchange rates the Account Server has a definition for.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct DefinedExchangeRates;

impl TableSource for DefinedExchangeRates {
    fn topic(&self) -> Topic {
        Topic::DefinedExchangeRates
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("collection", 22),
            Column::new("job", 26),
            Column::new("version", 12),
            Column::new("rate", 10),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "collection"),
            cell(item, "job"),
            cell(item, "version"),
            cell(item, "rate"),
        ]
    }
}
