//! Jobs with no defined exchange rate yet, i.e. work the Account Server
//! cannot price.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct UndefinedExchangeRates;

impl TableSource for UndefinedExchangeRates {
    fn topic(&self) -> Topic {
        Topic::UndefinedExchangeRates
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("collection", 22),
            Column::new("job", 26),
            Column::new("version", 12),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "collection"),
            cell(item, "job"),
            cell(item, "version"),
        ]
    }
}
