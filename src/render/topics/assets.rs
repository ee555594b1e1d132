//! Account Server assets.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Assets;

impl TableSource for Assets {
    fn topic(&self) -> Topic {
        Topic::Assets
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 10),
            Column::new("name", 28),
            Column::new("scope", 10),
            Column::new("merchant", 18),
            Column::new("created", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "name"),
            cell(item, "scope"),
            cell(item, "merchant.name"),
            cell(item, "created"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_matches_columns() {
        let item = json!({
            "id": "asset-1",
            "name": "reference-data",
            "scope": "public",
            "merchant": {"name": "acme"},
            "created": "2024-01-01T00:00:00Z"
        });
        let row = Assets.row(&item);
        assert_eq!(row.len(), Assets.columns().len());
        assert_eq!(row[3], "acme");
    }
}
