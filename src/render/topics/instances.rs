//! Data Manager application/job instances. The default topic.

use serde_json::Value;

use crate::render::table::{cell, Column, TableSource};
use crate::topic::Topic;

pub struct Instances;

impl TableSource for Instances {
    fn topic(&self) -> Topic {
        Topic::Instances
    }

    fn columns(&self) -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("id", 14),
            Column::new("name", 26),
            Column::new("application", 18),
            Column::new("owner", 14),
            Column::new("phase", 10),
            Column::new("launched", 20),
        ];
        COLUMNS
    }

    fn row(&self, item: &Value) -> Vec<String> {
        vec![
            cell(item, "id"),
            cell(item, "name"),
            cell(item, "application_id"),
            cell(item, "owner"),
            cell(item, "phase"),
            cell(item, "launched"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_render_as_dash() {
        let row = Instances.row(&json!({"id": "instance-1"}));
        assert_eq!(row[0], "instance-1");
        assert!(row[1..].iter().all(|v| v == "-"));
    }
}
