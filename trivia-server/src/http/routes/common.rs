//! Shared response shaping

use std::collections::BTreeMap;

use crate::db::repos::Category;

/// Shape categories as the `{id: type, ...}` map the clients expect.
///
/// BTreeMap keeps the keys in id order; serde_json renders the integer keys
/// as JSON object keys.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_id_to_display_string() {
        let map = category_map(vec![
            Category {
                id: 2,
                kind: "Art".into(),
            },
            Category {
                id: 1,
                kind: "Science".into(),
            },
        ]);

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({"1": "Science", "2": "Art"}));
    }
}
