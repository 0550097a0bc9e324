use serde::{Deserialize, Serialize};

/// Product category offered in the form's category dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Name of the category with `id`, or "Unknown"
pub fn category_name(categories: &[Category], id: i64) -> String {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_lookup() {
        let categories = vec![
            Category { id: 1, name: "Fashion".into() },
            Category { id: 2, name: "Home & Living".into() },
        ];
        assert_eq!(category_name(&categories, 2), "Home & Living");
        assert_eq!(category_name(&categories, 9), "Unknown");
    }

    #[test]
    fn test_category_json_shape() {
        let parsed: Vec<Category> =
            serde_json::from_str(r#"[{"id":5,"name":"Beauty"}]"#).unwrap();
        assert_eq!(parsed[0], Category { id: 5, name: "Beauty".into() });
    }
}
