use super::variation::{RowField, VariationTable};

/// Replace one field of one row, leaving every other row as it was.
///
/// An empty image value clears the image reference. Unknown row indices
/// return the table unchanged.
pub fn set_row_field(
    table: &VariationTable,
    row_index: usize,
    field: RowField,
    value: &str,
) -> VariationTable {
    let mut next = table.clone();
    let Some(row) = next.0.get_mut(row_index) else {
        return next;
    };
    match field {
        RowField::Price => row.price = value.to_string(),
        RowField::Stock => row.stock = value.to_string(),
        RowField::Sku => row.sku = value.to_string(),
        RowField::Image => {
            row.image = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::variation::VariationRow;

    fn table() -> VariationTable {
        VariationTable::new(vec![
            VariationRow::new("Red".into(), vec!["Red".into()]),
            VariationRow::new("Blue".into(), vec!["Blue".into()]),
        ])
    }

    #[test]
    fn test_sets_single_field() {
        let before = table();
        let after = set_row_field(&before, 1, RowField::Stock, "12");

        assert_eq!(after.get(1).unwrap().stock, "12");
        assert_eq!(after.get(1).unwrap().price, "");
        assert_eq!(after.get(0), before.get(0));
        assert_eq!(before.get(1).unwrap().stock, "");
    }

    #[test]
    fn test_image_set_and_clear() {
        let with_image = set_row_field(&table(), 0, RowField::Image, "media://42");
        assert_eq!(with_image.get(0).unwrap().image.as_deref(), Some("media://42"));

        let cleared = set_row_field(&with_image, 0, RowField::Image, "");
        assert_eq!(cleared.get(0).unwrap().image, None);
    }

    #[test]
    fn test_out_of_range_row_is_noop() {
        let before = table();
        assert_eq!(set_row_field(&before, 2, RowField::Price, "1"), before);
    }
}
