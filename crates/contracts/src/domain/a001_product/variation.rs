use serde::{Deserialize, Serialize};

/// Hard cap on the number of variation groups (tiers) a product can have.
pub const MAX_VARIATION_GROUPS: usize = 2;

/// Select value that switches a group into "awaiting custom name" mode.
pub const CUSTOM_NAME_SENTINEL: &str = "custom";

/// Group name that unlocks the size-format hint.
pub const SIZE_GROUP_NAME: &str = "Size";

/// Preset group names offered in the name dropdown.
pub const PRESET_GROUP_NAMES: [&str; 2] = ["Color", SIZE_GROUP_NAME];

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariationGroupId(pub u32);

impl VariationGroupId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Size format
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeFormat {
    International,
    #[serde(rename = "EU")]
    Eu,
    Custom,
}

impl SizeFormat {
    /// Value used by the radio inputs and on the wire
    pub fn code(&self) -> &'static str {
        match self {
            SizeFormat::International => "International",
            SizeFormat::Eu => "EU",
            SizeFormat::Custom => "Custom",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SizeFormat::International => "International (S, M, L)",
            SizeFormat::Eu => "EU (38, 39, 40)",
            SizeFormat::Custom => "Custom",
        }
    }

    pub fn all() -> Vec<SizeFormat> {
        vec![SizeFormat::International, SizeFormat::Eu, SizeFormat::Custom]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "International" => Some(SizeFormat::International),
            "EU" => Some(SizeFormat::Eu),
            "Custom" => Some(SizeFormat::Custom),
            _ => None,
        }
    }

    /// Only the last choice needs an extra free-text format
    pub fn requires_custom_text(&self) -> bool {
        matches!(self, SizeFormat::Custom)
    }
}

// ============================================================================
// Variation group
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationGroup {
    pub id: VariationGroupId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub options: Vec<String>,

    /// The group is waiting for a free-text name
    #[serde(rename = "showCustom", default)]
    pub show_custom: bool,

    #[serde(rename = "sizeFormat", default)]
    pub size_format: Option<SizeFormat>,

    #[serde(rename = "customSizeFormat", default)]
    pub custom_size_format: String,

    /// Text typed for an option that has not been committed yet
    #[serde(rename = "currentOptionInput", default, skip_serializing)]
    pub option_input: String,
}

impl VariationGroup {
    pub fn empty(id: VariationGroupId) -> Self {
        Self {
            id,
            name: String::new(),
            options: Vec::new(),
            show_custom: false,
            size_format: None,
            custom_size_format: String::new(),
            option_input: String::new(),
        }
    }

    pub fn is_size(&self) -> bool {
        self.name == SIZE_GROUP_NAME
    }

    /// Value the name dropdown should display for this group
    pub fn select_value(&self) -> String {
        if self.show_custom {
            CUSTOM_NAME_SENTINEL.to_string()
        } else {
            self.name.clone()
        }
    }

    /// A "Size" group takes options only once a format is chosen
    pub fn accepts_options(&self) -> bool {
        !self.is_size() || self.size_format.is_some()
    }

    /// Column header label for the variation table
    pub fn header_label(&self) -> &str {
        if self.name.trim().is_empty() {
            "Variation"
        } else {
            &self.name
        }
    }
}

// ============================================================================
// Variation table
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationRow {
    #[serde(rename = "id")]
    pub row_key: String,

    #[serde(rename = "optionLabels")]
    pub option_labels: Vec<String>,

    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub stock: String,

    #[serde(default)]
    pub sku: String,

    #[serde(default)]
    pub image: Option<String>,
}

impl VariationRow {
    pub fn new(row_key: String, option_labels: Vec<String>) -> Self {
        Self {
            row_key,
            option_labels,
            price: String::new(),
            stock: String::new(),
            sku: String::new(),
            image: None,
        }
    }

    /// Human readable label, e.g. "Red / S"
    pub fn display_label(&self) -> String {
        self.option_labels.join(" / ")
    }

    pub fn field(&self, field: RowField) -> String {
        match field {
            RowField::Price => self.price.clone(),
            RowField::Stock => self.stock.clone(),
            RowField::Sku => self.sku.clone(),
            RowField::Image => self.image.clone().unwrap_or_default(),
        }
    }
}

/// Ordered rows, one per combination of group options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationTable(pub Vec<VariationRow>);

impl VariationTable {
    pub fn new(rows: Vec<VariationRow>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[VariationRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VariationRow> {
        self.0.get(index)
    }

    pub fn first(&self) -> Option<&VariationRow> {
        self.0.first()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.row_key.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VariationRow> {
        self.0.iter()
    }
}

/// Editable per-row fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowField {
    Price,
    Stock,
    Sku,
    Image,
}

impl RowField {
    pub fn code(&self) -> &'static str {
        match self {
            RowField::Price => "price",
            RowField::Stock => "stock",
            RowField::Sku => "sku",
            RowField::Image => "image",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "price" => Some(RowField::Price),
            "stock" => Some(RowField::Stock),
            "sku" => Some(RowField::Sku),
            "image" => Some(RowField::Image),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_group_waits_for_format() {
        let mut group = VariationGroup::empty(VariationGroupId(1));
        assert!(group.accepts_options());

        group.name = "Size".into();
        assert!(!group.accepts_options());

        group.size_format = Some(SizeFormat::Eu);
        assert!(group.accepts_options());
    }

    #[test]
    fn test_group_json_omits_option_input() {
        let mut group = VariationGroup::empty(VariationGroupId(7));
        group.name = "Size".into();
        group.options = vec!["S".into(), "M".into()];
        group.size_format = Some(SizeFormat::Eu);
        group.option_input = "L".into();

        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["sizeFormat"], "EU");
        assert_eq!(json["options"], serde_json::json!(["S", "M"]));
        assert!(json.get("currentOptionInput").is_none());
    }

    #[test]
    fn test_row_uses_key_as_wire_id() {
        let row = VariationRow::new("Red-S".into(), vec!["Red".into(), "S".into()]);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], "Red-S");
        assert_eq!(json["optionLabels"], serde_json::json!(["Red", "S"]));
        assert_eq!(json["image"], serde_json::Value::Null);
        assert_eq!(row.display_label(), "Red / S");
    }
}
