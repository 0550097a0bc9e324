//! Variation editor
//!
//! State container owned by the product form. Group edits go through the
//! pure functions of [`VariationState`] and are followed by the group-change
//! hook; row edits replace the table directly.

use super::group_editor::VariationState;
use super::recompute::RecomputeTrigger;
use super::row_editor;
use super::variation::{RowField, SizeFormat, VariationGroup, VariationTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariationEditor {
    state: VariationState,
    table: VariationTable,
    trigger: RecomputeTrigger,
}

impl VariationEditor {
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.on_groups_changed();
        editor
    }

    pub fn state(&self) -> &VariationState {
        &self.state
    }

    pub fn enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn groups(&self) -> &[VariationGroup] {
        &self.state.groups
    }

    pub fn table(&self) -> &VariationTable {
        &self.table
    }

    pub fn can_add_group(&self) -> bool {
        self.state.can_add_group()
    }

    // === Group editor ===

    pub fn enable_variations(&mut self) {
        self.apply(VariationState::enable_variations);
    }

    pub fn disable_variations(&mut self) {
        self.apply(VariationState::disable_variations);
    }

    pub fn toggle_variations(&mut self) {
        if self.state.enabled {
            self.disable_variations();
        } else {
            self.enable_variations();
        }
    }

    pub fn set_group_name(&mut self, index: usize, value: &str) {
        self.apply(|s| s.set_group_name(index, value));
    }

    pub fn set_custom_group_name(&mut self, index: usize, text: &str) {
        self.apply(|s| s.set_custom_group_name(index, text));
    }

    pub fn set_size_format_hint(&mut self, index: usize, format: SizeFormat) {
        self.apply(|s| s.set_size_format_hint(index, format));
    }

    pub fn set_custom_size_format(&mut self, index: usize, text: &str) {
        self.apply(|s| s.set_custom_size_format(index, text));
    }

    pub fn set_option_scratch(&mut self, index: usize, text: &str) {
        self.apply(|s| s.set_option_scratch(index, text));
    }

    pub fn commit_option(&mut self, index: usize) {
        self.apply(|s| s.commit_option(index));
    }

    pub fn remove_option(&mut self, group_index: usize, option_index: usize) {
        self.apply(|s| s.remove_option(group_index, option_index));
    }

    pub fn remove_group(&mut self, group_index: usize) {
        self.apply(|s| s.remove_group(group_index));
    }

    pub fn add_group(&mut self) {
        self.apply(VariationState::add_group);
    }

    // === Row editor ===

    pub fn set_row_field(&mut self, row_index: usize, field: RowField, value: &str) {
        self.table = row_editor::set_row_field(&self.table, row_index, field, value);
    }

    fn apply(&mut self, op: impl FnOnce(&VariationState) -> VariationState) {
        self.state = op(&self.state);
        self.on_groups_changed();
    }

    fn on_groups_changed(&mut self) {
        if let Some(table) = self.trigger.on_groups_changed(&self.state, &self.table) {
            self.table = table;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_option(editor: &mut VariationEditor, index: usize, text: &str) {
        editor.set_option_scratch(index, text);
        editor.commit_option(index);
    }

    #[test]
    fn test_walkthrough_from_single_to_two_groups() {
        let mut editor = VariationEditor::new();
        assert!(!editor.enabled());

        editor.enable_variations();
        assert_eq!(editor.groups().len(), 1);
        assert!(editor.groups()[0].name.is_empty());
        assert!(editor.groups()[0].options.is_empty());

        add_option(&mut editor, 0, "Red");
        add_option(&mut editor, 0, "Blue");
        assert_eq!(editor.table().keys(), vec!["Red", "Blue"]);
        assert_eq!(editor.table().get(0).unwrap().option_labels, vec!["Red".to_string()]);
        assert!(editor
            .table()
            .iter()
            .all(|r| r.price.is_empty() && r.stock.is_empty() && r.sku.is_empty()));

        editor.set_row_field(0, RowField::Price, "10");
        assert_eq!(editor.table().get(0).unwrap().price, "10");

        // second group without options: nothing to combine yet
        editor.add_group();
        assert!(editor.table().is_empty());

        add_option(&mut editor, 1, "S");
        assert_eq!(editor.table().keys(), vec!["Red-S", "Blue-S"]);
        // "Red-S" is a different key than "Red", so the price is not carried over
        assert_eq!(editor.table().get(0).unwrap().price, "");
    }

    #[test]
    fn test_row_edit_survives_option_changes() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        add_option(&mut editor, 0, "Red");
        add_option(&mut editor, 0, "Blue");
        editor.set_row_field(1, RowField::Price, "25.50");
        editor.set_row_field(1, RowField::Sku, "TS-BLUE");

        add_option(&mut editor, 0, "Green");
        editor.remove_option(0, 0);

        assert_eq!(editor.table().keys(), vec!["Blue", "Green"]);
        let blue = editor.table().get(0).unwrap();
        assert_eq!(blue.price, "25.50");
        assert_eq!(blue.sku, "TS-BLUE");
    }

    #[test]
    fn test_row_edit_does_not_resynthesize() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        add_option(&mut editor, 0, "Red");
        let trigger_before = editor.trigger.clone();

        editor.set_row_field(0, RowField::Stock, "3");
        assert_eq!(editor.trigger, trigger_before);
        assert_eq!(editor.table().get(0).unwrap().stock, "3");
    }

    #[test]
    fn test_scratch_typing_keeps_row_values() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        add_option(&mut editor, 0, "Red");
        editor.set_row_field(0, RowField::Price, "9");

        editor.set_option_scratch(0, "Bl");
        assert_eq!(editor.table().get(0).unwrap().price, "9");
    }

    #[test]
    fn test_disable_clears_table() {
        let mut editor = VariationEditor::new();
        editor.toggle_variations();
        add_option(&mut editor, 0, "Red");
        assert_eq!(editor.table().len(), 1);

        editor.toggle_variations();
        assert!(!editor.enabled());
        assert!(editor.groups().is_empty());
        assert!(editor.table().is_empty());
    }

    #[test]
    fn test_removing_first_group_collapses_to_second() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        add_option(&mut editor, 0, "Red");
        editor.add_group();
        add_option(&mut editor, 1, "S");
        add_option(&mut editor, 1, "M");
        assert_eq!(editor.table().keys(), vec!["Red-S", "Red-M"]);

        editor.remove_group(0);
        assert_eq!(editor.table().keys(), vec!["S", "M"]);
    }

    #[test]
    fn test_third_group_is_rejected() {
        let mut editor = VariationEditor::new();
        editor.enable_variations();
        editor.add_group();
        let before = editor.clone();

        editor.add_group();
        assert_eq!(editor, before);
        assert!(!editor.can_add_group());
    }
}
