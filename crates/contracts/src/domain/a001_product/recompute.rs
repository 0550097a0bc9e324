//! Recompute trigger
//!
//! Decides when the variation table has to be synthesized again. Only the
//! group list is watched, compared by value against the snapshot taken at
//! the last run; edits made to the table itself never trigger a rerun.

use super::group_editor::VariationState;
use super::synthesizer::synthesize;
use super::variation::{VariationGroup, VariationTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecomputeTrigger {
    last_seen: Option<(bool, Vec<VariationGroup>)>,
}

impl RecomputeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `state` differs from the snapshot of the last run
    pub fn is_stale(&self, state: &VariationState) -> bool {
        match &self.last_seen {
            Some((enabled, groups)) => *enabled != state.enabled || *groups != state.groups,
            None => true,
        }
    }

    /// Group-list change hook.
    ///
    /// Returns the regenerated table when the groups changed since the last
    /// run, `None` when the current table is still valid.
    pub fn on_groups_changed(
        &mut self,
        state: &VariationState,
        table: &VariationTable,
    ) -> Option<VariationTable> {
        if !self.is_stale(state) {
            return None;
        }
        self.last_seen = Some((state.enabled, state.groups.clone()));
        Some(synthesize(state.enabled, &state.groups, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::row_editor::set_row_field;
    use crate::domain::a001_product::variation::RowField;

    #[test]
    fn test_first_call_always_runs() {
        let mut trigger = RecomputeTrigger::new();
        let state = VariationState::new();
        assert_eq!(
            trigger.on_groups_changed(&state, &VariationTable::default()),
            Some(VariationTable::default())
        );
    }

    #[test]
    fn test_unchanged_groups_do_not_rerun() {
        let mut trigger = RecomputeTrigger::new();
        let state = VariationState::new()
            .enable_variations()
            .set_option_scratch(0, "Red")
            .commit_option(0);

        let table = trigger
            .on_groups_changed(&state, &VariationTable::default())
            .unwrap();
        let edited = set_row_field(&table, 0, RowField::Price, "10");

        // a table edit is not a group change
        assert_eq!(trigger.on_groups_changed(&state, &edited), None);
    }

    #[test]
    fn test_equal_copy_of_groups_is_not_a_change() {
        let mut trigger = RecomputeTrigger::new();
        let state = VariationState::new().enable_variations();
        trigger.on_groups_changed(&state, &VariationTable::default());

        let rebuilt = state.clone();
        assert!(!trigger.is_stale(&rebuilt));
    }

    #[test]
    fn test_group_edit_reruns_with_previous_values() {
        let mut trigger = RecomputeTrigger::new();
        let state = VariationState::new()
            .enable_variations()
            .set_option_scratch(0, "Red")
            .commit_option(0);
        let table = trigger
            .on_groups_changed(&state, &VariationTable::default())
            .unwrap();
        let table = set_row_field(&table, 0, RowField::Sku, "TS-RED");

        let state = state.set_option_scratch(0, "Blue").commit_option(0);
        let next = trigger.on_groups_changed(&state, &table).unwrap();

        assert_eq!(next.keys(), vec!["Red", "Blue"]);
        assert_eq!(next.get(0).unwrap().sku, "TS-RED");
    }
}
