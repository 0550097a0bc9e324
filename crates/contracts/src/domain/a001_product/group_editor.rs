//! Group editor
//!
//! Pure operations over the list of variation groups. Every operation takes
//! the current state by reference and returns the next state; out-of-range
//! indices leave the state untouched.

use super::variation::{
    SizeFormat, VariationGroup, VariationGroupId, CUSTOM_NAME_SENTINEL, MAX_VARIATION_GROUPS,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationState {
    pub enabled: bool,
    pub groups: Vec<VariationGroup>,
    #[serde(default)]
    next_group_id: u32,
}

impl VariationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_add_group(&self) -> bool {
        self.enabled && self.groups.len() < MAX_VARIATION_GROUPS
    }

    pub fn group(&self, index: usize) -> Option<&VariationGroup> {
        self.groups.get(index)
    }

    /// Turn variations on with exactly one empty group.
    /// Already enabled variations are left as they are.
    pub fn enable_variations(&self) -> Self {
        if self.enabled {
            return self.clone();
        }
        let mut next = self.clone();
        next.enabled = true;
        next.groups.clear();
        let id = next.allocate_id();
        next.groups.push(VariationGroup::empty(id));
        next
    }

    /// Turn variations off and forget all groups
    pub fn disable_variations(&self) -> Self {
        let mut next = self.clone();
        next.enabled = false;
        next.groups.clear();
        next
    }

    pub fn set_group_name(&self, index: usize, value: &str) -> Self {
        self.with_group(index, |group| {
            if value == CUSTOM_NAME_SENTINEL {
                group.show_custom = true;
                group.name.clear();
            } else {
                group.show_custom = false;
                group.name = value.to_string();
            }
            group.size_format = None;
            group.custom_size_format.clear();
        })
    }

    /// Free-text name; only applies while the group awaits a custom name
    pub fn set_custom_group_name(&self, index: usize, text: &str) -> Self {
        self.with_group(index, |group| {
            if group.show_custom {
                group.name = text.to_string();
            }
        })
    }

    pub fn set_size_format_hint(&self, index: usize, format: SizeFormat) -> Self {
        self.with_group(index, |group| {
            if !group.is_size() {
                return;
            }
            group.size_format = Some(format);
            if !format.requires_custom_text() {
                group.custom_size_format.clear();
            }
        })
    }

    pub fn set_custom_size_format(&self, index: usize, text: &str) -> Self {
        self.with_group(index, |group| {
            if group.size_format == Some(SizeFormat::Custom) {
                group.custom_size_format = text.to_string();
            }
        })
    }

    pub fn set_option_scratch(&self, index: usize, text: &str) -> Self {
        self.with_group(index, |group| group.option_input = text.to_string())
    }

    /// Append the trimmed scratch text as a new option.
    ///
    /// Blank input is ignored. Duplicate option text is accepted as is.
    pub fn commit_option(&self, index: usize) -> Self {
        self.with_group(index, |group| {
            let value = group.option_input.trim();
            if value.is_empty() {
                return;
            }
            let value = value.to_string();
            group.options.push(value);
            group.option_input.clear();
        })
    }

    pub fn remove_option(&self, group_index: usize, option_index: usize) -> Self {
        self.with_group(group_index, |group| {
            if option_index < group.options.len() {
                group.options.remove(option_index);
            }
        })
    }

    /// Remove a group; the remaining group shifts into its place
    pub fn remove_group(&self, group_index: usize) -> Self {
        if group_index >= self.groups.len() {
            return self.clone();
        }
        let mut next = self.clone();
        next.groups.remove(group_index);
        next
    }

    pub fn add_group(&self) -> Self {
        if !self.can_add_group() {
            return self.clone();
        }
        let mut next = self.clone();
        let id = next.allocate_id();
        next.groups.push(VariationGroup::empty(id));
        next
    }

    fn with_group(&self, index: usize, edit: impl FnOnce(&mut VariationGroup)) -> Self {
        let mut next = self.clone();
        if let Some(group) = next.groups.get_mut(index) {
            edit(group);
        }
        next
    }

    fn allocate_id(&mut self) -> VariationGroupId {
        self.next_group_id += 1;
        VariationGroupId(self.next_group_id)
    }
}
