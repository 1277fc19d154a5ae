//! Form State
//!
//! Owns the live checkbox rows and the "select all" control's stored value.
//! Every mutation goes through here; readers only get slices.

use log::debug;

use crate::aggregate::{self, Aggregate, DerivedSignals, IndicatorMode};
use crate::category::{Category, CheckboxState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckboxForm {
    states: Vec<CheckboxState>,
    /// Stored value of the "select all" control, independent of its indicator
    select_all_checked: bool,
    /// Bumped on every category snapshot
    generation: u64,
}

impl CheckboxForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with fresh, unchecked ones built from `categories`
    pub fn apply_external_categories(&mut self, categories: Vec<Category>) {
        self.states = categories.into_iter().map(CheckboxState::new).collect();
        self.generation += 1;
        debug!(
            "rebuilt {} checkboxes (generation {})",
            self.states.len(),
            self.generation
        );
    }

    pub fn states(&self) -> &[CheckboxState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn select_all_checked(&self) -> bool {
        self.select_all_checked
    }

    /// Set one row. Out-of-range indexes are ignored and reported as `false`.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.states.get_mut(index) {
            Some(state) => {
                state.checked = checked;
                true
            }
            None => false,
        }
    }

    /// Flip one row, returning its new value
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let state = self.states.get_mut(index)?;
        state.checked = !state.checked;
        Some(state.checked)
    }

    /// Tap on the "select all" control: flip its stored value and broadcast it
    pub fn tap_select_all(&mut self) -> bool {
        self.select_all_checked = !self.select_all_checked;
        let value = self.select_all_checked;
        self.broadcast(value);
        value
    }

    /// Drive the control to an explicit value and broadcast it
    pub fn set_select_all(&mut self, value: bool) {
        self.select_all_checked = value;
        self.broadcast(value);
    }

    fn broadcast(&mut self, value: bool) {
        let touched = aggregate::select_all(&mut self.states, value);
        debug!("select all -> {value} ({touched} checkboxes)");
    }

    pub fn aggregate(&self) -> Aggregate {
        aggregate::compute_aggregate(self.states.iter().map(|s| (s.checked, s.required())))
    }

    pub fn derived(&self, mode: IndicatorMode) -> DerivedSignals {
        self.aggregate().derive(mode)
    }
}
