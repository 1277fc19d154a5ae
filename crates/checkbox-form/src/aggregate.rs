//! Aggregation Engine
//!
//! Derives the form-level booleans from per-row checkbox state.

use serde::{Deserialize, Serialize};

use crate::category::CheckboxState;

/// Aggregate over every rendered checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aggregate {
    /// Every required row is checked (vacuously true when empty)
    pub all_required_satisfied: bool,
    /// Every row is checked (vacuously true when empty)
    pub all_checked: bool,
}

/// Compute the aggregate from `(checked, required)` pairs.
///
/// Rows with `required == false` never affect `all_required_satisfied`.
pub fn compute_aggregate<I>(states: I) -> Aggregate
where
    I: IntoIterator<Item = (bool, bool)>,
{
    let mut aggregate = Aggregate {
        all_required_satisfied: true,
        all_checked: true,
    };
    for (checked, required) in states {
        if !checked {
            aggregate.all_checked = false;
            if required {
                aggregate.all_required_satisfied = false;
                break;
            }
        }
    }
    aggregate
}

/// Broadcast `value` to every participating checkbox.
///
/// Returns how many rows took part.
pub fn select_all(states: &mut [CheckboxState], value: bool) -> usize {
    let mut touched = 0;
    for state in states.iter_mut().filter(|s| s.participates_in_select_all()) {
        state.checked = value;
        touched += 1;
    }
    touched
}

/// What the "select all" checkmark reflects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorMode {
    /// Checked when every required row is checked
    #[default]
    AllRequiredSatisfied,
    /// Checked when every row is checked
    AllChecked,
}

/// Signals the screen applies to its own presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedSignals {
    pub submit_enabled: bool,
    pub submit_emphasized: bool,
    pub select_all_indicator: bool,
}

impl Aggregate {
    pub fn derive(&self, mode: IndicatorMode) -> DerivedSignals {
        let select_all_indicator = match mode {
            IndicatorMode::AllRequiredSatisfied => self.all_required_satisfied,
            IndicatorMode::AllChecked => self.all_checked,
        };
        DerivedSignals {
            submit_enabled: self.all_required_satisfied,
            submit_emphasized: self.all_required_satisfied,
            select_all_indicator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_empty_is_satisfied() {
        let agg = compute_aggregate(std::iter::empty());
        assert!(agg.all_required_satisfied);
        assert!(agg.all_checked);
    }

    #[test]
    fn test_unchecked_required_blocks() {
        let agg = compute_aggregate([(true, true), (false, true), (true, false)]);
        assert!(!agg.all_required_satisfied);
        assert!(!agg.all_checked);
    }

    #[test]
    fn test_unchecked_optional_does_not_block() {
        let agg = compute_aggregate([(true, true), (false, false)]);
        assert!(agg.all_required_satisfied);
        assert!(!agg.all_checked);
    }

    #[test]
    fn test_optional_miss_does_not_hide_required() {
        // An optional miss before a required miss must not hide the required one
        let agg = compute_aggregate([(false, false), (false, true)]);
        assert!(!agg.all_required_satisfied);
    }

    #[test]
    fn test_select_all_skips_non_participants() {
        let mut states = vec![
            CheckboxState::new(Category::new("A", true, true)),
            CheckboxState::new(Category::new("B", false, false)),
            CheckboxState::new(Category::new("C", false, true)),
        ];
        assert_eq!(select_all(&mut states, true), 2);
        assert!(states[0].checked);
        assert!(!states[1].checked);
        assert!(states[2].checked);

        select_all(&mut states, false);
        assert!(states.iter().all(|s| !s.checked));
    }

    #[test]
    fn test_derive_modes() {
        let agg = Aggregate {
            all_required_satisfied: true,
            all_checked: false,
        };
        let observed = agg.derive(IndicatorMode::AllRequiredSatisfied);
        assert!(observed.submit_enabled);
        assert!(observed.submit_emphasized);
        assert!(observed.select_all_indicator);

        let strict = agg.derive(IndicatorMode::AllChecked);
        assert!(strict.submit_enabled);
        assert!(!strict.select_all_indicator);
    }
}
