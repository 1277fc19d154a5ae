//! Property tests for the required-item aggregate and select-all broadcast

use checkbox_form::{compute_aggregate, select_all, Category, CheckboxForm, CheckboxState};
use proptest::prelude::*;

fn category_strategy() -> impl Strategy<Value = Category> {
    ("[a-z]{1,8}", any::<bool>(), any::<bool>())
        .prop_map(|(title, required, participates)| Category::new(title, required, participates))
}

/// Rows with an arbitrary checked value
fn states_strategy() -> impl Strategy<Value = Vec<CheckboxState>> {
    prop::collection::vec((category_strategy(), any::<bool>()), 0..32).prop_map(|rows| {
        rows.into_iter()
            .map(|(category, checked)| {
                let mut state = CheckboxState::new(category);
                state.checked = checked;
                state
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_satisfied_iff_no_unchecked_required(pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..64)) {
        let expected = !pairs.iter().any(|&(checked, required)| required && !checked);
        prop_assert_eq!(compute_aggregate(pairs.iter().copied()).all_required_satisfied, expected);
    }

    #[test]
    fn prop_select_all_touches_only_participants(states in states_strategy(), value in any::<bool>()) {
        let mut once = states.clone();
        select_all(&mut once, value);

        for (before, after) in states.iter().zip(&once) {
            if before.participates_in_select_all() {
                prop_assert_eq!(after.checked, value);
            } else {
                prop_assert_eq!(after.checked, before.checked);
            }
        }

        let mut twice = once.clone();
        select_all(&mut twice, value);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_rebuild_starts_unchecked(first in prop::collection::vec(category_strategy(), 0..16),
                                     second in prop::collection::vec(category_strategy(), 0..16)) {
        let mut form = CheckboxForm::new();
        form.apply_external_categories(first);
        form.set_select_all(true);
        for i in 0..form.len() {
            form.set_checked(i, true);
        }

        form.apply_external_categories(second.clone());
        prop_assert_eq!(form.len(), second.len());
        prop_assert!(form.states().iter().all(|s| !s.checked));
    }
}
