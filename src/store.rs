//! Screen State Store
//!
//! Uses Leptos reactive_stores so the form and the submit gate update
//! independently. All mutations of the checkbox rows go through here.

use leptos::prelude::*;
use reactive_stores::Store;

use checkbox_form::{
    Category, CheckboxForm, CheckboxState, DerivedSignals, FlashToken, IndicatorMode, SubmitError,
    SubmitGate,
};

/// State owned by one checkbox screen
#[derive(Clone, Debug, Default, Store)]
pub struct ScreenState {
    /// Live checkbox rows and the "select all" control
    pub form: CheckboxForm,
    /// Submit acknowledgment flash
    pub submit: SubmitGate,
}

/// Type alias for the store
pub type ScreenStore = Store<ScreenState>;

// ========================
// Reads
// ========================

/// Derived signals for the current rows (tracked)
pub fn store_derived(store: &ScreenStore, mode: IndicatorMode) -> DerivedSignals {
    store.form().read().derived(mode)
}

/// Row keys for the current snapshot; they change on every rebuild
pub fn store_row_keys(store: &ScreenStore) -> Vec<(u64, usize)> {
    let form = store.form().read();
    let generation = form.generation();
    (0..form.len()).map(|index| (generation, index)).collect()
}

/// One row, without subscribing to changes
pub fn store_row_untracked(store: &ScreenStore, index: usize) -> Option<CheckboxState> {
    store.form().read_untracked().states().get(index).cloned()
}

/// Whether a row is checked (tracked)
pub fn store_row_checked(store: &ScreenStore, index: usize) -> bool {
    store
        .form()
        .read()
        .states()
        .get(index)
        .is_some_and(|state| state.checked)
}

pub fn store_is_flashing(store: &ScreenStore) -> bool {
    store.submit().read().is_flashing()
}

// ========================
// Writes
// ========================

/// Replace every row from a new category snapshot
pub fn store_apply_categories(store: &ScreenStore, categories: Vec<Category>) {
    store.form().write().apply_external_categories(categories);
}

pub fn store_toggle(store: &ScreenStore, index: usize) {
    if store.form().write().toggle(index).is_none() {
        log::warn!("toggle on missing checkbox {index}");
    }
}

pub fn store_tap_select_all(store: &ScreenStore) -> bool {
    store.form().write().tap_select_all()
}

pub fn store_press_submit(
    store: &ScreenStore,
    signals: &DerivedSignals,
) -> Result<FlashToken, SubmitError> {
    store.submit().write().press(signals)
}

/// Clear the flash for `token`; no-op once the screen is gone or the token is stale
pub fn store_reset_flash(store: &ScreenStore, token: FlashToken) {
    if let Some(mut gate) = store.submit().try_write() {
        gate.reset(token);
    }
}
