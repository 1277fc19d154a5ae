//! Screen Context
//!
//! Shared state provided via Leptos Context API to the screen's children.

use leptos::prelude::*;

use checkbox_form::{DerivedSignals, FormConfig};

use crate::store::ScreenStore;

/// Screen-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ScreenContext {
    pub store: ScreenStore,
    /// Recomputed whenever any row or the "select all" control changes
    pub signals: Memo<DerivedSignals>,
    pub config: StoredValue<FormConfig>,
}

impl ScreenContext {
    pub fn new(store: ScreenStore, signals: Memo<DerivedSignals>, config: StoredValue<FormConfig>) -> Self {
        Self {
            store,
            signals,
            config,
        }
    }

    pub fn flash_reset_ms(&self) -> u32 {
        self.config.with_value(|c| c.flash_reset_ms)
    }
}

/// Get the screen context; children rendered outside a `CheckboxScreen` panic here
pub fn use_screen_context() -> ScreenContext {
    expect_context::<ScreenContext>()
}
