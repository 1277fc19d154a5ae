//! Checkbox Screen Component
//!
//! Header, one row per category, submit and "select all" controls.

use leptos::prelude::*;
use reactive_stores::Store;

use checkbox_form::{Category, FormConfig};

use crate::components::{CheckboxRow, SelectAllButton, SubmitButton};
use crate::context::ScreenContext;
use crate::store::{self, ScreenState};

/// The whole screen. `categories` is the data source; every new snapshot
/// rebuilds all rows.
#[component]
pub fn CheckboxScreen(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(optional)] config: Option<FormConfig>,
) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let screen_store = Store::new(ScreenState::default());
    let mode = config.with_value(|c| c.indicator_mode);
    let signals = Memo::new(move |_| store::store_derived(&screen_store, mode));

    provide_context(ScreenContext::new(screen_store, signals, config));

    Effect::new(move |_| {
        store::store_apply_categories(&screen_store, categories.get());
    });

    let header = config.with_value(|c| c.header_title.clone());

    view! {
        <div class="checkbox-screen">
            <h1 class="screen-header">{header}</h1>

            <div class="checkbox-list">
                <For
                    each=move || store::store_row_keys(&screen_store)
                    key=|row_key| *row_key
                    children=move |(_, index)| view! { <CheckboxRow index=index /> }
                />
            </div>

            <SubmitButton />
            <SelectAllButton />
        </div>
    }
}
