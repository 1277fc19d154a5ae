//! Checkbox Row Component

use leptos::prelude::*;

use crate::context::use_screen_context;
use crate::store;

/// One category checkbox
#[component]
pub fn CheckboxRow(index: usize) -> impl IntoView {
    let ctx = use_screen_context();
    let Some(row) = store::store_row_untracked(&ctx.store, index) else {
        return ().into_any();
    };

    let checked = move || store::store_row_checked(&ctx.store, index);

    view! {
        <label class="checkbox-row">
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| store::store_toggle(&ctx.store, index)
            />
            <span class="checkbox-title">{row.title().to_string()}</span>
            {row.required().then(|| view! { <span class="required-mark">"*"</span> })}
        </label>
    }
    .into_any()
}
