//! Select All Button Component

use leptos::prelude::*;

use crate::context::use_screen_context;
use crate::store;

/// Broadcasts its own toggled value to participating rows. The checkmark
/// follows the derived indicator, not the stored value.
#[component]
pub fn SelectAllButton() -> impl IntoView {
    let ctx = use_screen_context();
    let label = ctx.config.with_value(|c| c.select_all_label.clone());

    view! {
        <button
            class=move || {
                if ctx.signals.get().select_all_indicator { "select-all-btn active" } else { "select-all-btn" }
            }
            on:click=move |_| {
                store::store_tap_select_all(&ctx.store);
            }
        >
            <span class="select-all-icon"></span>
            {label}
        </button>
    }
}
