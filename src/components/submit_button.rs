//! Submit Button Component
//!
//! Enabled only while every required row is checked. A press flashes the
//! button and clears the flash after the configured delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_screen_context;
use crate::store;

#[component]
pub fn SubmitButton() -> impl IntoView {
    let ctx = use_screen_context();
    let label = ctx.config.with_value(|c| c.submit_label.clone());

    let on_submit = move |_| {
        let signals = ctx.signals.get_untracked();
        match store::store_press_submit(&ctx.store, &signals) {
            Ok(token) => {
                let delay = ctx.flash_reset_ms();
                let screen_store = ctx.store;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    store::store_reset_flash(&screen_store, token);
                });
            }
            Err(e) => log::warn!("{e}"),
        }
    };

    let class = move || {
        let emphasis = if ctx.signals.get().submit_emphasized { "emphasized" } else { "muted" };
        if store::store_is_flashing(&ctx.store) {
            format!("submit-btn {emphasis} flash")
        } else {
            format!("submit-btn {emphasis}")
        }
    };

    view! {
        <button
            class=class
            prop:disabled=move || !ctx.signals.get().submit_enabled
            on:click=on_submit
        >
            {label}
        </button>
    }
}
