//! CheckBoxes App
//!
//! Loads the bundled configuration and pushes the category snapshot into
//! the screen.

use leptos::prelude::*;

use checkbox_form::{parse_snapshot, Category, FormConfig};

use crate::components::CheckboxScreen;

const FORM_CONFIG: &str = include_str!("../assets/form_config.json");
const CATEGORIES: &str = include_str!("../assets/categories.json");

fn load_config() -> FormConfig {
    match FormConfig::from_json(FORM_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("[APP] {e}; using default form config");
            FormConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (categories, set_categories) = signal(Vec::<Category>::new());

    // Push the category snapshot once mounted
    Effect::new(move |_| match parse_snapshot(CATEGORIES) {
        Ok(loaded) => {
            log::info!("[APP] Loaded {} categories", loaded.len());
            set_categories.set(loaded);
        }
        Err(e) => log::error!("[APP] {e}"),
    });

    view! {
        <CheckboxScreen categories=categories config=load_config() />
    }
}
