//! UI Components
//!
//! Leptos components making up the checkbox screen.

mod checkbox_row;
mod checkbox_screen;
mod select_all_button;
mod submit_button;

pub use checkbox_row::CheckboxRow;
pub use checkbox_screen::CheckboxScreen;
pub use select_all_button::SelectAllButton;
pub use submit_button::SubmitButton;
