//! Checkbox Form Core
//!
//! Category model, aggregation rule and form state for the checkbox screen.
//! Nothing here touches the DOM, so the whole crate is tested natively.

mod aggregate;
mod category;
mod config;
mod feed;
mod form;
mod submit;

pub use aggregate::{compute_aggregate, select_all, Aggregate, DerivedSignals, IndicatorMode};
pub use category::{Category, CheckboxState};
pub use config::{ConfigError, FormConfig};
pub use feed::{parse_snapshot, FeedError};
pub use form::CheckboxForm;
pub use submit::{FlashToken, SubmitError, SubmitGate};
