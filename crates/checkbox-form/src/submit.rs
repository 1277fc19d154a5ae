//! Submit Gate
//!
//! Accepts submit presses only while the form is satisfied and tracks the
//! short acknowledgment flash that follows one.

use log::warn;
use thiserror::Error;

use crate::aggregate::DerivedSignals;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submit is disabled until every required category is checked")]
    Disabled,
}

/// Identifies one flash so a delayed reset can tell whether it is stale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlashToken(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGate {
    flashing: bool,
    presses: u64,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_flashing(&self) -> bool {
        self.flashing
    }

    /// Handle a press; the host schedules `reset` with the returned token
    pub fn press(&mut self, signals: &DerivedSignals) -> Result<FlashToken, SubmitError> {
        if !signals.submit_enabled {
            warn!("submit pressed while disabled");
            return Err(SubmitError::Disabled);
        }
        self.presses += 1;
        self.flashing = true;
        Ok(FlashToken(self.presses))
    }

    /// End the flash started by `token`. Returns whether anything changed.
    pub fn reset(&mut self, token: FlashToken) -> bool {
        if token.0 != self.presses || !self.flashing {
            return false;
        }
        self.flashing = false;
        true
    }
}
