//! Category Model
//!
//! Selectable items as delivered by the data source, and the live
//! per-row checkbox state built from them.

use serde::{Deserialize, Serialize};

/// One selectable item (immutable once received)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub title: String,
    /// Must be checked before the form can be submitted
    #[serde(default)]
    pub required: bool,
    /// Driven by the "select all" control
    #[serde(default, alias = "tappedOnSelectAll")]
    pub participates_in_select_all: bool,
}

impl Category {
    pub fn new(title: impl Into<String>, required: bool, participates_in_select_all: bool) -> Self {
        Self {
            title: title.into(),
            required,
            participates_in_select_all,
        }
    }
}

/// Live state of one rendered checkbox
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxState {
    category: Category,
    pub checked: bool,
}

impl CheckboxState {
    /// Fresh, unchecked row for a category
    pub fn new(category: Category) -> Self {
        Self {
            category,
            checked: false,
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.category.title
    }

    pub fn required(&self) -> bool {
        self.category.required
    }

    pub fn participates_in_select_all(&self) -> bool {
        self.category.participates_in_select_all
    }

    /// Whether this row blocks submission
    pub fn blocks_submit(&self) -> bool {
        self.category.required && !self.checked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_unchecked() {
        let state = CheckboxState::new(Category::new("Terms", true, true));
        assert!(!state.checked);
        assert_eq!(state.title(), "Terms");
        assert!(state.blocks_submit());
    }

    #[test]
    fn test_optional_never_blocks() {
        let mut state = CheckboxState::new(Category::new("Newsletter", false, true));
        assert!(!state.blocks_submit());
        state.checked = true;
        assert!(!state.blocks_submit());
    }

    #[test]
    fn test_deserialize_defaults_and_alias() {
        let cat: Category = serde_json::from_str(r#"{"title": "Ads", "tappedOnSelectAll": true}"#).unwrap();
        assert_eq!(cat, Category::new("Ads", false, true));

        let cat: Category = serde_json::from_str(
            r#"{"title": "Terms", "required": true, "participatesInSelectAll": false}"#,
        )
        .unwrap();
        assert_eq!(cat, Category::new("Terms", true, false));
    }
}
