//! Session configuration.
//!
//! Loads calculator settings from JSON strings (file IO left to the host).

use serde::{Deserialize, Serialize};

/// Calculator session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcConfig {
    /// Maximum number of scrollback lines kept.
    #[serde(default = "default_scrollback_lines")]
    pub scrollback_lines: usize,
    /// Write worked steps (formula and substituted values) to the scrollback.
    #[serde(default = "default_explain_steps")]
    pub explain_steps: bool,
}

fn default_scrollback_lines() -> usize {
    500
}

fn default_explain_steps() -> bool {
    true
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            scrollback_lines: default_scrollback_lines(),
            explain_steps: default_explain_steps(),
        }
    }
}

impl CalcConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
