// One line of status-bar output (waybar custom module JSON)

use serde::Serialize;

use super::Rates;
use crate::format::human_readable;

/// Status record written to stdout. `tooltip` and `class` are only present on errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl StatusLine {
    /// Normal sample: rx and tx, each right-aligned in four columns.
    pub fn rates(rates: Rates) -> Self {
        Self {
            text: format!(
                "{:>4}  {:>4} ",
                human_readable(rates.rx),
                human_readable(rates.tx)
            ),
            tooltip: None,
            class: None,
        }
    }

    pub fn error(text: &str, tooltip: &str) -> Self {
        Self {
            text: format!("⚠ {}", text),
            tooltip: Some(tooltip.to_string()),
            class: Some("error".to_string()),
        }
    }
}
