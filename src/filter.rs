// Interface selection: explicit allow-list or the built-in name prefix heuristic

use regex::Regex;

use crate::error::ConfigError;

/// Wired and wireless names from the traditional and predictable Linux naming schemes.
const AUTO_PATTERN: &str = "^(eth|wlan|enp|wlp)";

/// Decides which interfaces are included in a run. Built once at startup, immutable after.
#[derive(Debug, Clone)]
pub enum InterfaceFilter {
    /// Exact, case-sensitive names. Never empty.
    Explicit(Vec<String>),
    /// Names matching [`AUTO_PATTERN`].
    Auto(Regex),
}

impl InterfaceFilter {
    pub fn auto() -> Result<Self, ConfigError> {
        Ok(InterfaceFilter::Auto(Regex::new(AUTO_PATTERN)?))
    }

    /// Explicit filter for a non-empty list, otherwise the auto heuristic.
    pub fn from_names(names: Vec<String>) -> Result<Self, ConfigError> {
        if names.is_empty() {
            Self::auto()
        } else {
            Ok(InterfaceFilter::Explicit(names))
        }
    }

    pub fn should_include(&self, name: &str) -> bool {
        match self {
            InterfaceFilter::Explicit(names) => names.iter().any(|n| n == name),
            InterfaceFilter::Auto(pattern) => pattern.is_match(name),
        }
    }

    /// Short label for logs.
    pub fn mode(&self) -> &'static str {
        match self {
            InterfaceFilter::Explicit(_) => "explicit",
            InterfaceFilter::Auto(_) => "auto",
        }
    }
}
