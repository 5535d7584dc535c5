//! Owner-supplied controlled value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value an owner can push into the search bar: either text or a number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchValue {
    Text(String),
    Number(f64),
}

impl SearchValue {
    /// Text the input field displays for this value
    pub fn display_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            // f64's Display already prints the shortest form (42, 2.5)
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Default for SearchValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for SearchValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for SearchValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for SearchValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}
