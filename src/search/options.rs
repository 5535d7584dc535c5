//! Owner configuration for the search bar
//!
//! Options are plain data so a host can keep them in its settings file. The
//! widget never trusts them as-is: [`SearchBarOptions::normalized`] folds
//! malformed values back to safe defaults instead of failing.

use super::notifier::NotifyStrategy;
use super::value::SearchValue;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_PLACEHOLDER: &str = "Search..";
pub const DEFAULT_MIN_CHARACTER_LENGTH: i64 = 3;
pub const DEFAULT_DEBOUNCE_TIME_MS: i64 = 0;

/// What a non-positive debounce period means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ZeroDelayPolicy {
    /// Call the owner synchronously on every qualifying keystroke
    #[default]
    Immediate,
    /// Never call the owner
    Suppress,
}

/// Owner-supplied search bar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchBarOptions {
    /// Hint shown while the input is empty
    pub placeholder: String,

    /// Quiet period before the owner is notified
    #[serde(deserialize_with = "debounce_millis")]
    pub debounce_time_ms: i64,

    /// Minimum number of characters before the owner is notified at all
    #[serde(deserialize_with = "min_length")]
    pub min_character_length: i64,

    /// Enables the clear affordance
    pub show_clear_button: bool,

    /// Owner-reported loading flag
    pub is_loading: bool,

    /// Controlled value
    pub value: Option<SearchValue>,

    /// Meaning of `debounce_time_ms <= 0`
    pub zero_delay: ZeroDelayPolicy,

    /// Desired width; fills the available width when unset
    pub width: Option<f32>,
}

impl Default for SearchBarOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            debounce_time_ms: DEFAULT_DEBOUNCE_TIME_MS,
            min_character_length: DEFAULT_MIN_CHARACTER_LENGTH,
            show_clear_button: true,
            is_loading: false,
            value: None,
            zero_delay: ZeroDelayPolicy::default(),
            width: None,
        }
    }
}

impl SearchBarOptions {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn debounce_time_ms(mut self, millis: i64) -> Self {
        self.debounce_time_ms = millis;
        self
    }

    pub fn min_character_length(mut self, length: i64) -> Self {
        self.min_character_length = length;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    pub fn value(mut self, value: impl Into<SearchValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn zero_delay(mut self, policy: ZeroDelayPolicy) -> Self {
        self.zero_delay = policy;
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Fold malformed values back to safe defaults
    pub fn normalized(&self) -> NormalizedOptions {
        let min_character_length = if self.min_character_length < 0 {
            tracing::warn!(
                "Negative minCharacterLength {}, using {}",
                self.min_character_length,
                DEFAULT_MIN_CHARACTER_LENGTH
            );
            DEFAULT_MIN_CHARACTER_LENGTH as usize
        } else {
            usize::try_from(self.min_character_length).unwrap_or(usize::MAX)
        };

        let width = self.width.filter(|w| w.is_finite() && *w >= 0.0);

        NormalizedOptions {
            placeholder: self.placeholder.clone(),
            strategy: NotifyStrategy::from_period(self.debounce_time_ms, self.zero_delay),
            min_character_length,
            show_clear_button: self.show_clear_button,
            is_loading: self.is_loading,
            value: self
                .value
                .as_ref()
                .map(SearchValue::display_text)
                .unwrap_or_default(),
            width,
        }
    }
}

/// Options after normalisation, ready for the widget to consume
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOptions {
    pub placeholder: String,
    pub strategy: NotifyStrategy,
    pub min_character_length: usize,
    pub show_clear_button: bool,
    pub is_loading: bool,
    /// Display text of the controlled value (`None` becomes empty)
    pub value: String,
    pub width: Option<f32>,
}

fn debounce_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_integer(&raw, "debounceTimeMs", DEFAULT_DEBOUNCE_TIME_MS))
}

fn min_length<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_integer(&raw, "minCharacterLength", DEFAULT_MIN_CHARACTER_LENGTH))
}

/// Accept integers, floats (truncated) and numeric strings
fn lenient_integer(raw: &serde_json::Value, field: &str, fallback: i64) -> i64 {
    use serde_json::Value;

    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(finite_to_i64)),
        Value::String(s) => s.trim().parse::<f64>().ok().and_then(finite_to_i64),
        Value::Null => Some(fallback),
        _ => None,
    };

    parsed.unwrap_or_else(|| {
        tracing::warn!("Ignoring malformed {} value {}, using {}", field, raw, fallback);
        fallback
    })
}

fn finite_to_i64(f: f64) -> Option<i64> {
    f.is_finite().then(|| f as i64)
}
