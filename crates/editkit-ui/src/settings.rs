//! Control Settings
//!
//! Caller-supplied settings are all optional and deserialize from JSON.
//! [`DropZoneConfig::merge`] layers them over the defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::UiError;

/// Width or height as given by the caller
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Pixel count
    Number(f64),
    /// Digit-only pixel count or a CSS length such as `50%`
    Text(String),
}

impl Dimension {
    /// Whether the value is a bare pixel count
    pub fn is_decimal(&self) -> bool {
        match self {
            Dimension::Number(_) => true,
            Dimension::Text(s) => !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()),
        }
    }

    /// Inline style value: pixel counts get a `px` suffix, anything else
    /// passes through for the style layer to accept or ignore.
    pub fn to_css(&self) -> String {
        match self {
            Dimension::Number(n) => format!("{}px", n),
            Dimension::Text(s) if self.is_decimal() => format!("{}px", s),
            Dimension::Text(s) => s.clone(),
        }
    }
}

impl From<u32> for Dimension {
    fn from(n: u32) -> Self {
        Dimension::Number(n.into())
    }
}

impl From<i32> for Dimension {
    fn from(n: i32) -> Self {
        Dimension::Number(n.into())
    }
}

impl From<f64> for Dimension {
    fn from(n: f64) -> Self {
        Dimension::Number(n)
    }
}

impl From<&str> for Dimension {
    fn from(s: &str) -> Self {
        Dimension::Text(s.to_string())
    }
}

/// Read any JSON value, keep it only if it has the field's type
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }

    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::warn!("ignoring setting value {}: {}", value, err);
            Ok(None)
        }
    }
}

/// Settings as supplied at construction.
///
/// A field of the wrong JSON type is dropped, leaving its default in place.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Extra space-separated class tags
    #[serde(deserialize_with = "lenient")]
    pub classes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub disabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub width: Option<Dimension>,
    #[serde(deserialize_with = "lenient")]
    pub height: Option<Dimension>,
    #[serde(deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub multiple: Option<bool>,
    /// Any JSON value; only strings enable filtering
    pub accept: Option<Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn classes(mut self, classes: &str) -> Self {
        self.classes = Some(classes.to_string());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    pub fn accept(mut self, accept: impl Into<Value>) -> Self {
        self.accept = Some(accept.into());
        self
    }
}

/// Fully populated drop zone configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DropZoneConfig {
    pub id: Option<String>,
    pub name: Option<String>,
    pub classes: Vec<String>,
    pub disabled: bool,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub text: String,
    pub multiple: bool,
    /// Comma separated suffix patterns, `None` accepts every file
    pub accept: Option<String>,
}

impl DropZoneConfig {
    pub const DEFAULT_HEIGHT: u32 = 100;
    pub const DEFAULT_TEXT: &'static str = "Drop an image here";

    /// Layer `settings` over the defaults; supplied keys win
    pub fn merge(settings: Settings) -> Self {
        let defaults = Self::default();

        Self {
            id: settings.id.or(defaults.id),
            name: settings.name.or(defaults.name),
            classes: settings
                .classes
                .map(|c| c.split_whitespace().map(str::to_string).collect())
                .unwrap_or(defaults.classes),
            disabled: settings.disabled.unwrap_or(defaults.disabled),
            width: settings.width.or(defaults.width),
            height: settings.height.or(defaults.height),
            text: settings.text.unwrap_or(defaults.text),
            multiple: settings.multiple.unwrap_or(defaults.multiple),
            accept: match settings.accept {
                Some(Value::String(accept)) => Some(accept),
                _ => defaults.accept,
            },
        }
    }
}

impl Default for DropZoneConfig {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            classes: Vec::new(),
            disabled: false,
            width: None,
            height: Some(Self::DEFAULT_HEIGHT.into()),
            text: Self::DEFAULT_TEXT.to_string(),
            multiple: false,
            accept: None,
        }
    }
}
