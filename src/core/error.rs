use std::fmt;

use wasm_bindgen::JsValue;

/// Failures surfaced by menu start-up.
///
/// Everything past start-up degrades silently instead of erroring.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuError {
    /// A required element id is absent from the page.
    ContainerMissing(&'static str),
    /// A DOM call threw.
    Dom(String),
    /// Scene configuration JSON could not be parsed.
    Config(String),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::ContainerMissing(id) => write!(f, "Error: element #{id} not found"),
            MenuError::Dom(msg) => write!(f, "DOM error: {msg}"),
            MenuError::Config(msg) => write!(f, "invalid scene config: {msg}"),
        }
    }
}

impl std::error::Error for MenuError {}

impl From<MenuError> for JsValue {
    fn from(err: MenuError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<JsValue> for MenuError {
    fn from(value: JsValue) -> Self {
        MenuError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
