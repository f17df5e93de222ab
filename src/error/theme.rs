use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    InvalidPreference(String),
    Storage(String),
    Unavailable(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::InvalidPreference(value) =>
                write!(f, "Invalid theme preference: {:?} (expected light, dark or system)", value),
            ThemeError::Storage(msg) => write!(f, "Storage Error: {}", msg),
            ThemeError::Unavailable(msg) => write!(f, "Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<JsValue> for ThemeError {
    fn from(value: JsValue) -> Self {
        ThemeError::Storage(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
