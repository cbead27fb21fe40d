use serde::Deserialize;
use serde_json::Value;

/// Display value authored either as a JSON string or a JSON number.
///
/// Prices and stat values are frequently written as `12.5` rather than
/// `"12.50"`; both render as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct DisplayText(Option<String>);

impl DisplayText {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl From<&str> for DisplayText {
    fn from(value: &str) -> Self {
        Self(Some(value.to_string()))
    }
}

impl TryFrom<Value> for DisplayText {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self(None)),
            Value::String(s) => Ok(Self(Some(s))),
            Value::Number(n) => Ok(Self(Some(n.to_string()))),
            other => Err(format!("expected a string or a number, found {}", other)),
        }
    }
}
