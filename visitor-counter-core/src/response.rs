use serde::{Serialize, Deserialize};

const STATUS_OK: u16 = 200;
const MESSAGE_PREFIX: &str = "Visitor Count: ";

/// HTTP-style response returned to the hosting runtime.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CounterResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl CounterResponse {
    /// Body is the JSON encoding of the message string, quotes included.
    pub fn visitor_count(count: u64) -> Self {
        Self {
            status_code: STATUS_OK,
            body: serde_json::Value::String(format!("{MESSAGE_PREFIX}{count}")).to_string(),
        }
    }

    pub fn message(&self) -> Option<String> {
        serde_json::from_str(&self.body).ok()
    }

    /// Reads the count back out of a body built by [`CounterResponse::visitor_count`].
    /// Not part of what the runtime returns to callers.
    pub fn count(&self) -> Option<u64> {
        self.message()?.strip_prefix(MESSAGE_PREFIX)?.parse().ok()
    }
}
