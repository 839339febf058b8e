use serde::{Deserialize, Deserializer, de::IgnoredAny};

/// Event delivered by the hosting runtime. The handler is triggered by it
/// but never reads any of its fields, so any payload shape is accepted.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct InvocationEvent;

impl<'de> Deserialize<'de> for InvocationEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_any_payload() {
        for payload in ["{}", "null", "\"ping\"", "[1, 2]", r#"{"httpMethod":"GET","path":"/count"}"#] {
            let event: InvocationEvent = serde_json::from_str(payload).unwrap();
            assert_eq!(InvocationEvent, event);
        }
    }
}
