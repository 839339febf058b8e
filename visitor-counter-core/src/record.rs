pub const DEFAULT_RECORD_KEY: &str = "siteCounter";
pub const DEFAULT_COUNT_ATTRIBUTE: &str = "visitCount";

/// Identifies the single persisted row holding the visit count.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct CounterRecord {
    pub key: String,
    pub count_attribute: String,
}

impl CounterRecord {
    pub fn new(key: impl Into<String>, count_attribute: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            count_attribute: count_attribute.into(),
        }
    }

    pub fn site_counter() -> Self {
        Self::new(DEFAULT_RECORD_KEY, DEFAULT_COUNT_ATTRIBUTE)
    }
}

impl Default for CounterRecord {
    fn default() -> Self {
        Self::site_counter()
    }
}
