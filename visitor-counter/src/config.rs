use {
    std::{io, path::{Path, PathBuf}},
    tokio::fs,
    serde::Deserialize,
    thiserror::Error,
    visitor_counter_core::{CounterRecord, record::{DEFAULT_RECORD_KEY, DEFAULT_COUNT_ATTRIBUTE}},
};

pub const DEFAULT_CONFIG_FILE: &str = "counter.yaml";
pub const DEFAULT_TABLE_NAME: &str = "VisitorCount";
pub const DEFAULT_KEY_ATTRIBUTE: &str = "id";

/// Location of the counter record. Every field falls back to the values the
/// site was originally deployed with.
#[derive(Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    #[serde(skip_deserializing)]
    pub config_path: Option<PathBuf>,

    pub table_name: String,
    pub key_attribute: String,
    pub key: String,
    pub count_attribute: String,
}

#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0:?}")]
    FailedToRead(io::Error),

    #[error("failed to parse config file: {reason}")]
    FailedToParse {
        reason: String,
    },

    #[error("config field is empty: {field}")]
    EmptyField {
        field: &'static str,
    },
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            table_name: DEFAULT_TABLE_NAME.to_owned(),
            key_attribute: DEFAULT_KEY_ATTRIBUTE.to_owned(),
            key: DEFAULT_RECORD_KEY.to_owned(),
            count_attribute: DEFAULT_COUNT_ATTRIBUTE.to_owned(),
        }
    }
}

impl CounterConfig {
    pub async fn load(file_path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let file_path = file_path.as_ref();
        let contents = fs::read(file_path).await
            .map_err(ConfigLoadError::FailedToRead)?;
        let mut config = Self::parse(&contents)?;
        config.config_path = Some(file_path.to_owned());
        Ok(config)
    }

    /// Missing file means defaults. A file that exists but cannot be read or
    /// parsed is still an error.
    pub async fn load_or_default(file_path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        match Self::load(file_path).await {
            Err(ConfigLoadError::FailedToRead(err)) if err.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn parse(contents: &[u8]) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yml::from_slice(contents)
            .map_err(|err| ConfigLoadError::FailedToParse { reason: err.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    pub fn record(&self) -> CounterRecord {
        CounterRecord::new(self.key.clone(), self.count_attribute.clone())
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        let fields = [
            ("table_name", &self.table_name),
            ("key_attribute", &self.key_attribute),
            ("key", &self.key),
            ("count_attribute", &self.count_attribute),
        ];
        match fields.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigLoadError::EmptyField { field }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = CounterConfig::parse(b"{}").unwrap();
        assert_eq!(CounterConfig::default(), config);
        assert_eq!(CounterRecord::site_counter(), config.record());
    }

    #[test]
    fn partial_override() {
        let config = CounterConfig::parse(b"table_name: BlogVisits\nkey: blogCounter\n").unwrap();
        assert_eq!("BlogVisits", config.table_name);
        assert_eq!("id", config.key_attribute);
        assert_eq!(CounterRecord::new("blogCounter", "visitCount"), config.record());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = CounterConfig::parse(b"tabel_name: Typo\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FailedToParse { .. }), "unexpected error: {err:?}");
    }

    #[test]
    fn empty_field_is_rejected() {
        let err = CounterConfig::parse(b"count_attribute: ''\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::EmptyField { field: "count_attribute" }), "unexpected error: {err:?}");
    }
}
