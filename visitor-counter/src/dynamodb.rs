use {
    std::collections::HashMap,
    futures::{FutureExt, future::BoxFuture},
    tracing::debug,
    aws_sdk_dynamodb::{
        Client,
        error::DisplayErrorContext,
        types::{AttributeValue, ReturnValue},
    },
    visitor_counter_core::{CounterRecord, CounterStore, StoreError},
    crate::config::CounterConfig,
};

const UPDATE_EXPRESSION: &str = "ADD #count :inc";
const COUNT_NAME_PLACEHOLDER: &str = "#count";
const INCREMENT_VALUE_PLACEHOLDER: &str = ":inc";

/// Counter table in DynamoDB. Relies on `ADD` in `UpdateItem`, which creates
/// the item and attribute when absent and applies concurrent adds atomically.
#[derive(Clone, Debug)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
    key_attribute: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>, key_attribute: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            key_attribute: key_attribute.into(),
        }
    }

    pub fn from_config(client: Client, config: &CounterConfig) -> Self {
        Self::new(client, config.table_name.clone(), config.key_attribute.clone())
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    async fn add_one(&self, record: &CounterRecord) -> Result<u64, StoreError> {
        debug!(table = %self.table_name, key = %record.key, "sending atomic increment");
        let output = self.client.update_item()
            .table_name(&self.table_name)
            .key(&self.key_attribute, AttributeValue::S(record.key.clone()))
            .update_expression(UPDATE_EXPRESSION)
            .expression_attribute_names(COUNT_NAME_PLACEHOLDER, &record.count_attribute)
            .expression_attribute_values(INCREMENT_VALUE_PLACEHOLDER, AttributeValue::N("1".to_owned()))
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|err| StoreError::RequestFailed { reason: DisplayErrorContext(&err).to_string() })?;

        parse_updated_count(output.attributes(), &record.count_attribute)
    }
}

impl CounterStore for DynamoDbStore {
    fn increment<'a>(&'a self, record: &'a CounterRecord) -> BoxFuture<'a, Result<u64, StoreError>> {
        self.add_one(record).boxed()
    }
}

/// Extracts the post-update count from the attributes returned with `UPDATED_NEW`.
pub fn parse_updated_count(attributes: Option<&HashMap<String, AttributeValue>>, attribute: &str) -> Result<u64, StoreError> {
    let value = attributes
        .and_then(|attributes| attributes.get(attribute))
        .ok_or_else(|| StoreError::MissingAttribute { attribute: attribute.to_owned() })?;

    match value {
        AttributeValue::N(number) => number.trim().parse::<u64>()
            .map_err(|_| StoreError::InvalidValue { value: number.clone() }),
        other => Err(StoreError::InvalidValue { value: format!("{other:?}") }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes(value: AttributeValue) -> HashMap<String, AttributeValue> {
        HashMap::from([("visitCount".to_owned(), value)])
    }

    #[test]
    fn updated_number() {
        let attributes = attributes(AttributeValue::N("42".to_owned()));
        assert_eq!(Ok(42), parse_updated_count(Some(&attributes), "visitCount"));
    }

    #[test]
    fn no_attributes_returned() {
        assert_eq!(
            Err(StoreError::MissingAttribute { attribute: "visitCount".to_owned() }),
            parse_updated_count(None, "visitCount"),
        );
    }

    #[test]
    fn other_attribute_returned() {
        let attributes = attributes(AttributeValue::N("3".to_owned()));
        assert!(matches!(parse_updated_count(Some(&attributes), "hits"), Err(StoreError::MissingAttribute { .. })));
    }

    #[test]
    fn not_a_counter() {
        let negative = attributes(AttributeValue::N("-1".to_owned()));
        assert_eq!(
            Err(StoreError::InvalidValue { value: "-1".to_owned() }),
            parse_updated_count(Some(&negative), "visitCount"),
        );

        let fractional = attributes(AttributeValue::N("1.5".to_owned()));
        assert!(matches!(parse_updated_count(Some(&fractional), "visitCount"), Err(StoreError::InvalidValue { .. })));

        let string = attributes(AttributeValue::S("42".to_owned()));
        assert!(matches!(parse_updated_count(Some(&string), "visitCount"), Err(StoreError::InvalidValue { .. })));
    }
}
