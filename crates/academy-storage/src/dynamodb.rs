//! DynamoDB-backed academy configuration store.
//!
//! Records are keyed by the string attribute `academy_id`. Attribute values are
//! coerced leniently: numbers and numeric strings for `interval`, truthiness for
//! the boolean flags, strings for `name` and `timezone`.

use crate::traits::{ConfigStore, StorageError, StorageResult};
use academy_core::AcademyRecord;
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

const KEY_ATTRIBUTE: &str = "academy_id";

/// DynamoDB config store
#[derive(Clone)]
pub struct DynamoConfigStore {
    client: DynamoClient,
    table: String,
}

impl DynamoConfigStore {
    /// Create a store for `table`, loading credentials from the default AWS chain.
    pub async fn new(table: String, region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;

        Self::with_client(DynamoClient::new(&config), table)
    }

    pub fn with_client(client: DynamoClient, table: String) -> Self {
        Self { client, table }
    }
}

#[async_trait]
impl ConfigStore for DynamoConfigStore {
    async fn get_academy(&self, academy_id: &str) -> StorageResult<Option<AcademyRecord>> {
        let start = std::time::Instant::now();

        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(KEY_ATTRIBUTE, AttributeValue::S(academy_id.to_string()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %DisplayErrorContext(&e),
                    table = %self.table,
                    academy_id = %academy_id,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "DynamoDB get_item failed"
                );
                StorageError::LookupFailed(DisplayErrorContext(&e).to_string())
            })?;

        tracing::debug!(
            table = %self.table,
            academy_id = %academy_id,
            found = output.item().is_some(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "DynamoDB get_item successful"
        );

        output.item().map(record_from_item).transpose()
    }

    async fn ping(&self) -> StorageResult<()> {
        self.client
            .describe_table()
            .table_name(&self.table)
            .send()
            .await
            .map(drop)
            .map_err(|e| StorageError::BackendError(DisplayErrorContext(&e).to_string()))
    }

    fn backend_name(&self) -> &'static str {
        "dynamodb"
    }
}

/// Convert a raw DynamoDB item into an [`AcademyRecord`].
pub fn record_from_item(item: &HashMap<String, AttributeValue>) -> StorageResult<AcademyRecord> {
    let interval = item.get("interval").map(attribute_as_interval).transpose()?;

    Ok(AcademyRecord {
        interval,
        shuffle: item.get("shuffle").map(attribute_truthiness),
        loop_playback: item.get("loop").map(attribute_truthiness),
        fade_transition: item.get("fade_transition").map(attribute_truthiness),
        name: item.get("name").and_then(|v| attribute_as_string("name", v)),
        timezone: item
            .get("timezone")
            .and_then(|v| attribute_as_string("timezone", v)),
    })
}

fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

fn attribute_as_interval(value: &AttributeValue) -> StorageResult<i64> {
    let parsed = match value {
        AttributeValue::N(n) => parse_integer(n),
        AttributeValue::S(s) => s.trim().parse::<i64>().ok(),
        AttributeValue::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };

    parsed.ok_or_else(|| {
        StorageError::InvalidRecord(format!("interval is not an integer: {:?}", value))
    })
}

fn attribute_truthiness(value: &AttributeValue) -> bool {
    match value {
        AttributeValue::Bool(b) => *b,
        AttributeValue::Null(_) => false,
        AttributeValue::N(n) => n.trim().parse::<f64>().map(|f| f != 0.0).unwrap_or(true),
        AttributeValue::S(s) => !s.is_empty(),
        AttributeValue::B(b) => !b.as_ref().is_empty(),
        AttributeValue::L(l) => !l.is_empty(),
        AttributeValue::M(m) => !m.is_empty(),
        AttributeValue::Ss(s) => !s.is_empty(),
        AttributeValue::Ns(n) => !n.is_empty(),
        AttributeValue::Bs(b) => !b.is_empty(),
        _ => true,
    }
}

fn attribute_as_string(field: &str, value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::S(s) => Some(s.clone()),
        other => {
            tracing::warn!(field = %field, value = ?other, "Ignoring non-string config attribute");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(pairs: Vec<(&str, AttributeValue)>) -> HashMap<String, AttributeValue> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_full_record() {
        let record = record_from_item(&item(vec![
            ("academy_id", AttributeValue::S("gym1".to_string())),
            ("interval", AttributeValue::N("30".to_string())),
            ("shuffle", AttributeValue::Bool(false)),
            ("loop", AttributeValue::Bool(true)),
            ("fade_transition", AttributeValue::Bool(false)),
            ("name", AttributeValue::S("Iron Gym".to_string())),
            ("timezone", AttributeValue::S("America/Recife".to_string())),
        ]))
        .unwrap();

        assert_eq!(record.interval, Some(30));
        assert_eq!(record.shuffle, Some(false));
        assert_eq!(record.loop_playback, Some(true));
        assert_eq!(record.fade_transition, Some(false));
        assert_eq!(record.name.as_deref(), Some("Iron Gym"));
        assert_eq!(record.timezone.as_deref(), Some("America/Recife"));
    }

    #[test]
    fn test_missing_fields_stay_unset() {
        let record = record_from_item(&item(vec![(
            "academy_id",
            AttributeValue::S("gym1".to_string()),
        )]))
        .unwrap();
        assert_eq!(record, AcademyRecord::default());
    }

    #[test]
    fn test_interval_coercion() {
        let record =
            record_from_item(&item(vec![("interval", AttributeValue::N("12.9".to_string()))]))
                .unwrap();
        assert_eq!(record.interval, Some(12));

        let record =
            record_from_item(&item(vec![("interval", AttributeValue::S("20".to_string()))]))
                .unwrap();
        assert_eq!(record.interval, Some(20));

        let result =
            record_from_item(&item(vec![("interval", AttributeValue::S("fast".to_string()))]));
        assert!(matches!(result, Err(StorageError::InvalidRecord(_))));
    }

    #[test]
    fn test_boolean_truthiness() {
        let record = record_from_item(&item(vec![
            ("shuffle", AttributeValue::N("0".to_string())),
            ("loop", AttributeValue::S("no".to_string())),
            ("fade_transition", AttributeValue::Null(true)),
        ]))
        .unwrap();
        assert_eq!(record.shuffle, Some(false));
        assert_eq!(record.loop_playback, Some(true));
        assert_eq!(record.fade_transition, Some(false));
    }

    #[test]
    fn test_non_string_name_is_ignored() {
        let record =
            record_from_item(&item(vec![("name", AttributeValue::N("7".to_string()))])).unwrap();
        assert_eq!(record.name, None);
    }
}
