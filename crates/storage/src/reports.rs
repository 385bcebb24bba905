//! JSON encoding of the saved report collection.
//!
//! The whole collection lives under a single key as a JSON array, newest
//! report first. Every write replaces the full array.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use status_core::model::{Report, ReportDraft};
use thiserror::Error;

use crate::repository::{KeyValueStore, StorageError};

/// Key the report collection is stored under.
pub const REPORTS_KEY: &str = "weeklyReports";

/// Persisted shape for a report.
///
/// Field names match the stored JSON (`nextWeekPlans`, ...). Missing or
/// `null` fields decode as empty strings and scalar fields as their text, so
/// older or hand-edited entries still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub goal: String,
    #[serde(deserialize_with = "lenient_text")]
    pub manager: String,
    #[serde(deserialize_with = "lenient_text")]
    pub health: String,
    #[serde(deserialize_with = "lenient_text")]
    pub accomplishments: String,
    #[serde(deserialize_with = "lenient_text")]
    pub next_week_plans: String,
    #[serde(deserialize_with = "lenient_text")]
    pub milestones: String,
    #[serde(deserialize_with = "lenient_text")]
    pub issues: String,
    #[serde(deserialize_with = "lenient_text")]
    pub changes: String,
    #[serde(deserialize_with = "lenient_text")]
    pub date: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

impl ReportRecord {
    #[must_use]
    pub fn from_report(report: &Report) -> Self {
        Self {
            title: report.title().to_owned(),
            goal: report.goal().to_owned(),
            manager: report.manager().to_owned(),
            health: report.health().to_owned(),
            accomplishments: report.accomplishments().to_owned(),
            next_week_plans: report.next_week_plans().to_owned(),
            milestones: report.milestones().to_owned(),
            issues: report.issues().to_owned(),
            changes: report.changes().to_owned(),
            date: report.date().to_owned(),
        }
    }

    #[must_use]
    pub fn into_report(self) -> Report {
        let draft = ReportDraft {
            title: self.title,
            goal: self.goal,
            manager: self.manager,
            health: self.health,
            accomplishments: self.accomplishments,
            next_week_plans: self.next_week_plans,
            milestones: self.milestones,
            issues: self.issues,
            changes: self.changes,
        };
        Report::from_persisted(draft, self.date)
    }
}

/// The stored value is not a JSON array.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("stored report collection is malformed: {0}")]
pub struct MalformedStoreError(pub String);

/// Where a loaded collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionSource {
    /// Nothing stored yet.
    Absent,
    /// Decoded from the stored value.
    Stored,
    /// The stored value could not be decoded and was replaced by an empty collection.
    Recovered(MalformedStoreError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedCollection {
    pub reports: Vec<Report>,
    pub source: CollectionSource,
}

impl LoadedCollection {
    #[must_use]
    pub fn was_recovered(&self) -> bool {
        matches!(self.source, CollectionSource::Recovered(_))
    }
}

/// Decode a stored collection.
///
/// Only the array itself has to be well formed. Elements that are not
/// objects are skipped with a warning; the rest keep their order.
///
/// # Errors
///
/// Returns `MalformedStoreError` if `raw` is not a JSON array.
pub fn decode_collection(raw: &str) -> Result<Vec<Report>, MalformedStoreError> {
    let elements: Vec<Value> =
        serde_json::from_str(raw).map_err(|err| MalformedStoreError(err.to_string()))?;
    let reports = elements
        .into_iter()
        .enumerate()
        .filter_map(|(position, element)| {
            match serde_json::from_value::<ReportRecord>(element) {
                Ok(record) => Some(record.into_report()),
                Err(err) => {
                    tracing::warn!(position, error = %err, "skipping stored report that is not an object");
                    None
                }
            }
        })
        .collect();
    Ok(reports)
}

/// Encode a collection for storage.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if encoding fails.
pub fn encode_collection(reports: &[Report]) -> Result<String, StorageError> {
    let records: Vec<ReportRecord> = reports.iter().map(ReportRecord::from_report).collect();
    serde_json::to_string(&records).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Typed access to the report collection inside a key-value store.
#[derive(Clone)]
pub struct ReportCollectionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ReportCollectionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Load the collection, falling back to empty when absent or malformed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the backend itself fails.
    pub async fn load(&self) -> Result<LoadedCollection, StorageError> {
        let Some(raw) = self.kv.get_item(REPORTS_KEY).await? else {
            return Ok(LoadedCollection {
                reports: Vec::new(),
                source: CollectionSource::Absent,
            });
        };

        match decode_collection(&raw) {
            Ok(reports) => Ok(LoadedCollection {
                reports,
                source: CollectionSource::Stored,
            }),
            Err(err) => {
                tracing::warn!(key = REPORTS_KEY, error = %err, "recovering malformed report collection as empty");
                Ok(LoadedCollection {
                    reports: Vec::new(),
                    source: CollectionSource::Recovered(err),
                })
            }
        }
    }

    /// Replace the stored collection.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if encoding or writing fails.
    pub async fn store(&self, reports: &[Report]) -> Result<(), StorageError> {
        let encoded = encode_collection(reports)?;
        self.kv.set_item(REPORTS_KEY, &encoded).await?;
        tracing::debug!(key = REPORTS_KEY, count = reports.len(), "stored report collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;
    use chrono::NaiveDate;

    fn report(title: &str) -> Report {
        ReportDraft {
            title: title.into(),
            next_week_plans: format!("{title} plans"),
            ..ReportDraft::default()
        }
        .validate(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap())
        .unwrap()
    }

    #[test]
    fn encodes_camel_case_field_names() {
        let encoded = encode_collection(&[report("A")]).unwrap();
        assert!(encoded.contains("\"nextWeekPlans\":\"A plans\""), "{encoded}");
        assert!(encoded.contains("\"date\":\"2/3/2024\""), "{encoded}");
    }

    #[test]
    fn decode_reproduces_encoded_sequence() {
        let reports = vec![report("B"), report("A")];
        let decoded = decode_collection(&encode_collection(&reports).unwrap()).unwrap();
        assert_eq!(decoded, reports);
    }

    #[test]
    fn decode_fills_missing_fields() {
        let decoded = decode_collection(r#"[{"title":"Only title"}]"#).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].title(), "Only title");
        assert_eq!(decoded[0].accomplishments(), "");
        assert_eq!(decoded[0].date(), "");
    }

    #[test]
    fn decode_rejects_non_arrays() {
        for raw in ["{}", "null", "42", "not json", "[{"] {
            assert!(decode_collection(raw).is_err(), "{raw} should be malformed");
        }
    }

    #[test]
    fn decode_tolerates_null_and_scalar_fields() {
        let raw = r#"[{"title":"Week 1","health":null,"accomplishments":"kept","goal":3,"issues":false,"date":"1/1/2024"}]"#;
        let decoded = decode_collection(raw).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].title(), "Week 1");
        assert_eq!(decoded[0].health(), "");
        assert_eq!(decoded[0].accomplishments(), "kept");
        assert_eq!(decoded[0].goal(), "3");
        assert_eq!(decoded[0].issues(), "false");
        assert_eq!(decoded[0].date(), "1/1/2024");
    }

    #[test]
    fn decode_skips_elements_that_are_not_objects() {
        let decoded = decode_collection(r#"["x", {"title":"A"}, 7, {"title":"B"}]"#).unwrap();
        let titles: Vec<&str> = decoded.iter().map(Report::title).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn load_distinguishes_absent_and_recovered() {
        let kv = Arc::new(InMemoryRepository::new());
        let store = ReportCollectionStore::new(kv.clone());

        let absent = store.load().await.unwrap();
        assert!(absent.reports.is_empty());
        assert_eq!(absent.source, CollectionSource::Absent);

        kv.set_item(REPORTS_KEY, "{broken").await.unwrap();
        let recovered = store.load().await.unwrap();
        assert!(recovered.reports.is_empty());
        assert!(recovered.was_recovered());

        kv.set_item(REPORTS_KEY, "[]").await.unwrap();
        let empty = store.load().await.unwrap();
        assert!(empty.reports.is_empty());
        assert_eq!(empty.source, CollectionSource::Stored);

        kv.set_item(REPORTS_KEY, r#"[{"title":"Week 1","health":null}]"#)
            .await
            .unwrap();
        let lenient = store.load().await.unwrap();
        assert_eq!(lenient.source, CollectionSource::Stored);
        assert_eq!(lenient.reports.len(), 1);
    }

    #[tokio::test]
    async fn store_then_load_preserves_order() {
        let store = ReportCollectionStore::new(Arc::new(InMemoryRepository::new()));
        let reports = vec![report("newest"), report("older"), report("oldest")];
        store.store(&reports).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.reports, reports);
    }
}
