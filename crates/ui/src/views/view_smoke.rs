use std::sync::Arc;

use services::RecordingPrompter;
use status_core::model::ReportDraft;
use storage::REPORTS_KEY;
use storage::repository::{InMemoryRepository, KeyValueStore, StorageError};

use super::test_harness::{setup_view_harness, setup_view_harness_with_store};

#[tokio::test(flavor = "current_thread")]
async fn reports_view_smoke_renders_form_and_placeholder() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Weekly Status Report"), "missing heading in {html}");
    assert!(html.contains("Report Title"), "missing title field in {html}");
    assert!(html.contains("Changes Since Last Report"), "missing changes field in {html}");
    assert!(html.contains("Save Report"), "missing save button in {html}");
    assert!(html.contains("No saved reports yet."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_smoke_renders_saved_report_card() {
    let mut harness = setup_view_harness();
    let draft = ReportDraft {
        title: "Sprint 4".into(),
        health: "Green".into(),
        accomplishments: "A".repeat(150),
        ..ReportDraft::default()
    };
    harness
        .reports
        .save_report(draft, &RecordingPrompter::approving())
        .await
        .expect("save report");

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Sprint 4"), "missing title in {html}");
    assert!(html.contains("Saved on: 11/14/2023"), "missing date in {html}");
    assert!(html.contains("Green"), "missing health in {html}");
    let truncated = format!("{}...", "A".repeat(100));
    assert!(html.contains(&truncated), "missing truncated text in {html}");
    assert!(!html.contains(&"A".repeat(101)), "text was not truncated in {html}");
    assert!(html.contains("Delete"), "missing delete button in {html}");
    assert!(!html.contains("No saved reports yet."), "unexpected placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_smoke_treats_corrupt_store_as_empty() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.set_item(REPORTS_KEY, "[{").await.expect("seed corrupt value");
    let mut harness = setup_view_harness_with_store(repo);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("No saved reports yet."), "missing placeholder in {html}");
}

struct FailingStore;

#[async_trait::async_trait]
impl KeyValueStore for FailingStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn reports_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_store(Arc::new(FailingStore));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}
