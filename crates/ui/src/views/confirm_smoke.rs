use dioxus::prelude::{ReadableExt, WritableExt};
use services::RecordingPrompter;
use services::prompter::{MSG_CONFIRM_CLEAR, MSG_CONFIRM_DELETE};
use status_core::model::ReportDraft;

use crate::vm::FormField;

use super::test_harness::{ViewHarness, setup_controlled_harness};

async fn seed(harness: &ViewHarness, titles: &[&str]) {
    for title in titles {
        harness
            .reports
            .save_report(ReportDraft::titled(*title), &RecordingPrompter::approving())
            .await
            .expect("save report");
    }
}

async fn stored_titles(harness: &ViewHarness) -> Vec<String> {
    harness
        .reports
        .list_reports()
        .await
        .expect("list reports")
        .iter()
        .map(|report| report.title().to_owned())
        .collect()
}

#[tokio::test(flavor = "current_thread")]
async fn delete_then_yes_removes_the_card() {
    let (mut harness, handles) = setup_controlled_harness();
    seed(&harness, &["Alpha", "Beta"]).await;
    harness.rebuild();
    harness.settle().await;
    let controller = handles.controller();

    let html = harness.render();
    assert!(html.contains("Beta"), "missing card in {html}");

    harness.act(|| controller.request_delete(0));
    let html = harness.render();
    assert!(html.contains(MSG_CONFIRM_DELETE), "missing banner in {html}");
    assert_eq!(stored_titles(&harness).await, vec!["Beta", "Alpha"]);

    harness.act(|| controller.answer.call(true));
    harness.settle().await;

    assert_eq!(stored_titles(&harness).await, vec!["Alpha"]);
    let html = harness.render();
    assert!(!html.contains(MSG_CONFIRM_DELETE), "banner still shown in {html}");
    assert!(!html.contains("Beta"), "deleted card still shown in {html}");
    assert!(html.contains("Alpha"), "remaining card missing in {html}");
    assert!(html.contains("Report deleted."), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn delete_then_no_keeps_the_card() {
    let (mut harness, handles) = setup_controlled_harness();
    seed(&harness, &["Alpha", "Beta"]).await;
    harness.rebuild();
    harness.settle().await;
    let controller = handles.controller();

    harness.act(|| controller.request_delete(1));
    harness.act(|| controller.answer.call(false));
    harness.settle().await;

    assert_eq!(stored_titles(&harness).await, vec!["Beta", "Alpha"]);
    let html = harness.render();
    assert!(!html.contains(MSG_CONFIRM_DELETE), "banner still shown in {html}");
    assert!(html.contains("Alpha"), "card missing in {html}");
    assert!(html.contains("Beta"), "card missing in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn clear_asks_first_and_resets_the_form_on_yes() {
    let (mut harness, handles) = setup_controlled_harness();
    harness.rebuild();
    harness.settle().await;
    let controller = handles.controller();

    harness.act(|| {
        let mut form = controller.form;
        form.write().set(FormField::Title, "Draft title".into());
        form.write().set(FormField::Issues, "Vendor delay".into());
    });
    assert!(!harness.act(|| controller.form.peek().is_blank()));

    harness.act(|| controller.request_clear());
    let html = harness.render();
    assert!(html.contains(MSG_CONFIRM_CLEAR), "missing banner in {html}");

    harness.act(|| controller.answer.call(false));
    assert_eq!(
        harness.act(|| controller.form.peek().value(FormField::Title).to_owned()),
        "Draft title"
    );

    harness.act(|| controller.request_clear());
    harness.act(|| controller.answer.call(true));

    assert!(harness.act(|| controller.form.peek().is_blank()));
    let html = harness.render();
    assert!(!html.contains(MSG_CONFIRM_CLEAR), "banner still shown in {html}");
    assert!(!html.contains("Draft title"), "form not cleared in {html}");
    assert!(stored_titles(&harness).await.is_empty());
}
