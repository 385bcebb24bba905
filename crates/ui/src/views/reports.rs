use dioxus::prelude::*;
use services::listing::EMPTY_PLACEHOLDER;
use services::prompter::{MSG_CONFIRM_CLEAR, MSG_CONFIRM_DELETE};
use services::{DeleteOutcome, RecordingPrompter, ReportServiceError};
use status_core::model::HEALTH_OPTIONS;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{FormField, ReportCardVm, ReportFormVm, StatusLine, map_report_cards};

#[derive(Clone, Debug, PartialEq)]
pub(super) struct ReportsData {
    cards: Vec<ReportCardVm>,
}

/// Action waiting on the inline Yes/No banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PendingConfirm {
    Clear,
    Delete(usize),
}

impl PendingConfirm {
    fn message(self) -> &'static str {
        match self {
            PendingConfirm::Clear => MSG_CONFIRM_CLEAR,
            PendingConfirm::Delete(_) => MSG_CONFIRM_DELETE,
        }
    }
}

/// Signals and actions behind the reports page.
#[derive(Clone, Copy)]
pub(super) struct ReportsController {
    pub form: Signal<ReportFormVm>,
    pub status: Signal<Option<StatusLine>>,
    pub pending: Signal<Option<PendingConfirm>>,
    pub resource: Resource<Result<ReportsData, ViewError>>,
    pub save: Callback<()>,
    pub export: Callback<()>,
    /// Resolves the pending confirmation with the user's answer.
    pub answer: Callback<bool>,
}

impl ReportsController {
    pub fn request_clear(self) {
        let mut pending = self.pending;
        pending.set(Some(PendingConfirm::Clear));
    }

    pub fn request_delete(self, index: usize) {
        let mut pending = self.pending;
        pending.set(Some(PendingConfirm::Delete(index)));
    }
}

pub(super) fn use_reports_controller() -> ReportsController {
    let ctx = use_context::<AppContext>();
    let reports = ctx.reports();
    let reports_for_resource = reports.clone();
    let export_dir = ctx.export_dir().to_path_buf();

    let form = use_signal(ReportFormVm::default);
    let status = use_signal(|| None::<StatusLine>);
    let pending = use_signal(|| None::<PendingConfirm>);

    let resource = use_resource(move || {
        let reports = reports_for_resource.clone();
        async move {
            let listing = reports.render().await.map_err(|_| ViewError::Unknown)?;
            Ok::<_, ViewError>(ReportsData {
                cards: map_report_cards(&listing),
            })
        }
    });

    let save = {
        let reports = reports.clone();
        use_callback(move |()| {
            let reports = reports.clone();
            let draft = form().to_draft();
            let mut status = status;
            let mut resource = resource;
            spawn(async move {
                let prompter = RecordingPrompter::approving();
                let result = reports.save_report(draft, &prompter).await;
                match result {
                    Ok(_) => {
                        resource.restart();
                        status.set(prompter.last_notice().map(StatusLine::Info));
                    }
                    Err(ReportServiceError::Validation(_)) => {
                        status.set(prompter.last_notice().map(StatusLine::Error));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "saving report failed");
                        status.set(Some(StatusLine::Error(
                            ViewError::Unknown.message().to_string(),
                        )));
                    }
                }
            });
        })
    };

    let export = {
        let reports = reports.clone();
        use_callback(move |()| {
            let mut status = status;
            let draft = form().to_draft();
            match reports.export_to_dir(&draft, &export_dir) {
                Ok(path) => status.set(Some(StatusLine::Info(format!(
                    "Exported to {}",
                    path.display()
                )))),
                Err(err) => {
                    tracing::error!(error = %err, "exporting report failed");
                    status.set(Some(StatusLine::Error(err.to_string())));
                }
            }
        })
    };

    let answer = use_callback(move |answer: bool| {
        let mut pending = pending;
        let mut status = status;
        let Some(action) = pending() else {
            return;
        };
        pending.set(None);
        let prompter = RecordingPrompter::scripted([answer]);

        match action {
            PendingConfirm::Clear => {
                if reports.confirm_clear_form(&prompter) {
                    let mut form = form;
                    form.write().clear();
                    status.set(None);
                }
            }
            PendingConfirm::Delete(index) => {
                let reports = reports.clone();
                let mut resource = resource;
                spawn(async move {
                    match reports.delete_report(index, &prompter).await {
                        Ok(DeleteOutcome::Removed { .. }) => {
                            resource.restart();
                            status.set(Some(StatusLine::Info("Report deleted.".into())));
                        }
                        Ok(DeleteOutcome::Cancelled) => {}
                        Err(ReportServiceError::IndexOutOfRange { .. }) => {
                            resource.restart();
                            status.set(prompter.last_notice().map(StatusLine::Error));
                        }
                        Err(err) => {
                            tracing::error!(error = %err, index, "deleting report failed");
                            status.set(Some(StatusLine::Error(
                                ViewError::Unknown.message().to_string(),
                            )));
                        }
                    }
                });
            }
        }
    });

    ReportsController {
        form,
        status,
        pending,
        resource,
        save,
        export,
        answer,
    }
}

#[component]
pub fn ReportsView() -> Element {
    let controller = use_reports_controller();
    reports_page(controller)
}

pub(super) fn reports_page(controller: ReportsController) -> Element {
    let ReportsController {
        form,
        status,
        pending,
        resource,
        save,
        export,
        answer,
    } = controller;
    let state = view_state_from_resource(&resource);
    let form_value = form();
    let banner = pending();
    let status_value = status();

    rsx! {
        div { class: "page reports-page",
            h2 { "Weekly Status Report" }

            div { class: "report-form",
                for field in FormField::ALL {
                    ReportFieldInput {
                        key: "{field.id()}",
                        field,
                        value: form_value.value(field).to_string(),
                        on_change: move |value: String| {
                            let mut form = form;
                            form.write().set(field, value);
                        },
                    }
                }
            }

            div { class: "report-actions",
                button {
                    r#type: "button",
                    class: "save",
                    onclick: move |_| save.call(()),
                    "Save Report"
                }
                button {
                    r#type: "button",
                    class: "clear",
                    onclick: move |_| controller.request_clear(),
                    "Clear Form"
                }
                button {
                    r#type: "button",
                    class: "export",
                    onclick: move |_| export.call(()),
                    "Export as Text"
                }
            }

            if let Some(action) = banner {
                div { class: "confirm-banner",
                    p { "{action.message()}" }
                    button {
                        r#type: "button",
                        onclick: move |_| answer.call(true),
                        "Yes"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| answer.call(false),
                        "No"
                    }
                }
            }

            if let Some(line) = status_value {
                p { class: "{line.class()}", "{line.message()}" }
            }

            h3 { "Saved Reports" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        p { class: "empty-placeholder", "{EMPTY_PLACEHOLDER}" }
                    } else {
                        ul { class: "reports-list",
                            for card in data.cards {
                                ReportCard {
                                    card,
                                    on_delete: move |index: usize| controller.request_delete(index),
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
            }
        }
    }
}

#[component]
fn ReportFieldInput(field: FormField, value: String, on_change: EventHandler<String>) -> Element {
    let id = field.id();
    let label = field.label();

    rsx! {
        div { class: "report-field",
            label { r#for: "{id}", "{label}" }
            if field == FormField::Health {
                select {
                    id: "{id}",
                    value: "{value}",
                    onchange: move |evt| on_change.call(evt.value()),
                    option { value: "", "Select health" }
                    for option_value in HEALTH_OPTIONS {
                        option { key: "{option_value}", value: "{option_value}", "{option_value}" }
                    }
                }
            } else if field.is_multiline() {
                textarea {
                    id: "{id}",
                    rows: "4",
                    value: "{value}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
            } else {
                input {
                    id: "{id}",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
            }
        }
    }
}

#[component]
fn ReportCard(card: ReportCardVm, on_delete: EventHandler<usize>) -> Element {
    let index = card.index;

    rsx! {
        li { class: "report-card",
            div { class: "report-card-header",
                div {
                    h5 { "{card.title}" }
                    p { class: "saved-on", "{card.saved_on_label}" }
                }
                button {
                    r#type: "button",
                    class: "delete",
                    onclick: move |_| on_delete.call(index),
                    "Delete"
                }
            }
            div { class: "report-card-body",
                p {
                    strong { "Health:" }
                    " {card.health}"
                }
                p {
                    strong { "Accomplishments:" }
                    " {card.accomplishments}"
                }
            }
        }
    }
}
