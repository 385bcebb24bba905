//! Plain-text rendering of a report for download.

use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::model::ReportDraft;
use crate::time::{format_iso_date, format_report_date};

pub const EXPORT_MIME_TYPE: &str = "text/plain";
pub const EXPORT_HEADER: &str = "WEEKLY STATUS REPORT";

/// A rendered export, ready to be offered to the user as a file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportDocument {
    file_name: String,
    mime_type: &'static str,
    contents: String,
}

impl ExportDocument {
    /// Render a draft. The draft does not need to be saved.
    ///
    /// `local_date` goes on the `Date:` line; `file_date` (the UTC day) names
    /// the file.
    #[must_use]
    pub fn render(draft: &ReportDraft, local_date: NaiveDate, file_date: NaiveDate) -> Self {
        Self {
            file_name: export_file_name(file_date),
            mime_type: EXPORT_MIME_TYPE,
            contents: render_text(draft, local_date),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("weekly-status-report-{}.txt", format_iso_date(today))
}

fn render_text(draft: &ReportDraft, today: NaiveDate) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{EXPORT_HEADER}");
    let _ = writeln!(out, "===================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Report Title: {}", draft.title);
    let _ = writeln!(out, "Date: {}", format_report_date(today));
    let _ = writeln!(out, "Project Manager: {}", draft.manager);
    let _ = writeln!(out, "Overall Project Health: {}", draft.health);

    let sections = [
        ("PROJECT GOAL", &draft.goal),
        ("ACCOMPLISHMENTS THIS WEEK", &draft.accomplishments),
        ("PLANS FOR NEXT WEEK", &draft.next_week_plans),
        ("UPCOMING MILESTONES", &draft.milestones),
        ("ISSUES & RISK MITIGATION", &draft.issues),
        ("CHANGES SINCE LAST REPORT", &draft.changes),
    ];
    for (label, value) in sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{label}:");
        let _ = writeln!(out, "{value}");
    }
    out
}
