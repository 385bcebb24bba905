//! Read-only projection of the saved collection for display.

use std::fmt;

use status_core::model::Report;

/// Accomplishments longer than this are cut in the saved-reports list.
pub const PREVIEW_CHARS: usize = 100;
pub const PREVIEW_ELLIPSIS: &str = "...";
pub const EMPTY_PLACEHOLDER: &str = "No saved reports yet.";

/// One row of the saved-reports list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEntry {
    /// Position in the stored collection; pass back to `delete_report`.
    pub index: usize,
    pub title: String,
    pub saved_on: String,
    pub health: String,
    pub accomplishments_preview: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportListing {
    Empty,
    Entries(Vec<ReportEntry>),
}

impl ReportListing {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Entries(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }
}

#[must_use]
pub fn render_listing(reports: &[Report]) -> ReportListing {
    if reports.is_empty() {
        return ReportListing::Empty;
    }
    let entries = reports
        .iter()
        .enumerate()
        .map(|(index, report)| ReportEntry {
            index,
            title: report.title().to_owned(),
            saved_on: report.date().to_owned(),
            health: report.health().to_owned(),
            accomplishments_preview: preview(report.accomplishments()),
        })
        .collect();
    ReportListing::Entries(entries)
}

/// First `PREVIEW_CHARS` characters, with an ellipsis when anything was cut.
#[must_use]
pub fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{PREVIEW_ELLIPSIS}", &text[..cut]),
        None => text.to_owned(),
    }
}

impl fmt::Display for ReportListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => writeln!(f, "{EMPTY_PLACEHOLDER}"),
            Self::Entries(entries) => {
                for entry in entries {
                    writeln!(f, "[{}] {}", entry.index, entry.title)?;
                    writeln!(f, "    Saved on: {}", entry.saved_on)?;
                    writeln!(f, "    Health: {}", entry.health)?;
                    writeln!(f, "    Accomplishments: {}", entry.accomplishments_preview)?;
                }
                Ok(())
            }
        }
    }
}
