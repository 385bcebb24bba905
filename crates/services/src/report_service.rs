use std::path::{Path, PathBuf};
use std::sync::Arc;

use status_core::ExportDocument;
use status_core::model::{Report, ReportDraft};
use storage::repository::KeyValueStore;
use storage::{LoadedCollection, ReportCollectionStore};

use crate::Clock;
use crate::error::ReportServiceError;
use crate::listing::{ReportListing, render_listing};
use crate::prompter::{
    MSG_CONFIRM_CLEAR, MSG_CONFIRM_DELETE, MSG_MISSING_REPORT, MSG_SAVED, Prompter,
};

/// Result of a successful save: the stored report plus the refreshed listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedReport {
    pub report: Report,
    pub listing: ReportListing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing changed.
    Cancelled,
    Removed {
        report: Report,
        listing: ReportListing,
    },
}

/// The report store: saves, lists, deletes, renders and exports weekly reports.
///
/// Every write reads the whole collection, changes it in memory and writes it
/// back. Concurrent writers are last-writer-wins.
#[derive(Clone)]
pub struct ReportService {
    clock: Clock,
    reports: ReportCollectionStore,
}

impl ReportService {
    #[must_use]
    pub fn new(clock: Clock, local: Arc<dyn KeyValueStore>) -> Self {
        Self {
            clock,
            reports: ReportCollectionStore::new(local),
        }
    }

    /// Validate a draft and store it as the newest report.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Validation` if the title is missing (the
    /// prompter is told and nothing is written), or `Storage` on persistence failures.
    pub async fn save_report(
        &self,
        draft: ReportDraft,
        prompter: &dyn Prompter,
    ) -> Result<SavedReport, ReportServiceError> {
        let report = match draft.validate(self.clock.today()) {
            Ok(report) => report,
            Err(err) => {
                prompter.notify(&err.to_string());
                return Err(err.into());
            }
        };

        let mut reports = self.reports.load().await?.reports;
        reports.insert(0, report.clone());
        self.reports.store(&reports).await?;
        tracing::info!(title = report.title(), total = reports.len(), "saved report");

        prompter.notify(MSG_SAVED);
        Ok(SavedReport {
            report,
            listing: render_listing(&reports),
        })
    }

    /// Saved reports, newest first. Absent or malformed storage yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Storage` if the backend cannot be read.
    pub async fn list_reports(&self) -> Result<Vec<Report>, ReportServiceError> {
        Ok(self.reports.load().await?.reports)
    }

    /// Like `list_reports`, but also says whether the collection was recovered
    /// from a malformed stored value.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Storage` if the backend cannot be read.
    pub async fn load_reports(&self) -> Result<LoadedCollection, ReportServiceError> {
        Ok(self.reports.load().await?)
    }

    /// Delete the report at `index` after the user confirms.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::IndexOutOfRange` (without prompting for
    /// confirmation) if `index` is past the end, or `Storage` on persistence failures.
    pub async fn delete_report(
        &self,
        index: usize,
        prompter: &dyn Prompter,
    ) -> Result<DeleteOutcome, ReportServiceError> {
        let mut reports = self.reports.load().await?.reports;
        if index >= reports.len() {
            prompter.notify(MSG_MISSING_REPORT);
            return Err(ReportServiceError::IndexOutOfRange {
                index,
                len: reports.len(),
            });
        }

        if !prompter.confirm(MSG_CONFIRM_DELETE) {
            tracing::debug!(index, "report deletion cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        let report = reports.remove(index);
        self.reports.store(&reports).await?;
        tracing::info!(index, title = report.title(), remaining = reports.len(), "deleted report");

        Ok(DeleteOutcome::Removed {
            report,
            listing: render_listing(&reports),
        })
    }

    /// Current collection projected for display.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Storage` if the backend cannot be read.
    pub async fn render(&self) -> Result<ReportListing, ReportServiceError> {
        let reports = self.list_reports().await?;
        Ok(render_listing(&reports))
    }

    /// Render a plain-text export of the draft. The collection is not touched.
    #[must_use]
    pub fn export_text(&self, draft: &ReportDraft) -> ExportDocument {
        ExportDocument::render(draft, self.clock.today(), self.clock.utc_today())
    }

    /// Render a draft and write it into `dir`, returning the written path.
    ///
    /// # Errors
    ///
    /// Returns `ReportServiceError::Export` if the file cannot be written.
    pub fn export_to_dir(
        &self,
        draft: &ReportDraft,
        dir: &Path,
    ) -> Result<PathBuf, ReportServiceError> {
        let document = self.export_text(draft);
        let path = write_export(&document, dir)?;
        tracing::info!(path = %path.display(), "exported report");
        Ok(path)
    }

    /// Ask whether the form should be cleared. Storage is not touched.
    #[must_use]
    pub fn confirm_clear_form(&self, prompter: &dyn Prompter) -> bool {
        prompter.confirm(MSG_CONFIRM_CLEAR)
    }
}

/// Write an export document into `dir`, creating the directory if needed.
///
/// # Errors
///
/// Returns the I/O error if the directory or file cannot be written.
pub fn write_export(document: &ExportDocument, dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(document.file_name());
    std::fs::write(&path, document.contents())?;
    Ok(path)
}
