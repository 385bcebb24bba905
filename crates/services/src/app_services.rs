use std::path::{Path, PathBuf};
use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::report_service::ReportService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    export_dir: PathBuf,
    reports: Arc<ReportService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        export_dir: PathBuf,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, export_dir))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, export_dir: PathBuf) -> Self {
        let reports = Arc::new(ReportService::new(clock, Arc::clone(&storage.local)));
        Self {
            export_dir,
            reports,
        }
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    /// Directory exports are written into.
    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}
