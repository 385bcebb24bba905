use std::path::{Path, PathBuf};
use std::sync::Arc;

use services::ReportService;

pub trait UiApp: Send + Sync {
    fn reports(&self) -> Arc<ReportService>;
    fn export_dir(&self) -> PathBuf;
}

#[derive(Clone)]
pub struct AppContext {
    reports: Arc<ReportService>,
    export_dir: Arc<PathBuf>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            reports: app.reports(),
            export_dir: Arc::new(app.export_dir()),
        }
    }

    #[must_use]
    pub fn reports(&self) -> Arc<ReportService> {
        Arc::clone(&self.reports)
    }

    #[must_use]
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
