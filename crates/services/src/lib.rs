#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod listing;
pub mod prompter;
pub mod report_service;

pub use status_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ReportServiceError};
pub use listing::{ReportEntry, ReportListing};
pub use prompter::{Prompter, RecordingPrompter};
pub use report_service::{DeleteOutcome, ReportService, SavedReport, write_export};
