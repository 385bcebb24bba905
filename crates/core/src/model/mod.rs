mod report;

pub use report::{HEALTH_OPTIONS, MISSING_TITLE_MESSAGE, Report, ReportDraft, ReportError};
