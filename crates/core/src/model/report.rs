use chrono::NaiveDate;
use thiserror::Error;

use crate::time::format_report_date;

/// One saved weekly status entry.
///
/// Reports are immutable once created; the only way to change the stored
/// collection is to save a new report or delete an existing one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    title: String,
    goal: String,
    manager: String,
    health: String,
    accomplishments: String,
    next_week_plans: String,
    milestones: String,
    issues: String,
    changes: String,
    date: String,
}

/// Form values captured before a report is saved or exported.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub title: String,
    pub goal: String,
    pub manager: String,
    pub health: String,
    pub accomplishments: String,
    pub next_week_plans: String,
    pub milestones: String,
    pub issues: String,
    pub changes: String,
}

/// Shown to the user when a report is saved without a title.
pub const MISSING_TITLE_MESSAGE: &str = "Please enter a report title";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportError {
    #[error("{}", MISSING_TITLE_MESSAGE)]
    MissingTitle,
}

/// Values offered by the health selector.
pub const HEALTH_OPTIONS: [&str; 3] = ["Green", "Yellow", "Red"];

impl ReportDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Validate the draft and stamp it with the save date.
    ///
    /// Field values are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MissingTitle` if the title is empty or blank.
    pub fn validate(self, saved_on: NaiveDate) -> Result<Report, ReportError> {
        if self.title.trim().is_empty() {
            return Err(ReportError::MissingTitle);
        }
        let date = format_report_date(saved_on);
        Ok(Report::from_persisted(self, date))
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl Report {
    /// Rebuild a report from stored values. Stored reports are not re-validated.
    #[must_use]
    pub fn from_persisted(draft: ReportDraft, date: String) -> Self {
        let ReportDraft {
            title,
            goal,
            manager,
            health,
            accomplishments,
            next_week_plans,
            milestones,
            issues,
            changes,
        } = draft;
        Self {
            title,
            goal,
            manager,
            health,
            accomplishments,
            next_week_plans,
            milestones,
            issues,
            changes,
            date,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn manager(&self) -> &str {
        &self.manager
    }

    #[must_use]
    pub fn health(&self) -> &str {
        &self.health
    }

    #[must_use]
    pub fn accomplishments(&self) -> &str {
        &self.accomplishments
    }

    #[must_use]
    pub fn next_week_plans(&self) -> &str {
        &self.next_week_plans
    }

    #[must_use]
    pub fn milestones(&self) -> &str {
        &self.milestones
    }

    #[must_use]
    pub fn issues(&self) -> &str {
        &self.issues
    }

    #[must_use]
    pub fn changes(&self) -> &str {
        &self.changes
    }

    /// Localized date the report was saved on.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Copy the editable fields back out, e.g. to export a saved report.
    #[must_use]
    pub fn to_draft(&self) -> ReportDraft {
        ReportDraft {
            title: self.title.clone(),
            goal: self.goal.clone(),
            manager: self.manager.clone(),
            health: self.health.clone(),
            accomplishments: self.accomplishments.clone(),
            next_week_plans: self.next_week_plans.clone(),
            milestones: self.milestones.clone(),
            issues: self.issues.clone(),
            changes: self.changes.clone(),
        }
    }
}
