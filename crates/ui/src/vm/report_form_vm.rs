use status_core::model::ReportDraft;

/// Stable identifiers of the report form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Title,
    Goal,
    Manager,
    Health,
    Accomplishments,
    NextWeekPlans,
    Milestones,
    Issues,
    Changes,
}

impl FormField {
    pub const ALL: [FormField; 9] = [
        FormField::Title,
        FormField::Goal,
        FormField::Manager,
        FormField::Health,
        FormField::Accomplishments,
        FormField::NextWeekPlans,
        FormField::Milestones,
        FormField::Issues,
        FormField::Changes,
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Goal => "goal",
            FormField::Manager => "manager",
            FormField::Health => "health",
            FormField::Accomplishments => "accomplishments",
            FormField::NextWeekPlans => "nextWeekPlans",
            FormField::Milestones => "milestones",
            FormField::Issues => "issues",
            FormField::Changes => "changes",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Report Title",
            FormField::Goal => "Project Goal",
            FormField::Manager => "Project Manager",
            FormField::Health => "Overall Project Health",
            FormField::Accomplishments => "Accomplishments This Week",
            FormField::NextWeekPlans => "Plans for Next Week",
            FormField::Milestones => "Upcoming Milestones",
            FormField::Issues => "Issues & Risk Mitigation",
            FormField::Changes => "Changes Since Last Report",
        }
    }

    /// Long-form fields are edited in a textarea.
    #[must_use]
    pub fn is_multiline(self) -> bool {
        !matches!(
            self,
            FormField::Title | FormField::Manager | FormField::Health
        )
    }
}

/// Current values of the report form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportFormVm {
    draft: ReportDraft,
}

impl ReportFormVm {
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Goal => &self.draft.goal,
            FormField::Manager => &self.draft.manager,
            FormField::Health => &self.draft.health,
            FormField::Accomplishments => &self.draft.accomplishments,
            FormField::NextWeekPlans => &self.draft.next_week_plans,
            FormField::Milestones => &self.draft.milestones,
            FormField::Issues => &self.draft.issues,
            FormField::Changes => &self.draft.changes,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Title => &mut self.draft.title,
            FormField::Goal => &mut self.draft.goal,
            FormField::Manager => &mut self.draft.manager,
            FormField::Health => &mut self.draft.health,
            FormField::Accomplishments => &mut self.draft.accomplishments,
            FormField::NextWeekPlans => &mut self.draft.next_week_plans,
            FormField::Milestones => &mut self.draft.milestones,
            FormField::Issues => &mut self.draft.issues,
            FormField::Changes => &mut self.draft.changes,
        };
        *slot = value;
    }

    #[must_use]
    pub fn to_draft(&self) -> ReportDraft {
        self.draft.clone()
    }

    pub fn clear(&mut self) {
        self.draft = ReportDraft::default();
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.draft.is_blank()
    }
}

/// One-line feedback shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

impl StatusLine {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            StatusLine::Info(message) | StatusLine::Error(message) => message,
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            StatusLine::Info(_) => "status-line",
            StatusLine::Error(_) => "status-line status-line--error",
        }
    }
}
