use services::{ReportEntry, ReportListing};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportCardVm {
    pub index: usize,
    pub title: String,
    pub saved_on_label: String,
    pub health: String,
    pub accomplishments: String,
}

impl From<&ReportEntry> for ReportCardVm {
    fn from(entry: &ReportEntry) -> Self {
        Self {
            index: entry.index,
            title: entry.title.clone(),
            saved_on_label: format!("Saved on: {}", entry.saved_on),
            health: entry.health.clone(),
            accomplishments: entry.accomplishments_preview.clone(),
        }
    }
}

#[must_use]
pub fn map_report_cards(listing: &ReportListing) -> Vec<ReportCardVm> {
    listing.entries().iter().map(ReportCardVm::from).collect()
}
