mod report_card_vm;
mod report_form_vm;

pub use report_card_vm::{ReportCardVm, map_report_cards};
pub use report_form_vm::{FormField, ReportFormVm, StatusLine};
