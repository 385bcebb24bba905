mod reports;
mod state;

#[cfg(test)]
mod confirm_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use reports::ReportsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
