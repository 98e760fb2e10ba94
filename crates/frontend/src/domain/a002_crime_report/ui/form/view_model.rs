use crate::layout::global_context::AppGlobalContext;
use crate::shared::dom::alert;
use contracts::domain::a002_crime_report::{CrimeReport, ReportError};
use leptos::prelude::*;

/// Crime types offered by the form, in display order.
pub const CRIME_TYPES: &[&str] = &[
    "Theft",
    "Robbery",
    "Assault",
    "Burglary",
    "Vehicle Theft",
    "Chain Snatching",
    "Harassment",
    "Fraud",
    "Vandalism",
    "Other",
];

/// Area choice for incidents outside the catalog.
pub const OTHER_AREA: &str = "Other";

/// Form state of the report section.
#[derive(Clone, Copy)]
pub struct ReportFormViewModel {
    pub form: RwSignal<CrimeReport>,
}

impl ReportFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CrimeReport::default()),
        }
    }

    pub fn clear(&self) {
        self.form.set(CrimeReport::default());
    }

    /// Submit the current form. Clears it on success.
    pub fn submit_command(&self, ctx: AppGlobalContext) {
        let report = self.form.get_untracked();
        match ctx.submit_report(report) {
            Ok(receipt) => {
                log::debug!("Report {} stored", receipt.id);
                self.clear();
            }
            Err(e @ ReportError::MissingField(field)) => {
                log::debug!("Report rejected, missing {}", field.label());
                alert(&e.to_string());
            }
            Err(e) => {
                log::error!("Failed to store report: {}", e);
                alert(&format!("Could not save the report: {}", e));
            }
        }
    }
}

impl Default for ReportFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
