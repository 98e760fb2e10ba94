use crate::domain::a001_area::ui::map::apply_map_view;
use crate::shared::dom::smooth_scroll_to;
use crate::shared::export::export_catalog;
use crate::shared::storage::BrowserStorage;
use contracts::domain::a001_area::{AreaCatalog, AreaId, RANCHI_CATALOG};
use contracts::domain::a002_crime_report::{CrimeReport, ReportError, ReportReceipt};
use contracts::projections::p901_area_grid::{AreaFilter, SafetyFilter};
use contracts::projections::p902_area_details::AreaDetailsView;
use contracts::shared::config::AppConfig;
use contracts::usecases::u501_select_area::SelectionState;
use contracts::usecases::u502_submit_report::{ReportListing, ReportStore};
use leptos::prelude::*;
use web_sys::ScrollLogicalPosition;

/// Page-wide view state, passed to every handler through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub config: StoredValue<AppConfig>,
    pub selection: RwSignal<SelectionState>,
    pub details: RwSignal<Option<AreaDetailsView>>,
    pub filter: RwSignal<AreaFilter>,
    pub reports: RwSignal<ReportListing>,
    pub receipt: RwSignal<Option<ReportReceipt>>,
}

impl AppGlobalContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            selection: RwSignal::new(SelectionState::default()),
            details: RwSignal::new(None),
            filter: RwSignal::new(AreaFilter::default()),
            reports: RwSignal::new(ReportListing::Empty),
            receipt: RwSignal::new(None),
        }
    }

    pub fn catalog(&self) -> &'static AreaCatalog {
        &RANCHI_CATALOG
    }

    fn report_store(&self) -> ReportStore<BrowserStorage> {
        let key = self.config.with_value(|c| c.storage.reports_key.clone());
        ReportStore::new(BrowserStorage::local(), key)
    }

    /// Select an area: detail panel, marker styles and map focus, then
    /// bring the map into view.
    pub fn select_area(&self, id: &AreaId) {
        let catalog = self.catalog();
        let outcome = self.config.with_value(|config| {
            self.selection
                .try_update(|state| state.select(catalog, id, config))
                .flatten()
        });

        let Some(outcome) = outcome else {
            log::warn!("select_area: unknown area `{}`", id);
            return;
        };

        log::info!("Selected area `{}`", id);
        self.details.set(Some(outcome.details));
        apply_map_view(&outcome.map);
        smooth_scroll_to(".map-section", ScrollLogicalPosition::Center);
    }

    pub fn set_query(&self, query: String) {
        self.filter.update(|f| f.query = query);
    }

    pub fn set_safety_filter(&self, safety: SafetyFilter) {
        self.filter.update(|f| f.safety = safety);
    }

    /// Reload the recent-reports listing from storage.
    pub fn refresh_reports(&self) {
        let limit = self.config.with_value(|c| c.reports.display_limit);
        self.reports.set(self.report_store().listing(limit));
    }

    /// Store a report and open the confirmation dialog.
    pub fn submit_report(&self, report: CrimeReport) -> Result<ReportReceipt, ReportError> {
        let receipt = self.report_store().submit(report)?;
        self.receipt.set(Some(receipt.clone()));
        self.refresh_reports();
        Ok(receipt)
    }

    pub fn close_receipt(&self) {
        self.receipt.set(None);
    }

    pub fn export_catalog(&self) {
        let filename = self.config.with_value(|c| c.export.file_name.clone());
        if let Err(e) = export_catalog(self.catalog(), &filename) {
            log::error!("Export failed: {}", e);
        }
    }
}

pub fn use_app() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
