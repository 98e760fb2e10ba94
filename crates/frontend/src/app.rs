use crate::domain::a001_area::ui::details::AreaDetailsPanel;
use crate::domain::a001_area::ui::filter::AreaFilterBar;
use crate::domain::a001_area::ui::grid::AreaGrid;
use crate::domain::a001_area::ui::map::CrimeMap;
use crate::domain::a002_crime_report::ui::form::ReportForm;
use crate::domain::a002_crime_report::ui::list::RecentReports;
use crate::domain::a002_crime_report::ui::receipt::ReportReceiptModal;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;
use contracts::shared::config::load_config;
use leptos::ev;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return view! {
                <div class="config-error">
                    <h1>"Configuration error"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    let dark_mode_key = config.storage.dark_mode_key.clone();

    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(config);
    provide_context(ctx);
    ctx.refresh_reports();

    // Escape closes the confirmation dialog.
    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            ctx.close_receipt();
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <ConfigProvider>
            <ThemeProvider storage_key=dark_mode_key>
                <Shell>
                    <section id="map" class="map-section">
                        <h2 class="section-title">"Crime Safety Map"</h2>
                        <CrimeMap />
                        <AreaDetailsPanel />
                    </section>

                    <section id="areas" class="areas-section">
                        <h2 class="section-title">"Area Safety Overview"</h2>
                        <AreaFilterBar />
                        <AreaGrid />
                    </section>

                    <section id="report" class="report-section">
                        <h2 class="section-title">"Report a Crime"</h2>
                        <div class="report-layout">
                            <ReportForm />
                            <div class="recent-reports-panel">
                                <h3>"Recent Reports"</h3>
                                <RecentReports />
                            </div>
                        </div>
                    </section>
                </Shell>
                <ReportReceiptModal />
            </ThemeProvider>
        </ConfigProvider>
    }
    .into_any()
}
