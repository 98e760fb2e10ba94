use crate::layout::global_context::use_app;
use contracts::domain::a002_crime_report::CrimeReport;
use contracts::shared::date_utils::format_occurred_at;
use contracts::usecases::u502_submit_report::ReportListing;
use leptos::prelude::*;

/// Most recent reports from local storage.
#[component]
pub fn RecentReports() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div id="recentReports" class="recent-reports">
            {move || match ctx.reports.get() {
                ReportListing::Empty => {
                    view! { <p class="no-reports">"No reports submitted yet."</p> }.into_any()
                }
                ReportListing::Unreadable => {
                    view! {
                        <p class="no-reports reports-error">"Saved reports could not be loaded."</p>
                    }
                    .into_any()
                }
                ReportListing::Entries(reports) => reports
                    .into_iter()
                    .map(|report| view! { <ReportItem report=report /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ReportItem(report: CrimeReport) -> impl IntoView {
    let date = format_occurred_at(Some(&report.occurred_at));

    view! {
        <div class="report-item fade-in">
            <div class="report-header">
                <span class="report-area">{report.area_label}</span>
                <span class="report-type">{report.crime_type}</span>
                <span class="report-date">{date}</span>
            </div>
            <div class="report-description">{report.description}</div>
        </div>
    }
}
