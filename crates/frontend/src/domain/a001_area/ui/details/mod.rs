use crate::layout::global_context::use_app;
use contracts::projections::p902_area_details::AreaDetailsView;
use leptos::prelude::*;

/// Panel under the map describing the selected area.
#[component]
pub fn AreaDetailsPanel() -> impl IntoView {
    let ctx = use_app();

    move || {
        ctx.details
            .get()
            .map(|details| view! { <AreaDetails details=details /> })
    }
}

#[component]
fn AreaDetails(details: AreaDetailsView) -> impl IntoView {
    let crime_badges = details
        .crime_types
        .into_iter()
        .map(|crime| view! { <span class="crime-badge">{crime}</span> })
        .collect_view();

    view! {
        <div id="selectedAreaInfo" class="selected-area-info fade-in">
            <div class="selected-area-header">
                <h3 id="areaName">{details.name}</h3>
                <span id="areaSafetyBadge" class=details.badge_class>{details.badge_text}</span>
            </div>
            <p id="areaDescription">{details.description}</p>
            <div class="selected-area-stats">
                <div>
                    <span class="stat-label">"Safety Score:"</span>
                    <span id="safetyScore" class="stat-value">{details.score_label}</span>
                </div>
                <div>
                    <span class="stat-label">"Recent Incidents:"</span>
                    <span id="recentIncidents" class="stat-value danger-text">{details.incidents_label}</span>
                </div>
            </div>
            <div class="selected-area-crimes">
                <span class="crime-label">"Crime Types:"</span>
                <div id="crimeTypesList" class="crime-badges">{crime_badges}</div>
            </div>
            <a href=details.detail_page_ref class="view-details-btn">
                <i class="fas fa-info-circle"></i>
                " View Details"
            </a>
        </div>
    }
}
