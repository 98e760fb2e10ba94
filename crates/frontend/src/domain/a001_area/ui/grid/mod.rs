use crate::layout::global_context::use_app;
use crate::shared::components::card_animated::CardAnimated;
use contracts::domain::a001_area::Area;
use contracts::projections::p901_area_grid::project_grid;
use leptos::prelude::*;

const STAGGER_MS: u32 = 80;

/// One card per area; visibility follows the search and safety filter.
#[component]
pub fn AreaGrid() -> impl IntoView {
    let ctx = use_app();
    let cards = Memo::new(move |_| ctx.filter.with(|filter| project_grid(ctx.catalog(), filter)));

    let items = ctx
        .catalog()
        .iter()
        .enumerate()
        .map(|(i, area)| {
            let id = area.id.clone();
            let delay_ms = i as u32 * STAGGER_MS;
            let visible = Signal::derive(move || {
                cards.with(|cards| cards.iter().any(|card| card.area_id == id && card.visible))
            });
            view! { <AreaCard area=area.clone() visible=visible delay_ms=delay_ms /> }
        })
        .collect_view();

    view! {
        <div id="areasGrid" class="areas-grid">
            {items}
            <Show when=move || cards.with(|cards| cards.iter().all(|card| !card.visible))>
                <p class="no-results">"No areas match your search."</p>
            </Show>
        </div>
    }
}

#[component]
fn AreaCard(area: Area, #[prop(into)] visible: Signal<bool>, delay_ms: u32) -> impl IntoView {
    let ctx = use_app();
    let id = area.id.clone();
    let level = area.safety_level;
    let data_area = area.id.to_string();

    let crime_badges = area
        .headline_crimes()
        .iter()
        .map(|crime| view! { <span class="crime-badge">{crime.clone()}</span> })
        .collect_view();
    let more_badge = area
        .more_crimes_label()
        .map(|label| view! { <span class="crime-badge">{label}</span> });

    view! {
        <div
            class="area-card"
            class=("fade-in", move || visible.get())
            style:display=move || if visible.get() { "block" } else { "none" }
            data-area=data_area
            data-safety=level.as_str()
            on:click=move |_| ctx.select_area(&id)
        >
            <CardAnimated delay_ms=delay_ms>
                <div class="area-card-header">
                    <h3>{area.name.clone()}</h3>
                    <span class=format!("safety-badge {}", level.as_str())>{level.badge_text()}</span>
                </div>
                <div class="area-card-content">
                    <div class="area-card-stats">
                        <div>
                            <span class="stat-label">"Safety Score:"</span>
                            <span class="stat-value">{area.score_label()}</span>
                        </div>
                        <div>
                            <span class="stat-label">"Recent Incidents:"</span>
                            <span class="stat-value danger-text">{area.recent_incident_count}</span>
                        </div>
                    </div>
                    <div class="area-card-crimes">
                        <span class="crime-label">"Common Crimes:"</span>
                        <div class="crime-badges">
                            {crime_badges}
                            {more_badge}
                        </div>
                    </div>
                    // The link navigates away; it must not select the card.
                    <a
                        href=area.detail_page_ref.clone()
                        class="view-details-btn"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <i class="fas fa-info-circle"></i>
                        " View Details"
                    </a>
                </div>
            </CardAnimated>
        </div>
    }
}
