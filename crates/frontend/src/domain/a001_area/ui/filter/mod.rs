use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use contracts::domain::a001_area::SafetyLevel;
use contracts::projections::p901_area_grid::SafetyFilter;
use leptos::prelude::*;

/// Search box and safety category dropdown above the grid.
#[component]
pub fn AreaFilterBar() -> impl IntoView {
    let ctx = use_app();

    let active_count = move || ctx.filter.with(|f| f.active_count());

    view! {
        <div class="filter-panel">
            <div class="search-box">
                {icon("search")}
                <input
                    id="searchInput"
                    type="search"
                    placeholder="Search areas..."
                    prop:value=move || ctx.filter.with(|f| f.query.clone())
                    on:input=move |ev| ctx.set_query(event_target_value(&ev))
                />
            </div>
            <div class="filter-select">
                {icon("filter")}
                <select
                    id="safetyFilter"
                    prop:value=move || ctx.filter.with(|f| f.safety.as_value())
                    on:change=move |ev| {
                        ctx.set_safety_filter(SafetyFilter::from_value(&event_target_value(&ev)))
                    }
                >
                    <option value="all">"All Areas"</option>
                    {SafetyLevel::all()
                        .into_iter()
                        .map(|level| view! { <option value=level.as_str()>{level.display_name()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || {
                let count = active_count();
                (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
            }}
        </div>
    }
}
