mod view_model;

use crate::layout::global_context::use_app;
use leptos::prelude::*;
use view_model::{ReportFormViewModel, CRIME_TYPES, OTHER_AREA};

#[component]
pub fn ReportForm() -> impl IntoView {
    let ctx = use_app();
    let vm = ReportFormViewModel::new();

    let area_options = ctx
        .catalog()
        .iter()
        .map(|area| view! { <option value=area.name.clone()>{area.name.clone()}</option> })
        .collect_view();

    view! {
        <form
            id="crimeReportForm"
            class="report-form"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit_command(ctx);
            }
        >
            <div class="form-group">
                <label for="crimeType">"Crime Type *"</label>
                <select
                    id="crimeType"
                    prop:value=move || vm.form.with(|f| f.crime_type.clone())
                    on:change=move |ev| vm.form.update(|f| f.crime_type = event_target_value(&ev))
                >
                    <option value="">"Select crime type"</option>
                    {CRIME_TYPES
                        .iter()
                        .map(|t| view! { <option value=*t>{*t}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="crimeArea">"Area *"</label>
                <select
                    id="crimeArea"
                    prop:value=move || vm.form.with(|f| f.area_label.clone())
                    on:change=move |ev| vm.form.update(|f| f.area_label = event_target_value(&ev))
                >
                    <option value="">"Select area"</option>
                    {area_options}
                    <option value=OTHER_AREA>{OTHER_AREA}</option>
                </select>
            </div>

            <div class="form-group">
                <label for="incidentDateTime">"Date & Time"</label>
                <input
                    id="incidentDateTime"
                    type="datetime-local"
                    prop:value=move || vm.form.with(|f| f.occurred_at.clone())
                    on:input=move |ev| vm.form.update(|f| f.occurred_at = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="crimeDescription">"Description *"</label>
                <textarea
                    id="crimeDescription"
                    rows="4"
                    placeholder="Describe what happened..."
                    prop:value=move || vm.form.with(|f| f.description.clone())
                    on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary">
                    <i class="fas fa-paper-plane"></i>
                    " Submit Report"
                </button>
                <button id="clearForm" type="button" class="btn btn-secondary" on:click=move |_| vm.clear()>
                    <i class="fas fa-eraser"></i>
                    " Clear"
                </button>
            </div>
        </form>
    }
}
