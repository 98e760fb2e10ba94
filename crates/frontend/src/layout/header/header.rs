use crate::layout::global_context::use_app;
use crate::shared::dom::{print_page, smooth_scroll_to};
use crate::shared::icons::icon;
use crate::shared::theme::DarkModeToggle;
use leptos::prelude::*;
use web_sys::ScrollLogicalPosition;

/// Page sections reachable from the navigation bar.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#map", "Map"),
    ("#areas", "Areas"),
    ("#report", "Report Crime"),
    ("#contacts", "Emergency"),
];

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app();
    let active = RwSignal::new(NAV_LINKS[0].0);

    let links = NAV_LINKS
        .iter()
        .map(|&(target, label)| {
            view! {
                <li>
                    <a
                        href=target
                        class="nav-link"
                        class:active=move || active.get() == target
                        on:click=move |ev| {
                            ev.prevent_default();
                            active.set(target);
                            smooth_scroll_to(target, ScrollLogicalPosition::Start);
                        }
                    >
                        {label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header">
            <nav class="navbar">
                <div class="nav-brand">
                    {icon("shield")}
                    <span class="header__title">"Ranchi Crime Map"</span>
                </div>
                <ul class="nav-menu">{links}</ul>
                <div class="header__actions">
                    <button
                        class="button button--ghost"
                        title="Print"
                        aria-label="Print page"
                        on:click=|_| print_page()
                    >
                        {icon("printer")}
                    </button>
                    <button
                        class="button button--ghost"
                        title="Export data"
                        aria-label="Export area data"
                        on:click=move |_| ctx.export_catalog()
                    >
                        {icon("download")}
                    </button>
                    <DarkModeToggle />
                </div>
            </nav>
        </header>
    }
}
