//! Dark mode for the page.
//!
//! The preference store owns the flag; this module mirrors it into a signal
//! for the toggle icon and applies the `dark-mode` class on `<body>`.

use crate::shared::dom::set_body_class;
use crate::shared::storage::BrowserStorage;
use contracts::usecases::u503_toggle_dark_mode::{PreferenceStore, ThemeMode};
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

fn apply_theme(mode: ThemeMode) {
    set_body_class(ThemeMode::DARK_MODE_CLASS, mode.is_dark());
}

/// Theme context type.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme, read-only for views.
    pub mode: RwSignal<ThemeMode>,
    store: StoredValue<PreferenceStore<BrowserStorage>, LocalStorage>,
}

impl ThemeContext {
    /// Flip dark mode, persist it and update the page.
    pub fn toggle(&self) {
        let Some(mode) = self.store.try_update_value(|store| store.toggle_dark_mode()) else {
            return;
        };
        apply_theme(mode);
        self.mode.set(mode);
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// Storage key of the dark-mode flag.
    #[prop(into)]
    storage_key: String,
    children: Children,
) -> impl IntoView {
    let mut store = PreferenceStore::new(BrowserStorage::local(), storage_key);
    let initial = store.load_preferences();
    apply_theme(initial);

    provide_context(ThemeContext {
        mode: RwSignal::new(initial),
        store: StoredValue::new_local(store),
    });

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Moon/sun button in the header.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            id="darkModeToggle"
            class="button button--ghost dark-mode-toggle"
            aria-label="Toggle dark mode"
            on:click=move |_| ctx.toggle()
        >
            <i class=move || ctx.mode.get().icon_class()></i>
        </button>
    }
}
