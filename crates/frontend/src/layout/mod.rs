pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page shell: header, content, emergency contacts and footer.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                children                  |
/// +------------------------------------------+
/// |     EmergencyContacts / Footer           |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header::Header />
        <main class="main-content">
            {children()}
            <footer::footer::EmergencyContacts />
        </main>
        <footer::Footer />
    }
}
