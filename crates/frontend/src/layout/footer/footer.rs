use crate::shared::dom::quick_dial;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Emergency services and their numbers.
const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Police", "100"),
    ("Women Helpline", "1091"),
    ("Ambulance", "108"),
    ("Emergency", "112"),
];

#[component]
pub fn EmergencyContacts() -> impl IntoView {
    let contacts = EMERGENCY_CONTACTS
        .iter()
        .map(|&(service, number)| {
            view! {
                <div class="contact-card">
                    {icon("phone")}
                    <span class="contact-service">{service}</span>
                    <a
                        href=format!("tel:{}", number)
                        class="contact-number"
                        on:click=move |ev| {
                            ev.prevent_default();
                            quick_dial(number);
                        }
                    >
                        {number}
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="contacts" class="contacts-section">
            <h2 class="section-title">"Emergency Contacts"</h2>
            <div class="contacts-grid">{contacts}</div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Ranchi Crime Map. Data is indicative and for awareness only."</p>
            <p class="footer-note">"Reports are stored in this browser and are not sent anywhere."</p>
        </footer>
    }
}
