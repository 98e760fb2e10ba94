use crate::layout::global_context::use_app;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Confirmation dialog shown after a report is stored.
#[component]
pub fn ReportReceiptModal() -> impl IntoView {
    let ctx = use_app();
    let on_close = Callback::new(move |_| ctx.close_receipt());

    move || {
        ctx.receipt.get().map(|receipt| {
            view! {
                <Modal title="Report Submitted" on_close=on_close>
                    <div id="successModal" class="success-content">
                        <div class="success-icon">{icon("check")}</div>
                        <p>"Thank you. Your report has been recorded locally."</p>
                        <p>
                            "Report ID: "
                            <strong id="reportId">{receipt.id.to_string()}</strong>
                        </p>
                        <p>
                            "Submitted: "
                            <span id="submitTime">{receipt.submitted_at}</span>
                        </p>
                    </div>
                </Modal>
            }
        })
    }
}
