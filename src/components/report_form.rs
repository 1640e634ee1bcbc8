//! The report form: every field-set, the screenshot input, and submission.

use leptos::html;
use leptos::prelude::*;

use crate::components::fieldset::FieldSetView;
use crate::net::api::{ApiClient, ApiError};
use crate::state::report::{ReportState, build_document};
use crate::state::roster::RosterEpoch;

/// The piracy report form.
///
/// Submitting disables every control for the duration. The screenshot (if
/// any) is uploaded first, then the assembled document is posted to the
/// Discord relay. On success all entries are cleared, the file input is
/// reset, and the crew roster reloads; on failure a form-level error is
/// shown. The controls are re-enabled on every outcome.
#[component]
pub fn ReportForm() -> impl IntoView {
    let report = expect_context::<RwSignal<ReportState>>();
    let api = expect_context::<ApiClient>();
    let roster = expect_context::<RosterEpoch>();

    let file_input: NodeRef<html::Input> = NodeRef::new();
    let fieldset_count = report.with_untracked(|r| r.fieldsets.len());

    let on_submit = move |_| {
        if report.with_untracked(|r| r.submitting) {
            return;
        }
        report.update(|r| {
            r.submitting = true;
            r.error = None;
        });

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));

            let outcome = submit_report(&api, report, file).await;

            report.update(|r| {
                r.submitting = false;
                match &outcome {
                    Ok(()) => r.clear_entries(),
                    Err(err) => r.error = Some(err.to_string()),
                }
            });

            if outcome.is_ok() {
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                roster.bump();
            }
        });
    };

    view! {
        <form class="report-form" on:submit=move |ev| ev.prevent_default()>
            {(0..fieldset_count)
                .map(|index| view! { <FieldSetView index=index/> })
                .collect::<Vec<_>>()}

            <fieldset class="fieldset">
                <legend>"Screenshot"</legend>
                <input
                    class="fieldset__file"
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    prop:disabled=move || report.get().submitting
                />
            </fieldset>

            {move || {
                report
                    .get()
                    .error
                    .map(|err| view! { <p class="report-form__error">{err}</p> })
            }}

            <button
                class="btn btn--primary"
                type="button"
                on:click=on_submit
                prop:disabled=move || report.get().submitting
            >
                {move || if report.get().submitting { "Posting..." } else { "Post to Discord" }}
            </button>
        </form>
    }
}

/// Upload the screenshot (if any), assemble the document, and post it.
async fn submit_report(
    api: &ApiClient,
    report: RwSignal<ReportState>,
    file: Option<web_sys::File>,
) -> Result<(), ApiError> {
    let screenshot_url = match file {
        Some(file) => api.upload_screenshot(&file).await?.image_url,
        None => String::new(),
    };

    let body = report.with_untracked(|r| build_document(&r.fieldsets, &screenshot_url))?;
    api.post_report(&body).await
}
