//! A field-set: the results area, its adder input, and the search flows.

use leptos::prelude::*;
use serde_json::Value;

use crate::components::result_box::ResultBox;
use crate::net::api::ApiClient;
use crate::parse::parse_quantity_phrase;
use crate::state::fieldset::{FieldSetKind, FieldSetState, is_commit_key};
use crate::state::report::ReportState;

/// One field-set of the report form, identified by its index into
/// [`ReportState::fieldsets`].
///
/// A commit key (Enter or comma by default) reads and clears the input,
/// then either adds a local entry or starts a catalog search. While a
/// search is in flight a transient "Searching..." box is shown; a failed
/// search surfaces an error line under the input instead of a stuck
/// placeholder.
#[component]
pub fn FieldSetView(index: usize) -> impl IntoView {
    let report = expect_context::<RwSignal<ReportState>>();
    let api = expect_context::<ApiClient>();
    let text = RwSignal::new(String::new());

    // Name, kind, and triggers are fixed at construction; snapshot them once.
    let (name, label, kind, triggers) = report.with_untracked(|r| {
        let fieldset = &r.fieldsets[index];
        (fieldset.name, fieldset.label, fieldset.kind, fieldset.triggers)
    });

    let commit = move |raw: String| {
        let input = raw.trim().to_owned();

        match kind {
            FieldSetKind::Local => {
                if !input.is_empty() {
                    report.update(|r| r.fieldsets[index].push_literal(&input));
                }
            }
            FieldSetKind::Search {
                collection,
                display_key,
            } => {
                if input.is_empty() {
                    return;
                }
                start_search(report, index, api.clone(), collection, input, move |fieldset, doc| {
                    fieldset.push_document(&doc, display_key);
                });
            }
            FieldSetKind::SplitSearch {
                collection,
                display_key,
            } => {
                // Silent no-op unless the phrase yields both amount and
                // resource; the input is already cleared at this point.
                let Some(phrase) = parse_quantity_phrase(&input) else {
                    return;
                };
                let amount = phrase.amount;
                start_search(
                    report,
                    index,
                    api.clone(),
                    collection,
                    phrase.resource,
                    move |fieldset, doc| fieldset.push_quantified(&doc, display_key, amount),
                );
            }
        }
    };

    view! {
        <fieldset class="fieldset">
            <legend>{label}</legend>

            <div class="fieldset__results">
                {move || {
                    report
                        .get()
                        .fieldsets[index]
                        .entries
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            let on_remove = Callback::new(move |()| {
                                report.update(|r| r.fieldsets[index].remove_entry(id));
                            });
                            view! { <ResultBox label=entry.label.clone() on_remove=on_remove/> }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || report.get().fieldsets[index].searching>
                    <div class="result-box result-box--pending">"Searching..."</div>
                </Show>
            </div>

            <input
                class="fieldset__input"
                type="text"
                name=name
                prop:value=move || text.get()
                prop:disabled=move || report.get().submitting
                on:input=move |ev| text.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_commit_key(&ev.key(), triggers) {
                        ev.prevent_default();
                        let raw = text.get_untracked();
                        text.set(String::new());
                        commit(raw);
                    }
                }
            />

            {move || {
                report
                    .get()
                    .fieldsets[index]
                    .error
                    .clone()
                    .map(|err| view! { <p class="fieldset__error">{err}</p> })
            }}
        </fieldset>
    }
}

/// Run one catalog lookup for a field-set: raise the "Searching..." marker,
/// await the result, and in every outcome drop the marker again before
/// recording either the new entry or the error.
fn start_search(
    report: RwSignal<ReportState>,
    index: usize,
    api: ApiClient,
    collection: &'static str,
    query: String,
    on_found: impl FnOnce(&mut FieldSetState, Value) + 'static,
) {
    report.update(|r| {
        let fieldset = &mut r.fieldsets[index];
        fieldset.searching = true;
        fieldset.error = None;
    });

    leptos::task::spawn_local(async move {
        let outcome = api.search(collection, &query).await;

        report.update(|r| {
            let fieldset = &mut r.fieldsets[index];
            fieldset.searching = false;
            match outcome {
                Ok(doc) => on_found(fieldset, doc),
                Err(err) => fieldset.error = Some(err.to_string()),
            }
        });
    });
}
