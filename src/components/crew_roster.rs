//! Read-only roster of members currently in voice channels.

use leptos::prelude::*;

use crate::components::result_box::ResultBox;
use crate::net::api::ApiClient;
use crate::state::roster::RosterEpoch;

/// Crew roster section.
///
/// Fetches `/current_crew` on mount and again whenever the roster epoch is
/// bumped (after each successful submission).
#[component]
pub fn CrewRoster() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let epoch = expect_context::<RosterEpoch>();

    // Errors are flattened to strings so the resource output stays `Clone`.
    let crew = LocalResource::new(move || {
        epoch.track();
        let api = api.clone();
        async move { api.current_crew().await.map_err(|err| err.to_string()) }
    });

    view! {
        <section class="crew-roster">
            <h2>"Current crew"</h2>
            <div class="crew-roster__members">
                <Suspense fallback=move || view! { <p>"Loading crew..."</p> }>
                    {move || {
                        crew.get()
                            .map(|outcome| match outcome {
                                Ok(members) => {
                                    members
                                        .iter()
                                        .map(|member| {
                                            view! { <ResultBox label=member.display_name()/> }
                                        })
                                        .collect::<Vec<_>>()
                                        .into_any()
                                }
                                Err(err) => {
                                    view! {
                                        <p class="crew-roster__error">
                                            {format!("Crew unavailable: {err}")}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </div>
        </section>
    }
}
