//! One-shot profit calculation widget.

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::util::format::group_thousands;

#[derive(Clone, Debug, PartialEq)]
enum ProfitStatus {
    Idle,
    Loading,
    Ready(f64),
    Failed(String),
}

/// Button that fetches the crew's total profit and replaces itself with the
/// formatted amount. One-shot within a page session; a failure replaces it
/// with an error label instead of leaving a stuck loading state.
#[component]
pub fn ProfitPanel() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let status = RwSignal::new(ProfitStatus::Idle);

    let on_calc = move |_| {
        if status.get_untracked() != ProfitStatus::Idle {
            return;
        }
        status.set(ProfitStatus::Loading);

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.profit().await {
                Ok(total) => status.set(ProfitStatus::Ready(total)),
                Err(err) => status.set(ProfitStatus::Failed(err.to_string())),
            }
        });
    };

    view! {
        <div class="profit">
            {move || match status.get() {
                ProfitStatus::Idle => {
                    view! {
                        <button class="btn" type="button" on:click=on_calc.clone()>
                            "Calculate profit"
                        </button>
                    }
                        .into_any()
                }
                ProfitStatus::Loading => {
                    view! { <span class="profit__loading">"Calculating..."</span> }.into_any()
                }
                ProfitStatus::Ready(total) => {
                    view! {
                        <span class="profit__total">
                            {format!("{} aUEC", group_thousands(total))}
                        </span>
                    }
                        .into_any()
                }
                ProfitStatus::Failed(err) => {
                    view! {
                        <span class="profit__error">{format!("Profit unavailable: {err}")}</span>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
