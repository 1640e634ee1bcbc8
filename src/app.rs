//! Root application component wiring configuration, state, and layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::crew_roster::CrewRoster;
use crate::components::profit::ProfitPanel;
use crate::components::report_form::ReportForm;
use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::state::report::ReportState;
use crate::state::roster::RosterEpoch;

/// Root application component.
///
/// Builds the configuration once and provides it, the API client, the form
/// state, and the roster reload marker as contexts for the page below.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    provide_context(ApiClient::new(&config));
    provide_context(RwSignal::new(ReportState::default()));
    provide_context(RosterEpoch::new());

    view! {
        <Title text="Pirate Assist"/>

        <main class="app">
            <header class="app__header">
                <h1>"Pirate Assist"</h1>
                <ProfitPanel/>
            </header>

            <CrewRoster/>
            <ReportForm/>
        </main>
    }
}
