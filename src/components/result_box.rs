//! The removable result-box token.

use leptos::prelude::*;

/// A result box: a label chip inside a field-set's results area.
///
/// With `on_remove` set, clicking the box removes it; without, it is a
/// read-only token (used by the crew roster).
#[component]
pub fn ResultBox(
    label: String,
    #[prop(optional, into)] on_remove: Option<Callback<()>>,
) -> impl IntoView {
    let class = if on_remove.is_some() {
        "result-box"
    } else {
        "result-box result-box--static"
    };

    view! {
        <div
            class=class
            on:click=move |_| {
                if let Some(cb) = on_remove {
                    cb.run(());
                }
            }
        >
            {label}
        </div>
    }
}
