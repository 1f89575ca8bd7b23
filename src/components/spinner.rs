//! Loading Spinner Component

use leptos::prelude::*;

/// Spinner shown wherever a view is waiting on the backend
#[component]
pub fn Spinner(#[prop(optional)] small: bool) -> impl IntoView {
    let class = if small { "spinner small" } else { "spinner" };
    view! {
        <div class="spinner-wrap">
            <div class=class></div>
        </div>
    }
}
