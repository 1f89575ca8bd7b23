//! Footer Component

use leptos::prelude::*;

/// Page footer with the copyright year
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <p>{format!("© {} Flame. All rights reserved.", year)}</p>
        </footer>
    }
}
