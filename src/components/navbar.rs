//! Navbar Component
//!
//! Sticky top bar with the Flame brand; pages can slot controls on the
//! right (the review view puts its privacy and share controls here).

use leptos::prelude::*;

use crate::router::{navigate, Route};

/// Top navigation bar
#[component]
pub fn Navbar(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar-brand" on:click=move |_| navigate(&Route::Home)>
                <span class="navbar-logo">"🔥"</span>
                <h2>"Flame"</h2>
            </div>
            <div class="navbar-actions">
                {children.map(|children| children())}
            </div>
        </nav>
    }
}
