//! Flame Frontend App
//!
//! Root component: owns the route signal, provides the session store,
//! and dispatches to the page for the current hash.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::pages::{Dashboard, Home, LoginPage, ReviewPage, SignupPage, ViewerRole, WorkspacePage};
use crate::router::{current_route, navigate, Route};
use crate::session::load_session;

#[component]
pub fn App() -> impl IntoView {
    // The one piece of cross-view state: the session holder.
    provide_context(Store::new(load_session()));

    // The root component lives for the whole session, so the listener
    // handle can be dropped without ever removing it.
    let (route, set_route) = signal(current_route());
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        set_route.set(current_route());
    });

    view! {
        <div class="app">
            {move || match route.get() {
                Route::Home => view! { <Home /> }.into_any(),
                Route::Login => view! { <LoginPage /> }.into_any(),
                Route::Signup => view! { <SignupPage /> }.into_any(),
                Route::Dashboard => view! { <Dashboard /> }.into_any(),
                Route::Workspace { wsid } => view! { <WorkspacePage wsid=wsid /> }.into_any(),
                Route::VideoEditor { wsid: _, vid } => view! {
                    <ReviewPage vid=vid role=ViewerRole::Owner />
                }
                .into_any(),
                Route::VideoMember { vid } => view! {
                    <ReviewPage vid=vid role=ViewerRole::Member />
                }
                .into_any(),
                Route::VideoShared { vid } => view! {
                    <ReviewPage vid=vid role=ViewerRole::Public />
                }
                .into_any(),
                Route::NotFound => view! { <NotFound /> }.into_any(),
            }}
        </div>
    }
}

/// Fallback for unknown hashes
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page not-found">
            <h2>"Page not found"</h2>
            <button class="btn primary" on:click=move |_| navigate(&Route::Home)>
                "Back to Flame"
            </button>
        </div>
    }
}
