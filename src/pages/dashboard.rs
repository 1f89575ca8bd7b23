//! Dashboard Page
//!
//! The caller's workspace list: fetch on mount, grid of clickable cards,
//! creation modal. Failed loads get an inline error with a retry button.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateWorkspaceModal, Spinner};
use crate::models::Workspace;
use crate::router::{navigate, Route};
use crate::session::{current_token, use_session};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();

    let (workspaces, set_workspaces) = signal(Vec::<Workspace>::new());
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (show_modal, set_show_modal) = signal(false);
    let (reload, set_reload) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload.get();
        let Some(token) = current_token(&session) else {
            set_loading.set(false);
            set_load_error.set(Some("You must be logged in to see your workspaces.".to_string()));
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match api::list_workspaces(&token).await {
                Ok(list) => {
                    set_workspaces.try_set(list);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("workspace list failed: {}", err).into());
                    set_load_error.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    let on_created = Callback::new(move |workspace: Workspace| {
        set_workspaces.update(|list| list.push(workspace));
    });

    view! {
        <div class="page dashboard">
            <div class="dashboard-topbar">
                <div class="navbar-brand">
                    <span class="navbar-logo">"🔥"</span>
                    <h2>"Flame"</h2>
                </div>
                <button class="btn primary" on:click=move |_| set_show_modal.set(true)>
                    "+ Create Workspace"
                </button>
            </div>

            <h2 class="dashboard-heading">"Your Workspaces"</h2>

            {move || {
                if loading.get() {
                    return view! { <Spinner /> }.into_any();
                }
                if let Some(msg) = load_error.get() {
                    return view! {
                        <div class="load-error">
                            <p class="error-text">{msg}</p>
                            <button class="btn secondary" on:click=move |_| {
                                set_reload.update(|n| *n += 1);
                            }>
                                "Retry"
                            </button>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="workspace-grid">
                        <For
                            each=move || workspaces.get()
                            key=|ws| ws.id.clone()
                            children=move |ws| {
                                let wsid = ws.id.clone();
                                view! {
                                    <div
                                        class="workspace-card"
                                        on:click=move |_| navigate(&Route::Workspace {
                                            wsid: wsid.clone(),
                                        })
                                    >
                                        <div class="workspace-card-icon">"📁"</div>
                                        <h3>{ws.name.clone()}</h3>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}

            {move || show_modal.get().then(|| view! {
                <CreateWorkspaceModal
                    on_close=Callback::new(move |_| set_show_modal.set(false))
                    on_created=on_created
                />
            })}
        </div>
    }
}
