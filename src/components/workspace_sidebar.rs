//! Workspace Sidebar Component
//!
//! Workspace-switch list shown on the workspace detail view.

use leptos::prelude::*;

use crate::models::Workspace;
use crate::router::{navigate, Route};

/// Sidebar listing the caller's workspaces with a create action
#[component]
pub fn WorkspaceSidebar(
    workspaces: Signal<Vec<Workspace>>,
    active: String,
    on_create: Callback<()>,
) -> impl IntoView {
    let active = StoredValue::new(active);

    view! {
        <aside class="workspace-sidebar">
            <h3>"Workspaces"</h3>
            <div class="workspace-sidebar-list">
                <For
                    each=move || workspaces.get()
                    key=|ws| ws.id.clone()
                    children=move |ws| {
                        let id = ws.id.clone();
                        let target = ws.id.clone();
                        let class = move || {
                            if active.get_value() == id {
                                "workspace-link active"
                            } else {
                                "workspace-link"
                            }
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| navigate(&Route::Workspace { wsid: target.clone() })
                            >
                                {ws.name.clone()}
                            </button>
                        }
                    }
                />
            </div>
            <button class="btn primary full-width" on:click=move |_| on_create.run(())>
                "Create New Workspace"
            </button>
        </aside>
    }
}
