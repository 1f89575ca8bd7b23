//! Create Workspace Modal
//!
//! Single-field modal form. Validation failures never reach the network;
//! the confirm button is disabled while the request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::Workspace;
use crate::session::{current_token, use_session};
use crate::validate::validate_workspace_name;

/// Modal form for creating a workspace
#[component]
pub fn CreateWorkspaceModal(
    on_close: Callback<()>,
    on_created: Callback<Workspace>,
) -> impl IntoView {
    let session = use_session();

    let (name, set_name) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(String::new());

    let create = move |_| {
        let name_value = name.get();
        if let Err(msg) = validate_workspace_name(&name_value) {
            set_error.set(msg.to_string());
            return;
        }
        let Some(token) = current_token(&session) else {
            set_error.set("You must be logged in to create a workspace.".to_string());
            return;
        };

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::create_workspace(&token, name_value.trim()).await {
                Ok(workspace) => {
                    on_created.run(workspace);
                    on_close.run(());
                }
                Err(err) => {
                    set_error.try_set(err.to_string());
                    set_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Create Workspace"</h2>

                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <p class="error-text">{msg}</p> })
                }}

                <input
                    type="text"
                    placeholder="Workspace Name"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />

                <div class="modal-actions">
                    <button
                        type="button"
                        class="btn secondary"
                        disabled=move || loading.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn primary"
                        disabled=move || loading.get()
                        on:click=create
                    >
                        {move || if loading.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
