//! Workspace Detail Page
//!
//! Fetches the caller's full workspace list (for the switch sidebar) and
//! the videos belonging to the current workspace, resolves the current
//! record by id, and offers upload and creation modals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{
    CreateWorkspaceModal, Navbar, Spinner, UploadVideoModal, WorkspaceSidebar,
};
use crate::models::{workspace_by_id, Video, Workspace};
use crate::router::{navigate, Route};
use crate::session::{current_token, use_session};

#[component]
pub fn WorkspacePage(wsid: String) -> impl IntoView {
    let session = use_session();
    let wsid = StoredValue::new(wsid);

    let (workspaces, set_workspaces) = signal(Vec::<Workspace>::new());
    let (videos, set_videos) = signal(Vec::<Video>::new());
    let (loading_videos, set_loading_videos) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (show_upload, set_show_upload) = signal(false);
    let (show_create, set_show_create) = signal(false);
    let (reload, set_reload) = signal(0u32);

    // Workspace list for the sidebar and for resolving the current record
    Effect::new(move |_| {
        let _ = reload.get();
        let Some(token) = current_token(&session) else {
            return;
        };
        spawn_local(async move {
            match api::list_workspaces(&token).await {
                Ok(list) => {
                    set_workspaces.try_set(list);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("workspace list failed: {}", err).into());
                }
            }
        });
    });

    // Videos of the current workspace
    Effect::new(move |_| {
        let _ = reload.get();
        let Some(token) = current_token(&session) else {
            set_loading_videos.set(false);
            set_load_error.set(Some("You must be logged in to see this workspace.".to_string()));
            return;
        };
        set_loading_videos.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match api::list_videos(&token, &wsid.get_value()).await {
                Ok(list) => {
                    set_videos.try_set(list);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("video list failed: {}", err).into());
                    set_load_error.try_set(Some(err.to_string()));
                }
            }
            set_loading_videos.try_set(false);
        });
    });

    // "Current workspace" is derived by matching the route id against the
    // fetched list; no match renders the pending/not-found state.
    let current = Memo::new(move |_| {
        workspace_by_id(&workspaces.get(), &wsid.get_value()).cloned()
    });

    let on_created = Callback::new(move |workspace: Workspace| {
        set_workspaces.update(|list| list.push(workspace));
    });
    let on_uploaded = Callback::new(move |video: Video| {
        set_videos.update(|list| list.push(video));
    });

    view! {
        <div class="page workspace">
            <Navbar />
            <div class="workspace-layout">
                <WorkspaceSidebar
                    workspaces=Signal::derive(move || workspaces.get())
                    active=wsid.get_value()
                    on_create=Callback::new(move |_| set_show_create.set(true))
                />

                <main class="workspace-main">
                    {move || match current.get() {
                        Some(workspace) => {
                            let creator = workspace
                                .creator
                                .as_ref()
                                .map(|user| user.name.clone())
                                .unwrap_or_else(|| "Unknown".to_string());
                            let members: Vec<String> =
                                workspace.members.iter().map(|m| m.name.clone()).collect();
                            view! {
                                <div class="workspace-header">
                                    <h2>{workspace.name.clone()}</h2>
                                    <button
                                        class="btn primary"
                                        on:click=move |_| set_show_upload.set(true)
                                    >
                                        "Upload Video"
                                    </button>
                                </div>
                                <div class="workspace-people">
                                    <p class="workspace-creator">"Created by " {creator}</p>
                                    {(!members.is_empty()).then(|| view! {
                                        <p class="workspace-members">
                                            "Members: " {members.join(", ")}
                                        </p>
                                    })}
                                </div>
                            }
                            .into_any()
                        }
                        None => view! {
                            <div class="workspace-header">
                                <h2>"Loading workspace..."</h2>
                            </div>
                        }
                        .into_any(),
                    }}

                    {move || {
                        if loading_videos.get() {
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
                            <div class="video-grid">
                                <For
                                    each=move || videos.get()
                                    key=|video| video.id.clone()
                                    children=move |video| {
                                        let vid = video.id.clone();
                                        view! {
                                            <div
                                                class="video-card"
                                                on:click=move |_| navigate(&Route::VideoEditor {
                                                    wsid: wsid.get_value(),
                                                    vid: vid.clone(),
                                                })
                                            >
                                                <h3>{video.title.clone()}</h3>
                                            </div>
                                        }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }}
                </main>
            </div>

            {move || show_upload.get().then(|| view! {
                <UploadVideoModal
                    wsid=wsid.get_value()
                    on_close=Callback::new(move |_| set_show_upload.set(false))
                    on_uploaded=on_uploaded
                />
            })}
            {move || show_create.get().then(|| view! {
                <CreateWorkspaceModal
                    on_close=Callback::new(move |_| set_show_create.set(false))
                    on_created=on_created
                />
            })}
        </div>
    }
}
