//! Video Review Page
//!
//! The single review view, parameterized by viewer role instead of the
//! historical copy-pasted page-per-role. Owners get the privacy toggle,
//! share control and workspace breadcrumb; members and public reviewers
//! get the player and the comment panel only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::api::{self, ApiError, NewComment};
use crate::components::{CommentPanel, Footer, Navbar, Spinner};
use crate::models::{Comment, Video};
use crate::review::{round_timestamp, share_url};
use crate::session::{current_display_name, current_token, use_session};
use crate::validate::validate_comment;

/// What the current viewer is allowed to see and do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerRole {
    /// Workspace owner/editor: privacy toggle, share link, breadcrumb.
    Owner,
    /// Authenticated member: review and comment, no privacy controls.
    Member,
    /// External reviewer on a share link. No session required.
    Public,
}

impl ViewerRole {
    pub fn can_toggle_privacy(self) -> bool {
        matches!(self, ViewerRole::Owner)
    }

    /// Only the owner variant resumes playback after posting a comment;
    /// everyone pauses on seek so playback never starts by surprise.
    pub fn resumes_after_submit(self) -> bool {
        matches!(self, ViewerRole::Owner)
    }

    pub fn requires_session(self) -> bool {
        !matches!(self, ViewerRole::Public)
    }
}

#[component]
pub fn ReviewPage(vid: String, role: ViewerRole) -> impl IntoView {
    let session = use_session();
    let vid = StoredValue::new(vid);

    let (video, set_video) = signal(Option::<Video>::None);
    let (comments, set_comments) = signal(Option::<Vec<Comment>>::None);
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (reload, set_reload) = signal(0u32);

    let (name, set_name) = signal(current_display_name(&session).unwrap_or_default());
    let (text, set_text) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let (is_public, set_is_public) = signal(Option::<bool>::None);
    let (share, set_share) = signal(String::new());
    let (notice, set_notice) = signal(String::new());
    let (workspace_name, set_workspace_name) = signal(String::new());

    let video_ref = NodeRef::<leptos::html::Video>::new();

    let origin = move || window().location().origin().unwrap_or_default();

    // Fetch the video (and, for owners, its workspace name) on mount and
    // on every retry.
    Effect::new(move |_| {
        let _ = reload.get();
        let token = current_token(&session);
        let page_origin = origin();
        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            let fetched = match role {
                ViewerRole::Public => api::get_shared_video(&vid.get_value()).await,
                ViewerRole::Owner | ViewerRole::Member => match token.as_deref() {
                    Some(token) => api::get_video(token, &vid.get_value()).await,
                    None => Err(ApiError::Status {
                        status: 401,
                        message: "You must be logged in to view this video.".to_string(),
                    }),
                },
            };

            match fetched {
                Ok(fetched_video) => {
                    set_comments.try_set(Some(
                        fetched_video.comments.clone().unwrap_or_default(),
                    ));
                    set_is_public.try_set(Some(fetched_video.is_public));
                    if fetched_video.is_public {
                        set_share.try_set(share_url(&page_origin, &fetched_video.id));
                    } else {
                        set_share.try_set(String::new());
                    }

                    if role.can_toggle_privacy() {
                        if let (Some(token), Some(workspace_id)) =
                            (token.as_deref(), fetched_video.workspace.as_deref())
                        {
                            match api::get_workspace(token, workspace_id).await {
                                Ok(workspace) => {
                                    set_workspace_name.try_set(workspace.name);
                                }
                                Err(err) => {
                                    web_sys::console::error_1(
                                        &format!("workspace fetch failed: {}", err).into(),
                                    );
                                }
                            }
                        }
                    }

                    set_video.try_set(Some(fetched_video));
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("video fetch failed: {}", err).into());
                    set_load_error.try_set(Some(err.to_string()));
                }
            }
            set_loading.try_set(false);
        });
    });

    // Seek-on-click: jump to the comment's timestamp and pause so the
    // reviewer sees the exact frame.
    let on_seek = Callback::new(move |seconds: f64| {
        if let Some(player) = video_ref.get() {
            player.set_current_time(seconds);
            let _ = player.pause();
        }
    });

    // Pause-on-focus: the captured timestamp must match the frame the
    // reviewer is looking at while typing.
    let on_compose_focus = Callback::new(move |_| {
        if let Some(player) = video_ref.get() {
            let _ = player.pause();
        }
    });

    let on_submit = Callback::new(move |_| {
        let author = name.get();
        let body = text.get();
        if let Err(msg) = validate_comment(&author, &body) {
            set_error.set(msg.to_string());
            return;
        }

        set_error.set(String::new());
        let timestamp =
            round_timestamp(video_ref.get().map(|p| p.current_time()).unwrap_or(0.0));
        let token = current_token(&session);
        set_submitting.set(true);
        spawn_local(async move {
            let author = author.trim().to_string();
            let body = body.trim().to_string();
            let submission = NewComment { name: &author, text: &body, timestamp };
            match api::add_comment(token.as_deref(), &vid.get_value(), &submission).await {
                Ok(created) => {
                    // Prefer the server's record; it may carry an id.
                    let appended = created.unwrap_or(Comment {
                        name: author,
                        text: body,
                        timestamp,
                    });
                    set_comments.try_update(|list| {
                        if let Some(list) = list {
                            list.push(appended);
                        }
                    });
                    set_text.try_set(String::new());
                    if role.resumes_after_submit() {
                        if let Some(player) = video_ref.get() {
                            let _ = player.play();
                        }
                    }
                }
                Err(err) => {
                    set_error.try_set(err.to_string());
                }
            }
            set_submitting.try_set(false);
        });
    });

    let on_privacy_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        let next_public = select.value() == "public";
        let Some(token) = current_token(&session) else {
            return;
        };
        let page_origin = origin();
        spawn_local(async move {
            match api::set_privacy(&token, &vid.get_value(), next_public).await {
                Ok(()) => {
                    set_is_public.try_set(Some(next_public));
                    if next_public {
                        set_share.try_set(share_url(&page_origin, &vid.get_value()));
                    } else {
                        set_share.try_set(String::new());
                    }
                    set_notice.try_set(String::new());
                }
                Err(err) => {
                    set_error.try_set(err.to_string());
                    // Re-notify the bound value so the select snaps back.
                    set_is_public.try_update(|_| ());
                }
            }
        });
    };

    let on_share = move |_| {
        if is_public.get() != Some(true) {
            set_notice.set("This video is private and cannot be shared.".to_string());
            return;
        }
        let link = share.get();
        spawn_local(async move {
            let promise = window().navigator().clipboard().write_text(&link);
            match JsFuture::from(promise).await {
                Ok(_) => {
                    set_notice.try_set("Share link copied to clipboard.".to_string());
                }
                Err(_) => {
                    set_notice
                        .try_set("Could not copy the link. Please copy it manually.".to_string());
                }
            }
        });
    };

    view! {
        <div class="page review">
            <Navbar>
                {role.can_toggle_privacy().then(|| view! {
                    <select
                        class="privacy-select"
                        disabled=move || is_public.get().is_none()
                        prop:value=move || match is_public.get() {
                            None => "",
                            Some(true) => "public",
                            Some(false) => "private",
                        }
                        on:change=on_privacy_change
                    >
                        <option value="" disabled>"Select Privacy"</option>
                        <option value="public">"Public"</option>
                        <option value="private">"Private"</option>
                    </select>
                    <button
                        class="btn share"
                        disabled=move || is_public.get() != Some(true)
                        on:click=on_share
                    >
                        "Share"
                    </button>
                })}
            </Navbar>

            {move || {
                let msg = notice.get();
                (!msg.is_empty()).then(|| view! { <p class="notice-text">{msg}</p> })
            }}

            <div class="review-layout">
                <div class="review-player">
                    <h2 class="review-title">
                        {move || {
                            let breadcrumb = workspace_name.get();
                            (!breadcrumb.is_empty()).then(|| view! {
                                <span class="review-breadcrumb">{breadcrumb} " / "</span>
                            })
                        }}
                        {move || video.get().map(|v| v.title).unwrap_or_else(|| "Loading...".to_string())}
                    </h2>

                    {move || {
                        if loading.get() {
                            return view! {
                                <div class="player-placeholder">
                                    <Spinner />
                                </div>
                            }
                            .into_any();
                        }
                        if let Some(msg) = load_error.get() {
                            return view! {
                                <div class="player-placeholder load-error">
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
                        match video.get() {
                            Some(v) => view! {
                                <video
                                    node_ref=video_ref
                                    controls
                                    class="review-video"
                                    src=v.url
                                ></video>
                            }
                            .into_any(),
                            None => view! {
                                <div class="player-placeholder">
                                    <Spinner />
                                </div>
                            }
                            .into_any(),
                        }
                    }}
                </div>

                <CommentPanel
                    comments=comments
                    name=name
                    set_name=set_name
                    text=text
                    set_text=set_text
                    error=error
                    submitting=submitting
                    on_submit=on_submit
                    on_seek=on_seek
                    on_compose_focus=on_compose_focus
                />
            </div>

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_owner_controls_privacy() {
        assert!(ViewerRole::Owner.can_toggle_privacy());
        assert!(!ViewerRole::Member.can_toggle_privacy());
        assert!(!ViewerRole::Public.can_toggle_privacy());
    }

    #[test]
    fn only_the_owner_resumes_after_posting() {
        assert!(ViewerRole::Owner.resumes_after_submit());
        assert!(!ViewerRole::Member.resumes_after_submit());
        assert!(!ViewerRole::Public.resumes_after_submit());
    }

    #[test]
    fn public_viewers_need_no_session() {
        assert!(ViewerRole::Owner.requires_session());
        assert!(ViewerRole::Member.requires_session());
        assert!(!ViewerRole::Public.requires_session());
    }
}
