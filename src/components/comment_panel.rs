//! Comment Panel Component
//!
//! Timestamped comment list plus the composer. The list distinguishes
//! "still fetching" (`None`, spinner) from "no comments yet"
//! (`Some` but empty). Clicking a comment seeks the player to its
//! timestamp; focusing the composer pauses playback so the captured
//! timestamp matches the frame under review.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Spinner;
use crate::models::Comment;
use crate::review::format_timestamp;

/// Comment list and composer for the review view
#[component]
pub fn CommentPanel(
    comments: ReadSignal<Option<Vec<Comment>>>,
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    text: ReadSignal<String>,
    set_text: WriteSignal<String>,
    error: ReadSignal<String>,
    submitting: ReadSignal<bool>,
    on_submit: Callback<()>,
    on_seek: Callback<f64>,
    on_compose_focus: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="comment-panel">
            <h3>"Comments"</h3>
            <h5 class="comment-hint">"Click a comment to jump to that moment"</h5>

            {move || {
                let msg = error.get();
                (!msg.is_empty()).then(|| view! { <p class="error-text">{msg}</p> })
            }}

            <div class="comment-name-row">
                <span class="comment-name-label">"Name:"</span>
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
            </div>

            <div class="comment-list">
                {move || match comments.get() {
                    None => view! { <Spinner small=true /> }.into_any(),
                    Some(list) if list.is_empty() => {
                        view! { <p class="comment-empty">"No comments yet."</p> }.into_any()
                    }
                    Some(list) => view! {
                        <For
                            each=move || list.clone().into_iter().enumerate()
                            key=|(index, _)| *index
                            children=move |(_, comment)| {
                                let timestamp = comment.timestamp;
                                view! {
                                    <div
                                        class="comment-card"
                                        on:click=move |_| on_seek.run(timestamp)
                                    >
                                        <p class="comment-author">{comment.name.clone()}</p>
                                        <p class="comment-text">{comment.text.clone()}</p>
                                        <p class="comment-timestamp">
                                            "⏳ " {format_timestamp(timestamp)}
                                        </p>
                                    </div>
                                }
                            }
                        />
                    }
                    .into_any(),
                }}
            </div>

            <div class="comment-compose">
                <textarea
                    placeholder="Add a comment..."
                    prop:value=move || text.get()
                    on:focus=move |_| on_compose_focus.run(())
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                        set_text.set(area.value());
                    }
                ></textarea>
                <button
                    class="btn primary full-width"
                    disabled=move || submitting.get()
                    on:click=move |_| on_submit.run(())
                >
                    {move || if submitting.get() { "Posting..." } else { "Add Comment" }}
                </button>
            </div>
        </div>
    }
}
