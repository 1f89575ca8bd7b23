//! Upload Video Modal
//!
//! File picker plus a coarse progress bar: a fixed intermediate value
//! while the multipart POST is in flight, 100% on success, then the
//! modal closes itself after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::models::Video;
use crate::session::{current_token, use_session};

const CLOSE_DELAY_MS: u32 = 1_000;

/// Modal form for uploading a video into a workspace
#[component]
pub fn UploadVideoModal(
    wsid: String,
    on_close: Callback<()>,
    on_uploaded: Callback<Video>,
) -> impl IntoView {
    let session = use_session();
    let wsid = StoredValue::new(wsid);

    // web_sys::File is not thread-safe, so it lives in a local signal
    let (file, set_file) = signal_local(Option::<web_sys::File>::None);
    let (uploading, set_uploading) = signal(false);
    let (progress, set_progress) = signal(0u8);
    let (error, set_error) = signal(String::new());

    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        set_file.set(input.files().and_then(|files| files.get(0)));
        set_error.set(String::new());
    };

    let upload = move |_| {
        let Some(video_file) = file.get() else {
            set_error.set("Please select a video.".to_string());
            return;
        };
        let Some(token) = current_token(&session) else {
            set_error.set("You must be logged in to upload.".to_string());
            return;
        };

        set_error.set(String::new());
        set_uploading.set(true);
        set_progress.set(10);
        spawn_local(async move {
            match api::upload_video(&token, &wsid.get_value(), &video_file).await {
                Ok(video) => {
                    on_uploaded.run(video);
                    set_progress.try_set(100);
                    TimeoutFuture::new(CLOSE_DELAY_MS).await;
                    on_close.run(());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("upload failed: {}", err).into());
                    set_error.try_set("Upload failed. Try again.".to_string());
                    set_uploading.try_set(false);
                    set_progress.try_set(0);
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Upload Video"</h2>

                <input type="file" accept="video/*" on:change=on_file_change />

                {move || {
                    let msg = error.get();
                    (!msg.is_empty()).then(|| view! { <p class="error-text">{msg}</p> })
                }}

                {move || uploading.get().then(|| view! {
                    <div class="progress-track">
                        <div
                            class="progress-bar"
                            style=move || format!("width: {}%;", progress.get())
                        ></div>
                    </div>
                })}

                <div class="modal-actions">
                    <button type="button" class="btn secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="button"
                        class="btn primary"
                        disabled=move || uploading.get()
                        on:click=upload
                    >
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
