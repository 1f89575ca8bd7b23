//! Signup Page
//!
//! Registers an account. Success routes to Login; no session is
//! established here.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::router::{navigate, Route};

#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::register(name_value.trim(), email_value.trim(), &password_value).await {
                Ok(()) => navigate(&Route::Login),
                Err(err) => {
                    set_error.try_set(err.to_string());
                    set_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth">
            <h2>"Create an Account"</h2>

            {move || {
                let msg = error.get();
                (!msg.is_empty()).then(|| view! { <p class="error-text">{msg}</p> })
            }}

            <form class="auth-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Name"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_name.set(input.value());
                    }
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <button type="submit" class="btn primary full-width" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? "
                <a on:click=move |_| navigate(&Route::Login)>"Login"</a>
            </p>
        </div>
    }
}
