//! Login Page
//!
//! Exchanges credentials for a session token, then lands the user in
//! their first workspace (or the dashboard when they have none).

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::router::{navigate, Route};
use crate::session::{set_session, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();

        set_error.set(String::new());
        set_loading.set(true);
        spawn_local(async move {
            match api::login(email_value.trim(), &password_value).await {
                Ok(login) => {
                    set_session(&session, login.token.clone(), login.username);
                    // Land in the first workspace when one exists.
                    match api::list_workspaces(&login.token).await {
                        Ok(workspaces) if !workspaces.is_empty() => {
                            navigate(&Route::Workspace { wsid: workspaces[0].id.clone() });
                        }
                        _ => navigate(&Route::Dashboard),
                    }
                }
                Err(err) => {
                    set_error.try_set(err.to_string());
                    set_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="page auth">
            <h2>"Welcome Back"</h2>

            {move || {
                let msg = error.get();
                (!msg.is_empty()).then(|| view! { <p class="error-text">{msg}</p> })
            }}

            <form class="auth-form" on:submit=on_submit>
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
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <p class="auth-switch">
                "Don't have an account? "
                <a on:click=move |_| navigate(&Route::Signup)>"Sign Up"</a>
            </p>
        </div>
    }
}
