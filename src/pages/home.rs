//! Home Page
//!
//! Static landing page, links into signup/login.

use leptos::prelude::*;

use crate::components::Footer;
use crate::router::{navigate, Route};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home">
            <div class="home-topbar">
                <div class="navbar-brand">
                    <span class="navbar-logo">"🔥"</span>
                    <h2>"Flame"</h2>
                </div>
                <button class="btn secondary" on:click=move |_| navigate(&Route::Login)>
                    "Login"
                </button>
            </div>

            <section class="hero">
                <h1>"Ignite Your Video Editing Workflow"</h1>
                <p>"Get precise, time-stamped feedback on your video projects, faster than ever."</p>
                <button class="btn primary large" on:click=move |_| navigate(&Route::Signup)>
                    "Try Flame For Free"
                </button>
            </section>

            <section class="home-pitch">
                <h2>"Tired of Endless Feedback Revisions?"</h2>
                <p>"Email chains. Vague comments. Misunderstood feedback. We know the struggle."</p>
                <ul>
                    <li>"Comments pinned to the exact frame"</li>
                    <li>"One share link for external reviewers — no account needed"</li>
                    <li>"Workspaces to keep every project and its team together"</li>
                </ul>
            </section>

            <Footer />
        </div>
    }
}
