//! Application top bar: sidebar toggle, brand, signed-in user, sign out.

use leptos::prelude::*;

use crate::layout::global_context::use_tabs;
use crate::session::use_session;
use crate::shared::icons::icon;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();
    let session = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let sign_out = move |_| {
        session.sign_out();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || {
                        if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                    }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Inventory ERP"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.display_name()}</span>
                </div>

                <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
