use leptos::prelude::*;

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_tabs;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::session::use_session;
use crate::system::login::LoginPage;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_tabs();

    // Runs once, when the signed-in layout mounts.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.token.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
