pub mod tabs;

use leptos::prelude::*;

pub use tabs::{tab_label_for_key, tab_title};

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}
