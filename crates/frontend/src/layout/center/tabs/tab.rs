use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::use_tabs;

#[component]
pub fn Tab(tab_key: String) -> impl IntoView {
    let ctx = use_tabs();

    let key_for_active = tab_key.clone();
    let is_active =
        Memo::new(move |_| ctx.active.get().as_deref() == Some(key_for_active.as_str()));

    // Looked up live so update_tab_title shows through after a record loads.
    let key_for_title = tab_key.clone();
    let title = Memo::new(move |_| {
        ctx.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key_for_title)
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    });

    let key_for_click = tab_key.clone();
    let on_click = move |_| ctx.activate_tab(&key_for_click);

    let key_for_close = tab_key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{move || title.get()}</span>
            <button class="tab-close" on:click=on_close title="Close tab">"×"</button>
        </div>
    }
}
