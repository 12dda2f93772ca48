use leptos::prelude::*;

use crate::api::ApiClient;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::session::Session;
use crate::shared::dialog::{DialogHost, DialogStackService};
use crate::shared::notify::{NoticeHost, NoticeService};

#[component]
pub fn App() -> impl IntoView {
    let session = Session::restore();
    provide_context(session);
    provide_context(ApiClient::new(session));
    provide_context(AppGlobalContext::new());

    let dialogs = DialogStackService::new();
    provide_context(dialogs);
    provide_context(NoticeService::new());

    // A session reset tears down whatever was stacked on screen.
    Effect::new(move |_| {
        if session.token.get().is_none() {
            dialogs.clear();
        }
    });

    view! {
        <AppRoutes />
        <DialogHost />
        <NoticeHost />
    }
}
