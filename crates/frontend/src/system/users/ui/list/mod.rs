use contracts::domain::common::Resource;
use contracts::enums::user_role::UserRole;
use contracts::system::users::{User, UserFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField, FormSelect};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};
use crate::session::use_session;

use super::details::UserEditor;

fn filter_fields(filter: RwSignal<UserFilter>) -> AnyView {
    let role_options = std::iter::once(("".to_string(), "All roles".to_string()))
        .chain(
            UserRole::all()
                .into_iter()
                .map(|r| (r.code().to_string(), r.display_name().to_string())),
        )
        .collect::<Vec<_>>();

    view! {
        <FilterField label="Username">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.username.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.username = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="Role">
            <FormSelect
                value=Signal::derive(move || {
                    filter.with(|f| f.role.map(|r| r.code().to_string()).unwrap_or_default())
                })
                on_change=Callback::new(move |code: String| {
                    filter.update(|f| f.role = UserRole::from_code(&code));
                })
                options=role_options
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <UserEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<User> {
    ListSchema {
        page_id: "sys_users--list",
        title: User::list_name(),
        new_label: "New user",
        search_hint: "Username, name or email...",
        columns: vec![
            Column::text("username", "Username", |u: &User| u.username.clone()),
            Column::text("full_name", "Full name", |u: &User| {
                u.full_name.clone().unwrap_or_default()
            }),
            Column::text("email", "Email", |u: &User| {
                u.email.clone().unwrap_or_default()
            }),
            Column::text("role", "Role", |u: &User| u.role.display_name().to_string()),
            Column::text("status", "Status", |u: &User| {
                if u.active { "Active" } else { "Disabled" }.to_string()
            }),
        ],
        default_sort: ("username", true),
        filter_fields,
        editor,
        open: RowOpen::Editor,
        can_edit: |_| true,
        row_actions: None,
    }
}

#[component]
pub fn UsersList() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_admin()
            fallback=|| view! { <div class="placeholder">"Administrator access required"</div> }
        >
            {resource_list_page(schema())}
        </Show>
    }
}
