use std::collections::HashMap;

use contracts::enums::user_role::UserRole;
use contracts::system::users::{User, UserDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{field_error, none_if_blank, FormField, FormSelect, FormShell};
use crate::crud::list_page::EditorCtx;
use crate::shared::notify::use_notices;

#[component]
pub fn UserEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let username = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::User);
    let active = RwSignal::new(true);
    let attachment_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<User>(id).await {
                Ok(user) => {
                    username.set(user.username);
                    full_name.set(user.full_name.unwrap_or_default());
                    email.set(user.email.unwrap_or_default());
                    role.set(user.role);
                    active.set(user.active);
                    attachment_name.set(user.attachment_name.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let dto = UserDto {
            id: ctx.id,
            username: username.get_untracked().trim().to_string(),
            full_name: none_if_blank(&full_name.get_untracked()),
            email: none_if_blank(&email.get_untracked()),
            role: role.get_untracked(),
            active: active.get_untracked(),
            attachment_name: none_if_blank(&attachment_name.get_untracked()),
            // Blank on an existing user keeps the stored password.
            password: none_if_blank(&password.get_untracked()),
        };

        if let Err(message) = dto.validate() {
            set_banner.set(Some(message));
            return;
        }
        set_banner.set(None);
        field_errors.set(HashMap::new());
        set_saving.set(true);

        spawn_local(async move {
            let outcome = match ctx.id {
                Some(id) => api.update::<User>(id, &dto).await,
                None => api.create::<User>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("User \"{}\" saved", saved.username));
                    ctx.on_saved.run(());
                }
                Err(ApiError::Rejected {
                    message,
                    field_errors: fields,
                    ..
                }) => {
                    field_errors.set(fields);
                    set_banner.set(Some(message));
                    set_saving.set(false);
                }
                Err(err) => {
                    notices.api_error(&err);
                    set_saving.set(false);
                }
            }
        });
    });

    let title = Signal::derive(move || {
        if ctx.id.is_none() {
            "New user".to_string()
        } else {
            format!("User: {}", username.get())
        }
    });

    let role_options = UserRole::all()
        .into_iter()
        .map(|r| (r.code().to_string(), r.display_name().to_string()))
        .collect::<Vec<_>>();

    view! {
        <FormShell
            title=title
            banner=banner
            saving=saving
            on_save=on_save
            on_cancel=ctx.on_cancel
        >
            <FormField label="Username" error=field_error(field_errors, "username")>
                <Input value=username disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Full name" error=field_error(field_errors, "fullName")>
                <Input value=full_name disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Email" error=field_error(field_errors, "email")>
                <Input
                    value=email
                    input_type=InputType::Email
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Role" error=field_error(field_errors, "role")>
                <FormSelect
                    value=Signal::derive(move || role.get().code().to_string())
                    on_change=Callback::new(move |code: String| {
                        if let Some(parsed) = UserRole::from_code(&code) {
                            role.set(parsed);
                        }
                    })
                    options=role_options
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Password" error=field_error(field_errors, "password")>
                <Input
                    value=password
                    input_type=InputType::Password
                    placeholder=if ctx.id.is_some() {
                        "Leave blank to keep the current password"
                    } else {
                        "At least 6 characters"
                    }
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Agreement file" error=field_error(field_errors, "attachmentName")>
                <Input
                    value=attachment_name
                    placeholder="document.pdf"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="">
                <Checkbox checked=active label="Active" />
            </FormField>
        </FormShell>
    }
}
