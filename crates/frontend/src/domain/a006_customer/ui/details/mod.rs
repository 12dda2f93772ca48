use std::collections::HashMap;

use contracts::domain::a006_customer::aggregate::{Customer, CustomerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{field_error, none_if_blank, FormField, FormShell};
use crate::crud::list_page::EditorCtx;
use crate::shared::notify::use_notices;

#[component]
pub fn CustomerEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Customer>(id).await {
                Ok(customer) => {
                    name.set(customer.name);
                    phone.set(customer.phone.unwrap_or_default());
                    email.set(customer.email.unwrap_or_default());
                    address.set(customer.address.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let dto = CustomerDto {
            id: ctx.id,
            name: name.get_untracked().trim().to_string(),
            phone: none_if_blank(&phone.get_untracked()),
            email: none_if_blank(&email.get_untracked()),
            address: none_if_blank(&address.get_untracked()),
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
                Some(id) => api.update::<Customer>(id, &dto).await,
                None => api.create::<Customer>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Customer \"{}\" saved", saved.name));
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
            "New customer".to_string()
        } else {
            format!("Customer: {}", name.get())
        }
    });

    view! {
        <FormShell
            title=title
            banner=banner
            saving=saving
            on_save=on_save
            on_cancel=ctx.on_cancel
        >
            <FormField label="Name" error=field_error(field_errors, "name")>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Phone" error=field_error(field_errors, "phone")>
                <Input value=phone disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Email" error=field_error(field_errors, "email")>
                <Input
                    value=email
                    input_type=InputType::Email
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Address" error=field_error(field_errors, "address")>
                <Input value=address disabled=Signal::derive(move || saving.get()) />
            </FormField>
        </FormShell>
    }
}
