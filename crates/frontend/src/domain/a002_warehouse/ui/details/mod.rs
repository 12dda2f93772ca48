use std::collections::HashMap;

use contracts::domain::a002_warehouse::aggregate::{Warehouse, WarehouseDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{field_error, none_if_blank, FormField, FormShell};
use crate::crud::list_page::EditorCtx;
use crate::shared::notify::use_notices;

#[component]
pub fn WarehouseEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let name = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Warehouse>(id).await {
                Ok(warehouse) => {
                    name.set(warehouse.name);
                    address.set(warehouse.address.unwrap_or_default());
                    phone.set(warehouse.phone.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let dto = WarehouseDto {
            id: ctx.id,
            name: name.get_untracked().trim().to_string(),
            address: none_if_blank(&address.get_untracked()),
            phone: none_if_blank(&phone.get_untracked()),
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
                Some(id) => api.update::<Warehouse>(id, &dto).await,
                None => api.create::<Warehouse>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Warehouse \"{}\" saved", saved.name));
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
            "New warehouse".to_string()
        } else {
            format!("Warehouse: {}", name.get())
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

            <FormField label="Address" error=field_error(field_errors, "address")>
                <Input value=address disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Phone" error=field_error(field_errors, "phone")>
                <Input value=phone disabled=Signal::derive(move || saving.get()) />
            </FormField>
        </FormShell>
    }
}
