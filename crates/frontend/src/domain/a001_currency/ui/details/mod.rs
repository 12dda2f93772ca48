use std::collections::HashMap;

use contracts::domain::a001_currency::aggregate::{Currency, CurrencyDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{field_error, none_if_blank, FormField, FormShell};
use crate::crud::list_page::EditorCtx;
use crate::shared::notify::use_notices;

#[component]
pub fn CurrencyEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let name = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let symbol = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Currency>(id).await {
                Ok(currency) => {
                    name.set(currency.name);
                    code.set(currency.code);
                    symbol.set(currency.symbol.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let dto = CurrencyDto {
            id: ctx.id,
            name: name.get_untracked().trim().to_string(),
            code: code.get_untracked().trim().to_uppercase(),
            symbol: none_if_blank(&symbol.get_untracked()),
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
                Some(id) => api.update::<Currency>(id, &dto).await,
                None => api.create::<Currency>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Currency \"{}\" saved", saved.name));
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
            "New currency".to_string()
        } else {
            format!("Currency: {}", name.get())
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

            <FormField label="Code" error=field_error(field_errors, "code")>
                <Input
                    value=code
                    placeholder="USD"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Symbol" error=field_error(field_errors, "symbol")>
                <Input
                    value=symbol
                    placeholder="$"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>
        </FormShell>
    }
}
