use std::collections::HashMap;

use contracts::domain::a001_currency::aggregate::Currency;
use contracts::domain::a006_customer::aggregate::Customer;
use contracts::domain::a007_contract::aggregate::{Contract, ContractDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{
    field_error, none_if_blank, parse_optional_number, record_select, FormField, FormShell,
};
use crate::crud::list_page::EditorCtx;
use crate::shared::notify::use_notices;

#[component]
pub fn ContractEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let number = RwSignal::new(String::new());
    let customer_id = RwSignal::new(None::<i64>);
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let currency_id = RwSignal::new(None::<i64>);
    let attachment_name = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Contract>(id).await {
                Ok(contract) => {
                    number.set(contract.number);
                    customer_id.set(Some(contract.customer_id));
                    start_date.set(contract.start_date);
                    end_date.set(contract.end_date.unwrap_or_default());
                    amount.set(contract.amount.map(|a| a.to_string()).unwrap_or_default());
                    currency_id.set(contract.currency_id);
                    attachment_name.set(contract.attachment_name.unwrap_or_default());
                    note.set(contract.note.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let parsed_amount = match parse_optional_number(&amount.get_untracked(), "Amount") {
            Ok(value) => value,
            Err(message) => {
                set_banner.set(Some(message));
                return;
            }
        };

        let dto = ContractDto {
            id: ctx.id,
            number: number.get_untracked().trim().to_string(),
            customer_id: customer_id.get_untracked().unwrap_or(0),
            start_date: start_date.get_untracked().trim().to_string(),
            end_date: none_if_blank(&end_date.get_untracked()),
            amount: parsed_amount,
            currency_id: currency_id.get_untracked(),
            attachment_name: none_if_blank(&attachment_name.get_untracked()),
            note: none_if_blank(&note.get_untracked()),
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
                Some(id) => api.update::<Contract>(id, &dto).await,
                None => api.create::<Contract>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Contract \"{}\" saved", saved.number));
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
            "New contract".to_string()
        } else {
            format!("Contract: {}", number.get())
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
            <FormField label="Number" error=field_error(field_errors, "number")>
                <Input value=number disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Customer" error=field_error(field_errors, "customerId")>
                {record_select::<Customer>(
                    customer_id.into(),
                    Callback::new(move |picked| customer_id.set(picked)),
                    "Select a customer...",
                    Signal::derive(move || saving.get()),
                )}
            </FormField>

            <FormField label="Start date" error=field_error(field_errors, "startDate")>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || start_date.get()
                    on:change=move |ev| start_date.set(event_target_value(&ev))
                />
            </FormField>

            <FormField label="End date" error=field_error(field_errors, "endDate")>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || end_date.get()
                    on:change=move |ev| end_date.set(event_target_value(&ev))
                />
            </FormField>

            <FormField label="Amount" error=field_error(field_errors, "amount")>
                <Input
                    value=amount
                    input_type=InputType::Number
                    placeholder="0.00"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Currency" error=field_error(field_errors, "currencyId")>
                {record_select::<Currency>(
                    currency_id.into(),
                    Callback::new(move |picked| currency_id.set(picked)),
                    "No currency",
                    Signal::derive(move || saving.get()),
                )}
            </FormField>

            <FormField label="Contract file" error=field_error(field_errors, "attachmentName")>
                <Input
                    value=attachment_name
                    placeholder="contract.pdf"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Note" error=field_error(field_errors, "note")>
                <Textarea value=note attr:rows=3 />
            </FormField>
        </FormShell>
    }
}
