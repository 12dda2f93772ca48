use std::collections::HashMap;

use contracts::domain::a008_expense::aggregate::{Expense, ExpenseDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::api::{use_api, ApiError};
use crate::crud::form::{
    field_error, none_if_blank, parse_optional_number, FormField, FormShell,
};
use crate::crud::list_page::EditorCtx;
use crate::shared::date_utils::today_iso;
use crate::shared::notify::use_notices;

#[component]
pub fn ExpenseEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let title_field = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let expense_date = RwSignal::new(today_iso());
    let note = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Expense>(id).await {
                Ok(expense) => {
                    title_field.set(expense.title);
                    amount.set(expense.amount.to_string());
                    expense_date.set(expense.expense_date);
                    note.set(expense.note.unwrap_or_default());
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
            Ok(value) => value.unwrap_or(0.0),
            Err(message) => {
                set_banner.set(Some(message));
                return;
            }
        };

        let dto = ExpenseDto {
            id: ctx.id,
            title: title_field.get_untracked().trim().to_string(),
            amount: parsed_amount,
            expense_date: expense_date.get_untracked().trim().to_string(),
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
                Some(id) => api.update::<Expense>(id, &dto).await,
                None => api.create::<Expense>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Expense \"{}\" saved", saved.title));
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

    let dialog_title = Signal::derive(move || {
        if ctx.id.is_none() {
            "New expense".to_string()
        } else {
            format!("Expense: {}", title_field.get())
        }
    });

    view! {
        <FormShell
            title=dialog_title
            banner=banner
            saving=saving
            on_save=on_save
            on_cancel=ctx.on_cancel
        >
            <FormField label="Title" error=field_error(field_errors, "title")>
                <Input value=title_field disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Amount" error=field_error(field_errors, "amount")>
                <Input
                    value=amount
                    input_type=InputType::Number
                    placeholder="0.00"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Date" error=field_error(field_errors, "expenseDate")>
                <input
                    type="date"
                    class="form__input"
                    prop:value=move || expense_date.get()
                    on:change=move |ev| expense_date.set(event_target_value(&ev))
                />
            </FormField>

            <FormField label="Note" error=field_error(field_errors, "note")>
                <Textarea value=note attr:rows=3 />
            </FormField>
        </FormShell>
    }
}
