use contracts::domain::common::Resource;
use contracts::domain::a008_expense::aggregate::{Expense, ExpenseFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};
use crate::shared::number_format::format_money;

use super::details::ExpenseEditor;

fn filter_fields(filter: RwSignal<ExpenseFilter>) -> AnyView {
    view! {
        <FilterField label="Title">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.title.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.title = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="From">
            <input
                type="date"
                class="form__input"
                prop:value=move || filter.with(|f| f.date_from.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.date_from = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="To">
            <input
                type="date"
                class="form__input"
                prop:value=move || filter.with(|f| f.date_to.clone().unwrap_or_default())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.date_to = none_if_blank(&value));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <ExpenseEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Expense> {
    ListSchema {
        page_id: "a008_expense--list",
        title: Expense::list_name(),
        new_label: "New expense",
        search_hint: "Title...",
        columns: vec![
            Column::text("title", "Title", |e: &Expense| e.title.clone()),
            Column::number("amount", "Amount", |e: &Expense| format_money(e.amount)),
            Column::date("date", "Date", |e: &Expense| e.expense_date.clone()),
            Column::text("note", "Note", |e: &Expense| {
                e.note.clone().unwrap_or_default()
            }),
        ],
        default_sort: ("date", false),
        filter_fields,
        editor,
        open: RowOpen::Editor,
        can_edit: |_| true,
        row_actions: None,
    }
}

#[component]
pub fn ExpenseList() -> impl IntoView {
    resource_list_page(schema())
}
