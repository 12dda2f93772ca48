use contracts::domain::common::Resource;
use contracts::domain::a006_customer::aggregate::Customer;
use contracts::domain::a007_contract::aggregate::{Contract, ContractFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, record_select, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};
use crate::shared::number_format::format_money;

use super::details::ContractEditor;

fn filter_fields(filter: RwSignal<ContractFilter>) -> AnyView {
    view! {
        <FilterField label="Number">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.number.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.number = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="Customer">
            {record_select::<Customer>(
                Signal::derive(move || filter.with(|f| f.customer_id)),
                Callback::new(move |picked| filter.update(|f| f.customer_id = picked)),
                "All customers",
                Signal::from(false),
            )}
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
    view! { <ContractEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Contract> {
    ListSchema {
        page_id: "a007_contract--list",
        title: Contract::list_name(),
        new_label: "New contract",
        search_hint: "Number or customer...",
        columns: vec![
            Column::text("number", "Number", |c: &Contract| c.number.clone()),
            Column::text("customer", "Customer", |c: &Contract| {
                c.customer_name.clone().unwrap_or_default()
            }),
            Column::date("start_date", "Start date", |c: &Contract| {
                c.start_date.clone()
            }),
            Column::date("end_date", "End date", |c: &Contract| {
                c.end_date.clone().unwrap_or_default()
            }),
            Column::number("amount", "Amount", |c: &Contract| {
                c.amount.map(format_money).unwrap_or_default()
            }),
            Column::text("currency", "Currency", |c: &Contract| {
                c.currency_code.clone().unwrap_or_default()
            }),
        ],
        default_sort: ("start_date", false),
        filter_fields,
        editor,
        open: RowOpen::Editor,
        can_edit: |_| true,
        row_actions: None,
    }
}

#[component]
pub fn ContractList() -> impl IntoView {
    resource_list_page(schema())
}
