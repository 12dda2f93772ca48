use contracts::domain::common::Resource;
use contracts::domain::a006_customer::aggregate::{Customer, CustomerFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};

use super::details::CustomerEditor;

fn filter_fields(filter: RwSignal<CustomerFilter>) -> AnyView {
    view! {
        <FilterField label="Name">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.name.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.name = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="Phone">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.phone.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.phone = none_if_blank(&value));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <CustomerEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Customer> {
    ListSchema {
        page_id: "a006_customer--list",
        title: Customer::list_name(),
        new_label: "New customer",
        search_hint: "Name, phone or email...",
        columns: vec![
            Column::text("name", "Name", |c: &Customer| c.name.clone()),
            Column::text("phone", "Phone", |c: &Customer| {
                c.phone.clone().unwrap_or_default()
            }),
            Column::text("email", "Email", |c: &Customer| {
                c.email.clone().unwrap_or_default()
            }),
            Column::text("address", "Address", |c: &Customer| {
                c.address.clone().unwrap_or_default()
            }),
        ],
        default_sort: ("name", true),
        filter_fields,
        editor,
        open: RowOpen::Editor,
        can_edit: |_| true,
        row_actions: None,
    }
}

#[component]
pub fn CustomerList() -> impl IntoView {
    resource_list_page(schema())
}
