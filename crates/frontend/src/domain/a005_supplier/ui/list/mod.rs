use contracts::domain::common::Resource;
use contracts::domain::a005_supplier::aggregate::{Supplier, SupplierFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};

use super::details::SupplierEditor;

fn filter_fields(filter: RwSignal<SupplierFilter>) -> AnyView {
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
        <FilterField label="Email">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.email.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.email = none_if_blank(&value));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <SupplierEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Supplier> {
    ListSchema {
        page_id: "a005_supplier--list",
        title: Supplier::list_name(),
        new_label: "New supplier",
        search_hint: "Name, phone or email...",
        columns: vec![
            Column::text("name", "Name", |s: &Supplier| s.name.clone()),
            Column::text("contact", "Contact person", |s: &Supplier| {
                s.contact_name.clone().unwrap_or_default()
            }),
            Column::text("phone", "Phone", |s: &Supplier| {
                s.phone.clone().unwrap_or_default()
            }),
            Column::text("email", "Email", |s: &Supplier| {
                s.email.clone().unwrap_or_default()
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
pub fn SupplierList() -> impl IntoView {
    resource_list_page(schema())
}
