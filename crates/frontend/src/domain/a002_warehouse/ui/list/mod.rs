use contracts::domain::common::Resource;
use contracts::domain::a002_warehouse::aggregate::{Warehouse, WarehouseFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};

use super::details::WarehouseEditor;

fn filter_fields(filter: RwSignal<WarehouseFilter>) -> AnyView {
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
        <FilterField label="Address">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.address.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.address = none_if_blank(&value));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <WarehouseEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Warehouse> {
    ListSchema {
        page_id: "a002_warehouse--list",
        title: Warehouse::list_name(),
        new_label: "New warehouse",
        search_hint: "Name or address...",
        columns: vec![
            Column::text("name", "Name", |w: &Warehouse| w.name.clone()),
            Column::text("address", "Address", |w: &Warehouse| {
                w.address.clone().unwrap_or_default()
            }),
            Column::text("phone", "Phone", |w: &Warehouse| {
                w.phone.clone().unwrap_or_default()
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
pub fn WarehouseList() -> impl IntoView {
    resource_list_page(schema())
}
