use contracts::domain::common::Resource;
use contracts::domain::a001_currency::aggregate::{Currency, CurrencyFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};

use super::details::CurrencyEditor;

fn filter_fields(filter: RwSignal<CurrencyFilter>) -> AnyView {
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
        <FilterField label="Code">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.code.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.code = none_if_blank(&value));
                }
            />
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <CurrencyEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Currency> {
    ListSchema {
        page_id: "a001_currency--list",
        title: Currency::list_name(),
        new_label: "New currency",
        search_hint: "Name or code...",
        columns: vec![
            Column::text("name", "Name", |c: &Currency| c.name.clone()),
            Column::text("code", "Code", |c: &Currency| c.code.clone()),
            Column::text("symbol", "Symbol", |c: &Currency| {
                c.symbol.clone().unwrap_or_default()
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
pub fn CurrencyList() -> impl IntoView {
    resource_list_page(schema())
}
