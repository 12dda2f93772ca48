use contracts::domain::common::Resource;
use contracts::domain::a003_product_category::aggregate::ProductCategory;
use contracts::domain::a004_product::aggregate::{Product, ProductFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, record_select, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};
use crate::shared::number_format::format_money;

use super::details::ProductEditor;

fn filter_fields(filter: RwSignal<ProductFilter>) -> AnyView {
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
        <FilterField label="Barcode">
            <input
                class="form__input"
                prop:value=move || filter.with(|f| f.barcode.clone().unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.barcode = none_if_blank(&value));
                }
            />
        </FilterField>
        <FilterField label="Category">
            {record_select::<ProductCategory>(
                Signal::derive(move || filter.with(|f| f.category_id)),
                Callback::new(move |picked| filter.update(|f| f.category_id = picked)),
                "All categories",
                Signal::from(false),
            )}
        </FilterField>
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <ProductEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<Product> {
    ListSchema {
        page_id: "a004_product--list",
        title: Product::list_name(),
        new_label: "New product",
        search_hint: "Name or barcode...",
        columns: vec![
            Column::text("name", "Name", |p: &Product| p.name.clone()),
            Column::text("barcode", "Barcode", |p: &Product| {
                p.barcode.clone().unwrap_or_default()
            }),
            Column::text("category", "Category", |p: &Product| {
                p.category_name.clone().unwrap_or_default()
            }),
            Column::number("purchase_price", "Purchase price", |p: &Product| {
                p.purchase_price.map(format_money).unwrap_or_default()
            }),
            Column::number("sale_price", "Sale price", |p: &Product| {
                p.sale_price.map(format_money).unwrap_or_default()
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
pub fn ProductList() -> impl IntoView {
    resource_list_page(schema())
}
