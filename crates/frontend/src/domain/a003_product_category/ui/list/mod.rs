use contracts::domain::common::Resource;
use contracts::domain::a003_product_category::aggregate::{ProductCategory, ProductCategoryFilter};
use leptos::prelude::*;

use crate::crud::core::Column;
use crate::crud::form::{none_if_blank, FilterField};
use crate::crud::list_page::{resource_list_page, EditorCtx, ListSchema, RowOpen};

use super::details::ProductCategoryEditor;

fn filter_fields(filter: RwSignal<ProductCategoryFilter>) -> AnyView {
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
    }
    .into_any()
}

fn editor(ctx: EditorCtx) -> AnyView {
    view! { <ProductCategoryEditor ctx=ctx /> }.into_any()
}

fn schema() -> ListSchema<ProductCategory> {
    ListSchema {
        page_id: "a003_product_category--list",
        title: ProductCategory::list_name(),
        new_label: "New category",
        search_hint: "Name...",
        columns: vec![
            Column::text("name", "Name", |c: &ProductCategory| c.name.clone()),
            Column::text("description", "Description", |c: &ProductCategory| {
                c.description.clone().unwrap_or_default()
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
pub fn ProductCategoryList() -> impl IntoView {
    resource_list_page(schema())
}
