use std::collections::HashMap;

use contracts::domain::a003_product_category::aggregate::ProductCategory;
use contracts::domain::a004_product::aggregate::{Product, ProductDto};
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
pub fn ProductEditor(ctx: EditorCtx) -> impl IntoView {
    let api = use_api();
    let notices = use_notices();

    let name = RwSignal::new(String::new());
    let barcode = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let category_id = RwSignal::new(None::<i64>);
    let purchase_price = RwSignal::new(String::new());
    let sale_price = RwSignal::new(String::new());
    let attachment_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let (banner, set_banner) = signal(None::<String>);
    let field_errors = RwSignal::new(HashMap::<String, String>::new());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let Some(id) = ctx.id else {
            return;
        };
        spawn_local(async move {
            match api.get::<Product>(id).await {
                Ok(product) => {
                    name.set(product.name);
                    barcode.set(product.barcode.unwrap_or_default());
                    unit.set(product.unit.unwrap_or_default());
                    category_id.set(product.category_id);
                    purchase_price
                        .set(product.purchase_price.map(|p| p.to_string()).unwrap_or_default());
                    sale_price.set(product.sale_price.map(|p| p.to_string()).unwrap_or_default());
                    attachment_name.set(product.attachment_name.unwrap_or_default());
                    description.set(product.description.unwrap_or_default());
                }
                Err(err) => {
                    notices.api_error(&err);
                    ctx.on_cancel.run(());
                }
            }
        });
    });

    let on_save = Callback::new(move |_| {
        let purchase = match parse_optional_number(&purchase_price.get_untracked(), "Purchase price")
        {
            Ok(value) => value,
            Err(message) => {
                set_banner.set(Some(message));
                return;
            }
        };
        let sale = match parse_optional_number(&sale_price.get_untracked(), "Sale price") {
            Ok(value) => value,
            Err(message) => {
                set_banner.set(Some(message));
                return;
            }
        };

        let dto = ProductDto {
            id: ctx.id,
            name: name.get_untracked().trim().to_string(),
            barcode: none_if_blank(&barcode.get_untracked()),
            unit: none_if_blank(&unit.get_untracked()),
            category_id: category_id.get_untracked(),
            purchase_price: purchase,
            sale_price: sale,
            attachment_name: none_if_blank(&attachment_name.get_untracked()),
            description: none_if_blank(&description.get_untracked()),
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
                Some(id) => api.update::<Product>(id, &dto).await,
                None => api.create::<Product>(&dto).await,
            };
            match outcome {
                Ok(saved) => {
                    notices.success(format!("Product \"{}\" saved", saved.name));
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
            "New product".to_string()
        } else {
            format!("Product: {}", name.get())
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
            <FormField label="Name" error=field_error(field_errors, "name")>
                <Input value=name disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Barcode" error=field_error(field_errors, "barcode")>
                <Input value=barcode disabled=Signal::derive(move || saving.get()) />
            </FormField>

            <FormField label="Unit" error=field_error(field_errors, "unit")>
                <Input
                    value=unit
                    placeholder="pcs"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Category" error=field_error(field_errors, "categoryId")>
                {record_select::<ProductCategory>(
                    category_id.into(),
                    Callback::new(move |picked| category_id.set(picked)),
                    "No category",
                    Signal::derive(move || saving.get()),
                )}
            </FormField>

            <FormField label="Purchase price" error=field_error(field_errors, "purchasePrice")>
                <Input
                    value=purchase_price
                    input_type=InputType::Number
                    placeholder="0.00"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Sale price" error=field_error(field_errors, "salePrice")>
                <Input
                    value=sale_price
                    input_type=InputType::Number
                    placeholder="0.00"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Datasheet file" error=field_error(field_errors, "attachmentName")>
                <Input
                    value=attachment_name
                    placeholder="datasheet.pdf"
                    disabled=Signal::derive(move || saving.get())
                />
            </FormField>

            <FormField label="Description" error=field_error(field_errors, "description")>
                <Textarea value=description attr:rows=3 />
            </FormField>
        </FormShell>
    }
}
